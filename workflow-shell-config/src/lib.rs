//! Configuration system for workflow-shell.
//!
//! This crate provides configuration loading, saving, and default values
//! for the document shell. It includes:
//!
//! - The `Config` struct and its YAML persistence
//! - The workflow file extension and dialog filter settings
//! - Debug log level settings

pub mod config;
pub mod defaults;
pub mod error;
mod types;

// Re-export main types for convenience
pub use config::Config;
pub use error::ConfigError;
pub use types::LogLevel;
