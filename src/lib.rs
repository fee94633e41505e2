// Library exports for testing and potential library use
//
// The session core (`session`, `tab`, `document`, `view`, `error`) never
// touches a terminal or a real dialog; `app` and `console` are the only
// front-end, and `format`, `directory` and `dialogs` hold the default
// collaborator implementations.

/// Application version (root crate version, for use by sub-crates).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod app;
pub mod cli;
pub mod console;
pub mod debug;
pub mod dialogs;
pub mod directory;
pub mod document;
pub mod error;
pub mod format;
pub mod session;
pub mod tab;
pub mod view;

pub use workflow_shell_config as config;
