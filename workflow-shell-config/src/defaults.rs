//! Default value functions for configuration.
//!
//! Used as `#[serde(default = "crate::defaults::...")]` attributes on
//! `Config` fields.

// ── Primitive helpers ──────────────────────────────────────────────────────

pub fn bool_false() -> bool {
    false
}

// ── Documents ──────────────────────────────────────────────────────────────

pub fn extension() -> String {
    "wkfw".to_string()
}

pub fn file_filter_label() -> String {
    "Workflow Files".to_string()
}

// ── Log view ───────────────────────────────────────────────────────────────

pub fn welcome_message() -> String {
    "Welcome to Workflow Shell!".to_string()
}

pub fn log_level() -> crate::types::LogLevel {
    crate::types::LogLevel::Info
}
