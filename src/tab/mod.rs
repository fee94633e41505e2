//! Document tabs and the trailing "create new document" sentinel.

pub mod manager;

pub use manager::TabManager;

use crate::document::DocumentId;
use crate::view::TabHandle;
use std::path::PathBuf;

/// Label the view shows on the sentinel tab.
pub const SENTINEL_LABEL: &str = "+";

/// An open document tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    /// Handle returned by the view when the tab was created
    pub handle: TabHandle,
    /// Identity of the document shown in this tab
    pub document: DocumentId,
    /// Path the document was opened from or created at
    pub path: PathBuf,
}

impl Tab {
    pub fn new(handle: TabHandle, document: DocumentId, path: PathBuf) -> Self {
        Self {
            handle,
            document,
            path,
        }
    }
}

/// One slot of the rendered tab ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TabSlot {
    Document {
        handle: TabHandle,
        document: DocumentId,
    },
    Sentinel,
}

impl TabSlot {
    pub fn is_sentinel(&self) -> bool {
        matches!(self, TabSlot::Sentinel)
    }
}
