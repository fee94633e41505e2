//! The seam between the session core and whatever draws it.
//!
//! The session issues [`ViewLayer`] commands; the view raises [`ViewEvent`]s.
//! Both sets are closed: nothing else crosses this boundary.

use crate::error::ErrorKind;
use std::fmt;
use std::path::PathBuf;

/// Handle the view hands back for a tab it created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabHandle(pub u64);

/// Severity of a log view line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Info,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line for the log view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub severity: Severity,
    /// Error classification, set on every line produced from a `SessionError`
    pub kind: Option<ErrorKind>,
    pub message: String,
}

impl LogLine {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            kind: None,
            message: message.into(),
        }
    }

    pub fn error(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            kind: Some(kind),
            message: message.into(),
        }
    }
}

/// Commands the session issues to the view.
pub trait ViewLayer {
    /// Replace the file list with `names`, in the given order.
    fn render_file_list(&mut self, names: &[String]);

    /// Create a tab labelled `label` at `position` in the tab strip and
    /// return its handle. Tabs at or after `position` shift right.
    fn create_tab(&mut self, label: &str, position: usize) -> TabHandle;

    /// Give focus to an existing tab.
    fn select_tab(&mut self, handle: TabHandle);

    /// Append a line to the log view.
    fn append_log_line(&mut self, line: LogLine);

    /// Index of the tab under the point `(x, y)` in the tab area, if any.
    fn tab_at(&self, x: i32, y: i32) -> Option<usize>;
}

/// Events the view raises for the session to handle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The user asked to open a folder (menu or button).
    OpenFolderRequested,
    /// The folder picker closed; `None` means cancelled.
    FolderChosen(Option<PathBuf>),
    /// The user asked to open a single file (File > Open).
    OpenFileRequested,
    /// The file picker closed; `None` means cancelled.
    FileChosen(Option<PathBuf>),
    /// A name in the file list was clicked.
    FileListEntryClicked(String),
    /// The tab area was clicked at `(x, y)`.
    TabAreaClicked { x: i32, y: i32 },
    /// The save-as dialog for a new document closed; `None` means cancelled.
    SaveAsPathChosen(Option<PathBuf>),
}
