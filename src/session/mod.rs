//! Session state and the manager that keeps it consistent
//!
//! Three views of the world must agree at all times: the documents known to
//! exist in the active folder, the ordered document tabs, and the tabs the
//! view actually shows. [`SessionManager`] is the only writer of
//! [`SessionState`]; the flows live in sibling files:
//!
//! - `scan`: open a folder and merge its documents
//! - `open`: open an existing document or focus its tab
//! - `create`: the sentinel flow that writes a new document
//! - `manager`: construction, event dispatch and error reporting

mod create;
mod manager;
mod open;
mod scan;

use crate::dialogs::{Dialogs, FileFilter};
use crate::directory::{DirectoryLister, FsDirectoryLister};
use crate::document::DocumentId;
use crate::format::{DocumentFormat, JsonWorkflowFormat};
use crate::tab::TabManager;
use crate::view::TabHandle;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

/// Everything the session knows, owned by one [`SessionManager`].
#[derive(Debug, Default)]
pub struct SessionState {
    /// Active folder, absent until one is opened
    directory: Option<PathBuf>,
    /// Document names believed to exist; never shrinks
    known: BTreeSet<DocumentId>,
    /// Open document tabs plus the sentinel
    tabs: TabManager,
    /// Whether the view has been given a file list yet
    file_list_shown: bool,
}

impl SessionState {
    pub fn directory(&self) -> Option<&Path> {
        self.directory.as_deref()
    }

    pub fn known_documents(&self) -> &BTreeSet<DocumentId> {
        &self.known
    }

    pub fn is_known(&self, name: &str) -> bool {
        self.known.contains(name)
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    /// Identifiers of the open tabs, in display order
    pub fn open_documents(&self) -> Vec<&DocumentId> {
        self.tabs.tabs().iter().map(|tab| &tab.document).collect()
    }

    pub fn file_list_shown(&self) -> bool {
        self.file_list_shown
    }

    /// Known names in the order the file list shows them
    pub fn file_list(&self) -> Vec<String> {
        self.known.iter().map(|id| id.to_string()).collect()
    }

    /// Union `names` into the known documents; returns how many were new.
    fn merge_known(&mut self, names: impl IntoIterator<Item = DocumentId>) -> usize {
        let before = self.known.len();
        self.known.extend(names);
        self.known.len() - before
    }

    /// Verify the cross-view invariants, describing the first violation.
    pub fn check_invariants(&self) -> Result<(), String> {
        let open = self.open_documents();
        let unique: BTreeSet<&DocumentId> = open.iter().copied().collect();
        if unique.len() != open.len() {
            return Err(format!("duplicate open tab in {open:?}"));
        }
        if let Some(missing) = open.iter().find(|id| !self.known.contains(**id)) {
            return Err(format!("open tab {missing} is not a known document"));
        }
        if self.tabs.sentinel().is_some()
            && !self.tabs.slots().last().is_some_and(|slot| slot.is_sentinel())
        {
            return Err("sentinel is not the last tab".to_string());
        }
        Ok(())
    }
}

/// External services the session calls into.
pub struct Collaborators {
    pub format: Box<dyn DocumentFormat>,
    pub lister: Box<dyn DirectoryLister>,
    pub dialogs: Box<dyn Dialogs>,
}

impl Collaborators {
    /// JSON documents on the real filesystem, with the given dialogs.
    pub fn filesystem(dialogs: Box<dyn Dialogs>) -> Self {
        Self {
            format: Box::new(JsonWorkflowFormat),
            lister: Box::new(FsDirectoryLister),
            dialogs,
        }
    }
}

/// Result of an "open folder" request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// The folder was listed and merged
    Scanned {
        /// Workflow documents found in the folder
        matched: usize,
        /// How many of those were not known before
        added: usize,
    },
}

/// Result of an open request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenOutcome {
    /// A new tab was created and selected
    Opened(TabHandle),
    /// The document was already open; its tab was selected
    Focused(TabHandle),
}

/// Result of the create-new-document flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The save dialog was dismissed
    Cancelled,
    /// The document was written and a tab inserted before the sentinel
    Created(TabHandle),
    /// The name was already open; its tab was selected
    Focused(TabHandle),
    /// The name was already known but not open; no tab was created
    AlreadyKnown,
}

/// Owns the session state and mediates every open, create and select.
pub struct SessionManager<V> {
    state: SessionState,
    view: V,
    format: Box<dyn DocumentFormat>,
    lister: Box<dyn DirectoryLister>,
    dialogs: Box<dyn Dialogs>,
    filter: FileFilter,
}
