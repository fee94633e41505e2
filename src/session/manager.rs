//! Construction, event dispatch and error reporting for `SessionManager`.

use super::{Collaborators, SessionManager, SessionState};
use crate::dialogs::FileFilter;
use crate::document::{DocumentId, Resolution};
use crate::error::SessionError;
use crate::tab::{SENTINEL_LABEL, Tab, TabSlot};
use crate::view::{LogLine, TabHandle, ViewEvent, ViewLayer};
use std::path::{Path, PathBuf};

impl<V: ViewLayer> SessionManager<V> {
    /// Create a session and have the view draw the sentinel tab.
    pub fn new(mut view: V, collaborators: Collaborators, filter: FileFilter) -> Self {
        let mut state = SessionState::default();
        let sentinel = view.create_tab(SENTINEL_LABEL, 0);
        state.tabs.attach_sentinel(sentinel);

        log::info!(
            "Session started (documents: *{})",
            filter.extension.dotted()
        );

        Self {
            state,
            view,
            format: collaborators.format,
            lister: collaborators.lister,
            dialogs: collaborators.dialogs,
            filter,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    pub fn filter(&self) -> &FileFilter {
        &self.filter
    }

    /// Rendered tab ordering, sentinel last.
    pub fn tab_order(&self) -> Vec<TabSlot> {
        self.state.tabs.slots()
    }

    /// Write an informational line to the log view.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.view.append_log_line(LogLine::info(message));
    }

    /// Handle one view event to completion.
    ///
    /// Errors are reported to the log view here and never returned.
    pub fn handle_event(&mut self, event: ViewEvent) {
        log::debug!("Handling {:?}", event);
        match event {
            ViewEvent::OpenFolderRequested => {
                let chosen = self.dialogs.pick_folder();
                self.on_folder_chosen(chosen);
            }
            ViewEvent::FolderChosen(chosen) => self.on_folder_chosen(chosen),
            ViewEvent::OpenFileRequested => {
                let chosen = self.dialogs.pick_file(&self.filter);
                self.on_file_chosen(chosen);
            }
            ViewEvent::FileChosen(chosen) => self.on_file_chosen(chosen),
            ViewEvent::FileListEntryClicked(name) => {
                let result = self.open_document(Path::new(&name), Resolution::RelativeToDirectory);
                self.report(result);
            }
            ViewEvent::TabAreaClicked { x, y } => self.on_tab_area_clicked(x, y),
            ViewEvent::SaveAsPathChosen(chosen) => {
                let result = self.complete_create(chosen);
                self.report(result);
            }
        }
        debug_assert_eq!(self.state.check_invariants(), Ok(()));
    }

    /// Focus an existing tab. Touches no document state.
    pub fn select_tab(&mut self, handle: TabHandle) {
        self.view.select_tab(handle);
        self.state.tabs.set_active(handle);
    }

    /// Route a tab-area click: focus a document tab, or run the create flow
    /// when the click lands on the sentinel.
    pub fn on_tab_area_clicked(&mut self, x: i32, y: i32) {
        let Some(index) = self.view.tab_at(x, y) else {
            log::debug!("Tab area click at ({}, {}) hit no tab", x, y);
            return;
        };
        match self.state.tabs.slot_at(index) {
            Some(TabSlot::Document { handle, .. }) => self.select_tab(handle),
            Some(TabSlot::Sentinel) => self.activate_sentinel(),
            None => log::warn!(
                "View reported tab index {} but the session has {} tabs",
                index,
                self.state.tabs.ui_tab_count()
            ),
        }
    }

    /// Run the create-new-document flow, reporting any failure.
    pub fn activate_sentinel(&mut self) {
        let result = self.create_document();
        self.report(result);
    }

    fn on_folder_chosen(&mut self, chosen: Option<PathBuf>) {
        let Some(dir) = chosen else {
            log::debug!("Folder picker cancelled");
            return;
        };
        // Scan failures stay out of the log view.
        if let Err(e) = self.open_folder(&dir) {
            log::warn!("{} ({})", e, e.kind());
        }
    }

    fn on_file_chosen(&mut self, chosen: Option<PathBuf>) {
        let Some(path) = chosen else {
            log::debug!("File picker cancelled");
            return;
        };
        let name = path.file_name().map(|n| n.to_string_lossy().into_owned());
        if !name.is_some_and(|n| self.filter.extension.matches(&n)) {
            log::debug!("Ignoring non-workflow file {:?}", path);
            return;
        }
        let result = self.open_document(&path, Resolution::Absolute);
        self.report(result);
    }

    /// Send a failed operation to the log view; successes pass silently.
    pub(super) fn report<T>(&mut self, result: Result<T, SessionError>) {
        if let Err(e) = result {
            log::error!("{} ({})", e, e.kind());
            self.view.append_log_line(LogLine::error(e.kind(), e.to_string()));
        }
    }

    /// Have the view create a tab for `document` in the sentinel's slot,
    /// register it, and select it.
    pub(super) fn insert_tab(&mut self, document: DocumentId, path: PathBuf) -> TabHandle {
        let position = self.state.tabs.sentinel_position();
        let handle = self.view.create_tab(document.as_str(), position);
        self.state
            .tabs
            .insert_before_sentinel(Tab::new(handle, document, path));
        self.select_tab(handle);
        handle
    }

    /// Tell the view to redraw the file list from the known documents.
    pub(super) fn render_file_list(&mut self) {
        let names = self.state.file_list();
        self.view.render_file_list(&names);
        self.state.file_list_shown = true;
    }
}
