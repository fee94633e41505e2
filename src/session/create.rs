//! The sentinel flow: write a new document and give it a tab.

use super::{CreateOutcome, SessionManager};
use crate::document::DocumentId;
use crate::error::SessionError;
use crate::view::{LogLine, ViewLayer};
use std::path::{Path, PathBuf};

impl<V: ViewLayer> SessionManager<V> {
    /// Prompt for a save path, suggesting the active folder, then create the
    /// document there.
    pub fn create_document(&mut self) -> Result<CreateOutcome, SessionError> {
        let initial_dir = self.state.directory().map(Path::to_path_buf);
        let chosen = self.dialogs.save_as(initial_dir.as_deref(), &self.filter);
        self.complete_create(chosen)
    }

    /// Finish the create flow with the path the save dialog returned.
    ///
    /// `None` or an empty path is a cancel and changes nothing. A name that
    /// was not known before gets a new tab in the sentinel's slot; a name that
    /// is already open only has its tab selected.
    pub fn complete_create(
        &mut self,
        chosen: Option<PathBuf>,
    ) -> Result<CreateOutcome, SessionError> {
        let Some(path) = chosen.filter(|p| !p.as_os_str().is_empty()) else {
            log::debug!("Create cancelled");
            return Ok(CreateOutcome::Cancelled);
        };
        let path = self.filter.extension.ensure_on(path);

        let Some(document) = DocumentId::from_path(&path) else {
            return Err(SessionError::CreateFailed {
                path,
                source: anyhow::anyhow!("path has no file name"),
            });
        };

        if let Err(source) = self.format.create(&path) {
            return Err(SessionError::CreateFailed { path, source });
        }

        let was_known = self.state.is_known(document.as_str());
        if self.state.file_list_shown {
            self.state.merge_known([document.clone()]);
            self.render_file_list();
        } else {
            // First document of the session: the list starts with just this one.
            self.state.known.insert(document.clone());
            self.view.render_file_list(&[document.to_string()]);
            self.state.file_list_shown = true;
        }
        self.view.append_log_line(LogLine::info(format!("Created {}", path.display())));

        if !was_known {
            let handle = self.insert_tab(document, path);
            return Ok(CreateOutcome::Created(handle));
        }

        match self.state.tabs.find(document.as_str()).map(|tab| tab.handle) {
            Some(handle) => {
                self.select_tab(handle);
                Ok(CreateOutcome::Focused(handle))
            }
            None => {
                log::info!("{} was already known; not opening a tab", document);
                Ok(CreateOutcome::AlreadyKnown)
            }
        }
    }
}
