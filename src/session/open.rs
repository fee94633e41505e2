//! Open an existing document, or focus its tab if it is already open.

use super::{OpenOutcome, SessionManager};
use crate::document::{DocumentId, Resolution};
use crate::error::SessionError;
use crate::view::ViewLayer;
use std::path::Path;

impl<V: ViewLayer> SessionManager<V> {
    /// Open `target` in a new tab before the sentinel.
    ///
    /// With [`Resolution::RelativeToDirectory`] the target is joined to the
    /// active folder; with [`Resolution::Absolute`] it is used as given.
    /// Identity is the base name in both cases, so an already-open name only
    /// gets its tab selected. Load and process both run before any state is
    /// touched, so a failure leaves the session unchanged.
    pub fn open_document(
        &mut self,
        target: &Path,
        resolution: Resolution,
    ) -> Result<OpenOutcome, SessionError> {
        let requested = target.display().to_string();
        let path = match resolution {
            Resolution::RelativeToDirectory => match self.state.directory() {
                Some(dir) => dir.join(target),
                None => return Err(SessionError::MissingContext { name: requested }),
            },
            Resolution::Absolute => target.to_path_buf(),
        };

        let Some(document) = DocumentId::from_path(&path) else {
            return Err(SessionError::OpenFailed {
                name: requested,
                source: anyhow::anyhow!("path has no file name"),
            });
        };

        if let Some(tab) = self.state.tabs.find(document.as_str()) {
            let handle = tab.handle;
            if tab.path != path {
                log::warn!(
                    "{:?} shares the name of open tab {:?}; focusing the open tab",
                    path,
                    tab.path
                );
            }
            self.select_tab(handle);
            return Ok(OpenOutcome::Focused(handle));
        }

        let data = self
            .format
            .load(&path)
            .map_err(|source| SessionError::OpenFailed {
                name: document.to_string(),
                source,
            })?;
        self.format
            .process(&data)
            .map_err(|source| SessionError::OpenFailed {
                name: document.to_string(),
                source,
            })?;
        log::info!("Opened {:?}", path);

        self.state.known.insert(document.clone());
        let handle = self.insert_tab(document, path);
        Ok(OpenOutcome::Opened(handle))
    }
}
