//! Directory scan and merge.

use super::{ScanOutcome, SessionManager};
use crate::document::DocumentId;
use crate::error::SessionError;
use crate::view::{LogLine, ViewLayer};
use std::path::Path;

impl<V: ViewLayer> SessionManager<V> {
    /// Make `dir` the active folder and merge its workflow documents into
    /// the known set.
    ///
    /// Existing known documents are kept. On failure nothing changes.
    pub fn open_folder(&mut self, dir: &Path) -> Result<ScanOutcome, SessionError> {
        let entries = self
            .lister
            .list_entries(dir)
            .map_err(|source| SessionError::Io {
                path: dir.to_path_buf(),
                source,
            })?;

        let documents: Vec<DocumentId> = entries
            .iter()
            .filter(|name| self.filter.extension.matches(name))
            .filter_map(DocumentId::new)
            .collect();
        let matched = documents.len();

        self.state.directory = Some(dir.to_path_buf());
        let added = self.state.merge_known(documents);
        log::info!(
            "Opened folder {:?}: {} workflow documents, {} new",
            dir,
            matched,
            added
        );

        self.view.append_log_line(LogLine::info(format!("Opened folder {}", dir.display())));
        self.render_file_list();

        Ok(ScanOutcome::Scanned { matched, added })
    }
}
