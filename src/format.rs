//! Workflow document format.
//!
//! The session core only sees the [`DocumentFormat`] trait: it hands paths in
//! and passes the loaded [`WorkflowDocument`] straight to `process` without
//! looking inside. [`JsonWorkflowFormat`] is the default implementation.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Highest document version this build can process.
pub const SUPPORTED_VERSION: u32 = 1;

/// Contents of a workflow document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDocument {
    /// Human-facing workflow name
    pub name: String,
    /// Document schema version
    #[serde(default = "default_version")]
    pub version: u32,
    /// Workflow steps; their shape belongs to the workflow engine
    #[serde(default)]
    pub steps: Vec<serde_json::Value>,
}

fn default_version() -> u32 {
    SUPPORTED_VERSION
}

impl WorkflowDocument {
    /// The empty template written for a new document.
    pub fn template(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: SUPPORTED_VERSION,
            steps: Vec::new(),
        }
    }
}

/// Loader, writer and processor for workflow documents.
pub trait DocumentFormat {
    /// Read and parse the document at `path`.
    fn load(&self, path: &Path) -> Result<WorkflowDocument>;

    /// Write a new, valid, empty document at `path`.
    fn create(&self, path: &Path) -> Result<()>;

    /// Initialize a tab's contents from a loaded document.
    fn process(&self, document: &WorkflowDocument) -> Result<()>;
}

/// Errors raised by [`JsonWorkflowFormat`].
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a valid workflow document: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("workflow '{name}' has version {found}, newest supported is {supported}")]
    UnsupportedVersion {
        name: String,
        found: u32,
        supported: u32,
    },
}

/// Workflow documents stored as pretty-printed JSON.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonWorkflowFormat;

impl DocumentFormat for JsonWorkflowFormat {
    fn load(&self, path: &Path) -> Result<WorkflowDocument> {
        let contents = fs::read_to_string(path).map_err(|source| FormatError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let document: WorkflowDocument =
            serde_json::from_str(&contents).map_err(|source| FormatError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("Loaded workflow document from {:?}", path);
        Ok(document)
    }

    fn create(&self, path: &Path) -> Result<()> {
        let name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let json = serde_json::to_string_pretty(&WorkflowDocument::template(name))?;
        fs::write(path, json + "\n").map_err(|source| FormatError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        log::info!("Created workflow document {:?}", path);
        Ok(())
    }

    fn process(&self, document: &WorkflowDocument) -> Result<()> {
        if document.version > SUPPORTED_VERSION {
            return Err(FormatError::UnsupportedVersion {
                name: document.name.clone(),
                found: document.version,
                supported: SUPPORTED_VERSION,
            }
            .into());
        }
        log::debug!(
            "Processed workflow '{}' ({} steps)",
            document.name,
            document.steps.len()
        );
        Ok(())
    }
}
