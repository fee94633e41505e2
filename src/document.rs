//! Document identity and extension matching.
//!
//! A document is identified by its base file name. Two requests that share a
//! base name resolve to the same tab, even when their directories differ.

use std::borrow::Borrow;
use std::fmt;
use std::path::{Path, PathBuf};

/// Identity of a workflow document: its base file name, no directory.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocumentId(String);

impl DocumentId {
    /// Build an identifier from a bare name. Any directory part is dropped.
    pub fn new(name: impl AsRef<str>) -> Option<Self> {
        Self::from_path(Path::new(name.as_ref()))
    }

    /// Build an identifier from the last component of `path`.
    ///
    /// Returns `None` for paths with no file name (`/`, `..`, empty).
    pub fn from_path(path: &Path) -> Option<Self> {
        let name = path.file_name()?.to_string_lossy();
        if name.is_empty() {
            return None;
        }
        Some(Self(name.into_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for DocumentId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How an open request names its document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// The name is relative to the active folder (file list clicks).
    RelativeToDirectory,
    /// The name is already a full path (File > Open).
    Absolute,
}

/// The suffix that marks a workflow document, e.g. `.wkfw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentExtension {
    /// Extension without the leading dot.
    bare: String,
    /// Extension with the leading dot.
    dotted: String,
}

impl DocumentExtension {
    /// `extension` may be given with or without its leading dot.
    pub fn new(extension: &str) -> Self {
        let bare = extension.trim_start_matches('.').to_string();
        let dotted = format!(".{bare}");
        Self { bare, dotted }
    }

    /// Extension without the leading dot, as file dialogs expect it.
    pub fn bare(&self) -> &str {
        &self.bare
    }

    pub fn dotted(&self) -> &str {
        &self.dotted
    }

    /// True when `name` ends with the extension and has a non-empty stem.
    pub fn matches(&self, name: &str) -> bool {
        name.len() > self.dotted.len() && name.ends_with(&self.dotted)
    }

    /// Append the extension unless the file name already [`matches`](Self::matches).
    ///
    /// `notes.txt` becomes `notes.txt.wkfw`. Paths without a file name are
    /// returned unchanged.
    pub fn ensure_on(&self, mut path: PathBuf) -> PathBuf {
        let Some(name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            return path;
        };
        if !self.matches(&name) {
            path.set_file_name(format!("{name}{}", self.dotted));
        }
        path
    }
}

impl Default for DocumentExtension {
    fn default() -> Self {
        Self::new("wkfw")
    }
}
