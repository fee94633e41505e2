//! Filesystem enumeration for folder scans.

use std::io;
use std::path::Path;

/// Lists the entry names of a directory.
pub trait DirectoryLister {
    /// Names of every entry directly inside `dir`, in no particular order.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>>;
}

/// [`DirectoryLister`] backed by `std::fs::read_dir`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(dir)? {
            let entry = entry?;
            names.push(entry.file_name().to_string_lossy().into_owned());
        }
        log::debug!("Listed {} entries in {:?}", names.len(), dir);
        Ok(names)
    }
}
