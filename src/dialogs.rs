//! File-picker dialogs.
//!
//! Every dialog returns `None` when the user cancels. An empty answer counts
//! as a cancel.

use crate::document::DocumentExtension;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Extension filter shown in file dialogs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileFilter {
    /// Label such as "Workflow Files"
    pub label: String,
    pub extension: DocumentExtension,
}

impl FileFilter {
    pub fn new(label: impl Into<String>, extension: DocumentExtension) -> Self {
        Self {
            label: label.into(),
            extension,
        }
    }
}

/// Folder, open and save-as pickers.
pub trait Dialogs {
    fn pick_folder(&mut self) -> Option<PathBuf>;

    fn pick_file(&mut self, filter: &FileFilter) -> Option<PathBuf>;

    /// Ask where to save a new document, suggesting `initial_dir` when given.
    fn save_as(&mut self, initial_dir: Option<&Path>, filter: &FileFilter) -> Option<PathBuf>;
}

/// Dialogs answered by typing a path on stdin.
#[derive(Debug, Default)]
pub struct ConsoleDialogs;

impl ConsoleDialogs {
    fn prompt(&self, question: &str) -> Option<PathBuf> {
        print!("{question}");
        if let Err(e) = io::stdout().flush() {
            log::warn!("Failed to flush prompt: {}", e);
        }

        let mut answer = String::new();
        match io::stdin().read_line(&mut answer) {
            Ok(0) => None,
            Ok(_) => parse_answer(&answer),
            Err(e) => {
                log::warn!("Failed to read dialog answer: {}", e);
                None
            }
        }
    }
}

impl Dialogs for ConsoleDialogs {
    fn pick_folder(&mut self) -> Option<PathBuf> {
        self.prompt("Folder to open (empty to cancel): ")
    }

    fn pick_file(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        self.prompt(&format!(
            "{} (*{}) to open (empty to cancel): ",
            filter.label,
            filter.extension.dotted()
        ))
    }

    fn save_as(&mut self, initial_dir: Option<&Path>, filter: &FileFilter) -> Option<PathBuf> {
        let question = match initial_dir {
            Some(dir) => format!(
                "Save new {} (*{}) as, relative to {} (empty to cancel): ",
                filter.label,
                filter.extension.dotted(),
                dir.display()
            ),
            None => format!(
                "Save new {} (*{}) as (empty to cancel): ",
                filter.label,
                filter.extension.dotted()
            ),
        };
        let path = self.prompt(&question)?;
        Some(match initial_dir {
            Some(dir) if path.is_relative() => dir.join(path),
            _ => path,
        })
    }
}

/// Turn a typed answer into a path; blank means cancelled.
pub fn parse_answer(answer: &str) -> Option<PathBuf> {
    let answer = answer.trim();
    if answer.is_empty() {
        None
    } else {
        Some(PathBuf::from(answer))
    }
}

/// Native platform dialogs via `rfd`.
#[cfg(feature = "native-dialogs")]
#[derive(Debug, Default)]
pub struct NativeDialogs;

#[cfg(feature = "native-dialogs")]
impl Dialogs for NativeDialogs {
    fn pick_folder(&mut self) -> Option<PathBuf> {
        rfd::FileDialog::new().pick_folder()
    }

    fn pick_file(&mut self, filter: &FileFilter) -> Option<PathBuf> {
        rfd::FileDialog::new()
            .add_filter(filter.label.as_str(), &[filter.extension.bare()])
            .pick_file()
    }

    fn save_as(&mut self, initial_dir: Option<&Path>, filter: &FileFilter) -> Option<PathBuf> {
        let mut dialog =
            rfd::FileDialog::new().add_filter(filter.label.as_str(), &[filter.extension.bare()]);
        if let Some(dir) = initial_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.save_file()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_answer_is_cancel() {
        assert_eq!(parse_answer(""), None);
        assert_eq!(parse_answer("   \n"), None);
    }

    #[test]
    fn test_answer_is_trimmed() {
        assert_eq!(
            parse_answer("  /tmp/flows/a.wkfw\n"),
            Some(PathBuf::from("/tmp/flows/a.wkfw"))
        );
    }
}
