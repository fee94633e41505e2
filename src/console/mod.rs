//! Line-oriented console front-end.
//!
//! [`ConsoleView`] implements [`ViewLayer`] by printing: log lines get a
//! local timestamp, and the tab strip is redrawn after every tab change.
//! Tab-area clicks use the tab index as the x coordinate.

pub mod command;

pub use command::{ConsoleCommand, HELP};

use crate::view::{LogLine, TabHandle, ViewLayer};
use chrono::NaiveDateTime;
use std::io::Write;

/// Format a log view line as `YYYY-mm-dd HH:MM:SS SEVERITY: message`.
pub fn format_log_line(at: NaiveDateTime, line: &LogLine) -> String {
    let stamp = at.format("%Y-%m-%d %H:%M:%S");
    match line.kind {
        Some(kind) => format!("{stamp} {}: [{kind}] {}", line.severity, line.message),
        None => format!("{stamp} {}: {}", line.severity, line.message),
    }
}

/// A view that writes to a text stream.
pub struct ConsoleView<W: Write> {
    out: W,
    /// Tabs in display order, sentinel included
    tabs: Vec<(TabHandle, String)>,
    selected: Option<TabHandle>,
    /// File list as last rendered; `None` until the first render
    files: Option<Vec<String>>,
    next_handle: u64,
}

impl<W: Write> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            tabs: Vec::new(),
            selected: None,
            files: None,
            next_handle: 1,
        }
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Tab labels in display order
    pub fn tab_labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|(_, label)| label.as_str()).collect()
    }

    pub fn selected(&self) -> Option<TabHandle> {
        self.selected
    }

    /// The rendered file list, empty until a folder or document appears
    pub fn files(&self) -> &[String] {
        self.files.as_deref().unwrap_or_default()
    }

    /// Write raw text followed by a newline.
    pub fn print(&mut self, text: &str) {
        if let Err(e) = writeln!(self.out, "{text}") {
            log::warn!("Console write failed: {}", e);
        }
    }

    /// Print the tab strip, marking the selected tab.
    pub fn print_tabs(&mut self) {
        let strip = self
            .tabs
            .iter()
            .enumerate()
            .map(|(i, (handle, label))| {
                if Some(*handle) == self.selected {
                    format!("[{i}:{label}]")
                } else {
                    format!(" {i}:{label} ")
                }
            })
            .collect::<Vec<_>>()
            .join("|");
        self.print(&format!("Tabs: {strip}"));
    }

    /// Print the file list, or the open-folder hint before there is one.
    pub fn print_files(&mut self) {
        let text = match &self.files {
            None => "No folder open. Use 'folder [DIR]' to open one.".to_string(),
            Some(files) if files.is_empty() => "Files: (none)".to_string(),
            Some(files) => files
                .iter()
                .enumerate()
                .map(|(i, name)| format!("  {i}: {name}"))
                .fold("Files:".to_string(), |acc, line| acc + "\n" + &line),
        };
        self.print(&text);
    }
}

impl<W: Write> ViewLayer for ConsoleView<W> {
    fn render_file_list(&mut self, names: &[String]) {
        self.files = Some(names.to_vec());
        self.print_files();
    }

    fn create_tab(&mut self, label: &str, position: usize) -> TabHandle {
        let handle = TabHandle(self.next_handle);
        self.next_handle += 1;
        let position = position.min(self.tabs.len());
        self.tabs.insert(position, (handle, label.to_string()));
        handle
    }

    fn select_tab(&mut self, handle: TabHandle) {
        self.selected = Some(handle);
        self.print_tabs();
    }

    fn append_log_line(&mut self, line: LogLine) {
        let text = format_log_line(chrono::Local::now().naive_local(), &line);
        self.print(&text);
    }

    fn tab_at(&self, x: i32, _y: i32) -> Option<usize> {
        usize::try_from(x).ok().filter(|&i| i < self.tabs.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use chrono::NaiveDate;

    fn output(view: &ConsoleView<Vec<u8>>) -> String {
        String::from_utf8(view.output().clone()).unwrap()
    }

    #[test]
    fn test_format_log_line() {
        let at = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 5, 0)
            .unwrap();
        assert_eq!(
            format_log_line(at, &LogLine::info("Opened folder /srv")),
            "2024-03-09 14:05:00 INFO: Opened folder /srv"
        );
        assert_eq!(
            format_log_line(at, &LogLine::error(ErrorKind::OpenFailed, "boom")),
            "2024-03-09 14:05:00 ERROR: [OpenFailed] boom"
        );
    }

    #[test]
    fn test_create_tab_inserts_at_position() {
        let mut view = ConsoleView::new(Vec::new());
        let plus = view.create_tab("+", 0);
        view.create_tab("a.wkfw", 0);
        view.create_tab("b.wkfw", 1);
        assert_eq!(view.tab_labels(), vec!["a.wkfw", "b.wkfw", "+"]);

        view.select_tab(plus);
        assert!(output(&view).contains("[2:+]"));
    }

    #[test]
    fn test_tab_at_uses_x_as_index() {
        let mut view = ConsoleView::new(Vec::new());
        view.create_tab("+", 0);
        assert_eq!(view.tab_at(0, 0), Some(0));
        assert_eq!(view.tab_at(1, 0), None);
        assert_eq!(view.tab_at(-1, 0), None);
    }

    #[test]
    fn test_file_list_rendering() {
        let mut view = ConsoleView::new(Vec::new());
        view.print_files();
        view.render_file_list(&["a.wkfw".to_string(), "b.wkfw".to_string()]);

        let text = output(&view);
        assert!(text.contains("No folder open"));
        assert!(text.contains("  1: b.wkfw"));
        assert_eq!(view.files().len(), 2);
    }
}
