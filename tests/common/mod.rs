//! Shared integration test helpers for workflow-shell.
//!
//! Include this module at the top of each test file that needs it:
//!
//! ```ignore
//! mod common;
//! use common::{Harness, ViewCommand};
//! ```
//!
//! The fakes record what the session asked of them so tests can assert on
//! view commands, dialog prompts and collaborator calls. The
//! `#[allow(dead_code)]` attribute suppresses warnings when only a subset of
//! helpers are used per file.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap, VecDeque};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use workflow_shell::dialogs::{Dialogs, FileFilter};
use workflow_shell::directory::DirectoryLister;
use workflow_shell::document::DocumentExtension;
use workflow_shell::error::ErrorKind;
use workflow_shell::format::{DocumentFormat, WorkflowDocument};
use workflow_shell::session::{Collaborators, SessionManager};
use workflow_shell::tab::TabSlot;
use workflow_shell::view::{LogLine, Severity, TabHandle, ViewLayer};

// ============================================================================
// Recording view
// ============================================================================

/// One command the session issued to the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCommand {
    RenderFileList(Vec<String>),
    CreateTab {
        label: String,
        position: usize,
        handle: TabHandle,
    },
    SelectTab(TabHandle),
    Log(LogLine),
}

/// A view that records every command and keeps its own tab strip.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub commands: Vec<ViewCommand>,
    pub tabs: Vec<(TabHandle, String)>,
    next_handle: u64,
}

impl RecordingView {
    pub fn labels(&self) -> Vec<&str> {
        self.tabs.iter().map(|(_, l)| l.as_str()).collect()
    }

    pub fn log_lines(&self) -> Vec<&LogLine> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                ViewCommand::Log(line) => Some(line),
                _ => None,
            })
            .collect()
    }

    pub fn errors_of(&self, kind: ErrorKind) -> usize {
        self.log_lines()
            .iter()
            .filter(|l| l.severity == Severity::Error && l.kind == Some(kind))
            .count()
    }

    pub fn select_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, ViewCommand::SelectTab(_)))
            .count()
    }

    pub fn create_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, ViewCommand::CreateTab { .. }))
            .count()
    }

    pub fn last_file_list(&self) -> Option<&Vec<String>> {
        self.commands.iter().rev().find_map(|c| match c {
            ViewCommand::RenderFileList(names) => Some(names),
            _ => None,
        })
    }

    /// Index of `label` in the view's tab strip
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.tabs.iter().position(|(_, l)| l == label)
    }
}

impl ViewLayer for RecordingView {
    fn render_file_list(&mut self, names: &[String]) {
        self.commands.push(ViewCommand::RenderFileList(names.to_vec()));
    }

    fn create_tab(&mut self, label: &str, position: usize) -> TabHandle {
        self.next_handle += 1;
        let handle = TabHandle(self.next_handle);
        self.tabs.insert(position, (handle, label.to_string()));
        self.commands.push(ViewCommand::CreateTab {
            label: label.to_string(),
            position,
            handle,
        });
        handle
    }

    fn select_tab(&mut self, handle: TabHandle) {
        self.commands.push(ViewCommand::SelectTab(handle));
    }

    fn append_log_line(&mut self, line: LogLine) {
        self.commands.push(ViewCommand::Log(line));
    }

    fn tab_at(&self, x: i32, _y: i32) -> Option<usize> {
        usize::try_from(x).ok().filter(|&i| i < self.tabs.len())
    }
}

// ============================================================================
// Scripted document format
// ============================================================================

/// What the fake format was asked to do, and which paths it should fail on.
#[derive(Debug, Default)]
pub struct FormatState {
    pub fail_load: BTreeSet<String>,
    pub fail_process: BTreeSet<String>,
    pub fail_create: BTreeSet<String>,
    pub loaded: Vec<PathBuf>,
    pub created: Vec<PathBuf>,
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// In-memory [`DocumentFormat`] whose failures are chosen by base name.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFormat(pub Rc<RefCell<FormatState>>);

impl DocumentFormat for ScriptedFormat {
    fn load(&self, path: &Path) -> anyhow::Result<WorkflowDocument> {
        let mut state = self.0.borrow_mut();
        let name = file_name(path);
        if state.fail_load.contains(&name) {
            anyhow::bail!("cannot parse {name}");
        }
        state.loaded.push(path.to_path_buf());
        Ok(WorkflowDocument::template(name))
    }

    fn create(&self, path: &Path) -> anyhow::Result<()> {
        let mut state = self.0.borrow_mut();
        let name = file_name(path);
        if state.fail_create.contains(&name) {
            anyhow::bail!("permission denied writing {name}");
        }
        state.created.push(path.to_path_buf());
        Ok(())
    }

    fn process(&self, document: &WorkflowDocument) -> anyhow::Result<()> {
        if self.0.borrow().fail_process.contains(&document.name) {
            anyhow::bail!("cannot process {}", document.name);
        }
        Ok(())
    }
}

// ============================================================================
// Fake directory lister
// ============================================================================

/// Directory listings keyed by path; unknown paths fail with `NotFound`.
#[derive(Debug, Clone, Default)]
pub struct FakeLister(pub Rc<RefCell<HashMap<PathBuf, Vec<String>>>>);

impl FakeLister {
    pub fn set(&self, dir: &str, names: &[&str]) {
        self.0.borrow_mut().insert(
            PathBuf::from(dir),
            names.iter().map(|n| n.to_string()).collect(),
        );
    }
}

impl DirectoryLister for FakeLister {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<String>> {
        self.0
            .borrow()
            .get(dir)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such directory"))
    }
}

// ============================================================================
// Scripted dialogs
// ============================================================================

/// Queued dialog answers plus a record of the save-as prompts.
#[derive(Debug, Default)]
pub struct DialogState {
    pub folders: VecDeque<Option<PathBuf>>,
    pub files: VecDeque<Option<PathBuf>>,
    pub save_as: VecDeque<Option<PathBuf>>,
    /// `initial_dir` of every save-as prompt, in order
    pub save_as_prompts: Vec<Option<PathBuf>>,
}

/// [`Dialogs`] answering from queues; an empty queue answers "cancelled".
#[derive(Debug, Clone, Default)]
pub struct ScriptedDialogs(pub Rc<RefCell<DialogState>>);

impl ScriptedDialogs {
    pub fn answer_save_as(&self, path: Option<&str>) {
        self.0.borrow_mut().save_as.push_back(path.map(PathBuf::from));
    }

    pub fn answer_folder(&self, path: Option<&str>) {
        self.0.borrow_mut().folders.push_back(path.map(PathBuf::from));
    }

    pub fn answer_file(&self, path: Option<&str>) {
        self.0.borrow_mut().files.push_back(path.map(PathBuf::from));
    }
}

impl Dialogs for ScriptedDialogs {
    fn pick_folder(&mut self) -> Option<PathBuf> {
        self.0.borrow_mut().folders.pop_front().flatten()
    }

    fn pick_file(&mut self, _filter: &FileFilter) -> Option<PathBuf> {
        self.0.borrow_mut().files.pop_front().flatten()
    }

    fn save_as(&mut self, initial_dir: Option<&Path>, _filter: &FileFilter) -> Option<PathBuf> {
        let mut state = self.0.borrow_mut();
        state.save_as_prompts.push(initial_dir.map(Path::to_path_buf));
        state.save_as.pop_front().flatten()
    }
}

// ============================================================================
// Harness
// ============================================================================

/// A session wired to fakes, with handles to inspect and script them.
pub struct Harness {
    pub session: SessionManager<RecordingView>,
    pub format: ScriptedFormat,
    pub lister: FakeLister,
    pub dialogs: ScriptedDialogs,
}

impl Harness {
    pub fn new() -> Self {
        let format = ScriptedFormat::default();
        let lister = FakeLister::default();
        let dialogs = ScriptedDialogs::default();
        let collaborators = Collaborators {
            format: Box::new(format.clone()),
            lister: Box::new(lister.clone()),
            dialogs: Box::new(dialogs.clone()),
        };
        let filter = FileFilter::new("Workflow Files", DocumentExtension::new("wkfw"));
        let session = SessionManager::new(RecordingView::default(), collaborators, filter);
        Self {
            session,
            format,
            lister,
            dialogs,
        }
    }

    pub fn view(&self) -> &RecordingView {
        self.session.view()
    }

    /// Session tab order as labels, with `+` for the sentinel
    pub fn order(&self) -> Vec<String> {
        self.session
            .tab_order()
            .into_iter()
            .map(|slot| match slot {
                TabSlot::Document { document, .. } => document.to_string(),
                TabSlot::Sentinel => "+".to_string(),
            })
            .collect()
    }

    pub fn known(&self) -> Vec<String> {
        self.session.state().file_list()
    }

    pub fn open(&self) -> Vec<String> {
        self.session
            .state()
            .open_documents()
            .into_iter()
            .map(|id| id.to_string())
            .collect()
    }

    /// Assert the session and the view agree and every invariant holds.
    pub fn assert_consistent(&self) {
        let state = self.session.state();
        assert_eq!(state.check_invariants(), Ok(()));
        assert_eq!(
            state.tabs().len() + 1,
            self.view().tabs.len(),
            "document tabs must equal view tabs minus the sentinel"
        );
        assert_eq!(
            self.view().labels().last().copied(),
            Some("+"),
            "sentinel must be the last view tab"
        );
        let session_labels: Vec<String> = self.order();
        let view_labels: Vec<String> = self
            .view()
            .labels()
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(session_labels, view_labels);
    }
}
