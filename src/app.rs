//! Console application: wires config, dialogs and the session together and
//! runs the input loop.

use crate::cli::RuntimeOptions;
use crate::console::{ConsoleCommand, ConsoleView, HELP};
use crate::dialogs::{ConsoleDialogs, Dialogs, FileFilter};
use crate::document::DocumentExtension;
use crate::session::{Collaborators, SessionManager};
use crate::view::ViewEvent;
use anyhow::Result;
use std::io::{self, Write};
use workflow_shell_config::Config;

/// Whether the input loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// The console application.
pub struct App<W: Write> {
    session: SessionManager<ConsoleView<W>>,
}

impl App<io::Stdout> {
    /// Build the application for stdout with filesystem collaborators.
    pub fn new(config: &Config, options: &RuntimeOptions) -> Self {
        let dialogs = select_dialogs(config.native_dialogs || options.native_dialogs);
        let mut app = Self::with_parts(
            ConsoleView::new(io::stdout()),
            Collaborators::filesystem(dialogs),
            config,
        );
        if let Some(dir) = options.dir.clone().or_else(|| config.start_directory.clone()) {
            app.session.handle_event(ViewEvent::FolderChosen(Some(dir)));
        }
        app
    }

    /// Read commands from stdin until `quit` or end of input.
    pub fn run(mut self) -> Result<()> {
        self.session.view_mut().print("Type 'help' for commands.");
        loop {
            print!("> ");
            io::stdout().flush()?;

            let mut line = String::new();
            if io::stdin().read_line(&mut line)? == 0 {
                log::info!("End of input, exiting");
                return Ok(());
            }
            if self.execute_line(&line) == Flow::Quit {
                log::info!("Quit requested");
                return Ok(());
            }
        }
    }
}

impl<W: Write> App<W> {
    /// Build the application from explicit parts and write the welcome line.
    pub fn with_parts(view: ConsoleView<W>, collaborators: Collaborators, config: &Config) -> Self {
        let filter = FileFilter::new(
            config.file_filter_label.clone(),
            DocumentExtension::new(&config.extension),
        );
        let mut session = SessionManager::new(view, collaborators, filter);
        session.log_info(config.welcome_message.clone());
        Self { session }
    }

    pub fn session(&self) -> &SessionManager<ConsoleView<W>> {
        &self.session
    }

    /// Parse and run one input line.
    pub fn execute_line(&mut self, line: &str) -> Flow {
        match ConsoleCommand::parse(line) {
            Ok(command) => self.execute(command),
            Err(message) => {
                self.session.view_mut().print(&message);
                Flow::Continue
            }
        }
    }

    /// Translate a command into view events or printouts.
    pub fn execute(&mut self, command: ConsoleCommand) -> Flow {
        match command {
            ConsoleCommand::Empty => {}
            ConsoleCommand::Folder(None) => {
                self.session.handle_event(ViewEvent::OpenFolderRequested)
            }
            ConsoleCommand::Folder(Some(dir)) => {
                self.session.handle_event(ViewEvent::FolderChosen(Some(dir)))
            }
            ConsoleCommand::Open(entry) => {
                let name = self.resolve_file_entry(&entry);
                self.session.handle_event(ViewEvent::FileListEntryClicked(name));
            }
            ConsoleCommand::OpenFile(None) => {
                self.session.handle_event(ViewEvent::OpenFileRequested)
            }
            ConsoleCommand::OpenFile(Some(path)) => {
                self.session.handle_event(ViewEvent::FileChosen(Some(path)))
            }
            ConsoleCommand::Click(x) => {
                self.session.handle_event(ViewEvent::TabAreaClicked { x, y: 0 })
            }
            ConsoleCommand::New => {
                let sentinel = self.session.state().tabs().sentinel_position();
                let x = i32::try_from(sentinel).unwrap_or(i32::MAX);
                self.session.handle_event(ViewEvent::TabAreaClicked { x, y: 0 });
            }
            ConsoleCommand::Tabs => self.session.view_mut().print_tabs(),
            ConsoleCommand::Files => self.session.view_mut().print_files(),
            ConsoleCommand::Help => self.session.view_mut().print(HELP),
            ConsoleCommand::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// `open N` picks the Nth rendered file list entry; anything else is a name.
    fn resolve_file_entry(&self, entry: &str) -> String {
        entry
            .parse::<usize>()
            .ok()
            .and_then(|i| self.session.view().files().get(i).cloned())
            .unwrap_or_else(|| entry.to_string())
    }
}

#[cfg(feature = "native-dialogs")]
fn select_dialogs(native: bool) -> Box<dyn Dialogs> {
    if native {
        Box::new(crate::dialogs::NativeDialogs)
    } else {
        Box::new(ConsoleDialogs)
    }
}

#[cfg(not(feature = "native-dialogs"))]
fn select_dialogs(native: bool) -> Box<dyn Dialogs> {
    if native {
        log::warn!("Built without native-dialogs; using console prompts");
    }
    Box::new(ConsoleDialogs)
}
