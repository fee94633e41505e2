//! Command-line interface for workflow-shell.

use clap::Parser;
use std::path::PathBuf;
use workflow_shell_config::LogLevel;

/// workflow-shell - browse, open and create workflow documents
#[derive(Parser, Debug)]
#[command(name = "workflow-shell")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Folder to open at startup (overrides `start_directory` in the config)
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/workflow-shell/config.yaml
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Debug log level: off, error, warn, info, debug, trace
    #[arg(long, value_name = "LEVEL", value_parser = parse_log_level)]
    pub log_level: Option<LogLevel>,

    /// Use native file dialogs instead of console prompts
    #[arg(long)]
    pub native_dialogs: bool,
}

/// Runtime options passed from CLI to the application
#[derive(Clone, Debug, Default)]
pub struct RuntimeOptions {
    /// Folder to open at startup
    pub dir: Option<PathBuf>,
    /// Alternate config file
    pub config: Option<PathBuf>,
    /// Debug log level override
    pub log_level: Option<log::LevelFilter>,
    /// Force native dialogs on
    pub native_dialogs: bool,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::from_name(value).ok_or_else(|| {
        format!("unknown log level '{value}' (expected off, error, warn, info, debug or trace)")
    })
}

impl From<Cli> for RuntimeOptions {
    fn from(cli: Cli) -> Self {
        Self {
            dir: cli.dir,
            config: cli.config,
            log_level: cli.log_level.map(LogLevel::to_level_filter),
            native_dialogs: cli.native_dialogs,
        }
    }
}

/// Process CLI arguments. `--help`, `--version` and parse errors exit here.
pub fn process_cli() -> RuntimeOptions {
    Cli::parse().into()
}
