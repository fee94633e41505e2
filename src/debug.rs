//! Diagnostic logging for workflow-shell
//!
//! Installs a `log::Log` bridge so every `log::info!()` etc. lands in
//! `workflow_shell_debug.log` under the system temp directory. This keeps
//! diagnostics out of the console front-end's stdout. When `RUST_LOG` is set,
//! records are mirrored to stderr as well.
//!
//! Level precedence: `--log-level` CLI flag, then `RUST_LOG`, then the
//! config file's `log_level` (applied once the config is loaded).

use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};

use log::{LevelFilter, Log, Metadata, Record};

/// Level used until the config is loaded, when nothing overrides it.
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

/// Path of the debug log file
pub fn log_path() -> PathBuf {
    std::env::temp_dir().join("workflow_shell_debug.log")
}

struct LogBridge {
    file: Mutex<Option<File>>,
    mirror_stderr: bool,
    /// Set when the CLI or `RUST_LOG` chose the level; config may not change it
    level_overridden: AtomicBool,
}

impl LogBridge {
    fn new(mirror_stderr: bool) -> Self {
        let path = log_path();
        let file = match OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(&path)
        {
            Ok(mut f) => {
                let _ = writeln!(
                    f,
                    "{}\nworkflow-shell {} debug session started at {}\n{}",
                    "=".repeat(80),
                    crate::VERSION,
                    chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                    "=".repeat(80)
                );
                Some(f)
            }
            // Silently fail: the log view is the user-facing surface
            Err(_) => None,
        };
        Self {
            file: Mutex::new(file),
            mirror_stderr,
            level_overridden: AtomicBool::new(false),
        }
    }
}

impl Log for LogBridge {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        if self.mirror_stderr {
            eprintln!("{line}");
        }
        if let Some(file) = self.file.lock().as_mut() {
            let _ = writeln!(file, "{line}");
        }
    }

    fn flush(&self) {
        if let Some(file) = self.file.lock().as_mut() {
            let _ = file.flush();
        }
    }
}

static BRIDGE: OnceLock<LogBridge> = OnceLock::new();

fn format_record(record: &Record) -> String {
    format!(
        "[{}] [{:<5}] [{}] {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

/// Pick the starting level from the CLI flag and the `RUST_LOG` value.
///
/// Returns the level and whether it was explicitly chosen. Unparseable
/// `RUST_LOG` values (e.g. per-module filters) are ignored.
pub fn resolve_level(cli: Option<LevelFilter>, rust_log: Option<&str>) -> (LevelFilter, bool) {
    if let Some(level) = cli {
        return (level, true);
    }
    if let Some(level) = rust_log.and_then(|v| LevelFilter::from_str(v.trim()).ok()) {
        return (level, true);
    }
    (DEFAULT_LEVEL, false)
}

/// Install the log bridge. Safe to call more than once; later calls only
/// adjust the level.
pub fn init_log_bridge(cli_level: Option<LevelFilter>) {
    let rust_log = std::env::var("RUST_LOG").ok();
    let (level, overridden) = resolve_level(cli_level, rust_log.as_deref());

    let bridge = BRIDGE.get_or_init(|| LogBridge::new(rust_log.is_some()));
    bridge.level_overridden.store(overridden, Ordering::Relaxed);
    if log::set_logger(bridge).is_err() {
        log::debug!("Logger already installed");
    }
    log::set_max_level(level);
}

/// Apply the config file's level unless the CLI or `RUST_LOG` already chose one.
pub fn apply_config_level(level: LevelFilter) {
    let overridden = BRIDGE
        .get()
        .is_some_and(|b| b.level_overridden.load(Ordering::Relaxed));
    if !overridden {
        log::set_max_level(level);
        log::debug!("Log level set from config: {}", level);
    }
}
