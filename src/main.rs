use anyhow::Result;
use workflow_shell::app::App;
use workflow_shell::cli;
use workflow_shell::config::Config;

fn main() -> Result<()> {
    // Process CLI arguments first (before logging init for cleaner output)
    let options = cli::process_cli();

    // CLI --log-level takes precedence, then RUST_LOG, then config (applied below).
    workflow_shell::debug::init_log_bridge(options.log_level);

    log::info!("Starting workflow-shell {}", workflow_shell::VERSION);

    let config = match &options.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    workflow_shell::debug::apply_config_level(config.log_level.to_level_filter());

    let app = App::new(&config, &options);
    let result = app.run();

    log::info!("Console loop exited");

    if let Err(ref e) = result {
        eprintln!("workflow-shell: error: {e:#}");
    }
    result
}
