//! Vehicle Manager - Main Entry Point
//!
//! Loads the configuration, sets up logging, fetches the vehicle list once and
//! prints the list and map views.

use anyhow::Context;
use vehicle_manager::app::application::run_app;
use vehicle_manager::logging;
use vehicle_manager::utils::config_store::{config_path, load_config};

fn main() -> anyhow::Result<()> {
    let path = config_path().context("Failed to resolve config path")?;
    let config = load_config(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))?;

    // Keep the guard alive so the log file is flushed on exit
    let _log_guard = logging::init(&config.log).context("Failed to initialize logging")?;

    tracing::info!("Starting Vehicle Manager...");
    tracing::debug!("Config loaded from {}", path.display());

    run_app(config).context("Vehicle Manager failed")?;
    Ok(())
}
