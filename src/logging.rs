//! Logging - Tracing Subscriber Setup
//!
//! Logs go to stderr and, when a directory is configured, to a daily rolling
//! file through a non-blocking writer. `RUST_LOG` overrides the configured
//! level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::{self, time::LocalTime};
use tracing_subscriber::prelude::*;

use crate::constants::APP_NAME;
use crate::domain::config::LogConfig;
use crate::error::{Error, Result};

/// Install the global subscriber.
///
/// The returned guard flushes the log file on drop and must be held for the
/// lifetime of the process.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stderr_layer = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter).with(stderr_layer);

    let Some(directory) = config.directory.as_deref() else {
        registry.try_init().map_err(|e| Error::Invalid {
            message: format!("logging already initialized: {e}"),
        })?;
        return Ok(None);
    };

    let appender = tracing_appender::rolling::daily(directory, format!("{APP_NAME}.log"));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let file_layer = fmt::layer()
        .with_timer(LocalTime::rfc_3339())
        .with_ansi(false)
        .with_writer(writer);

    registry.with(file_layer).try_init().map_err(|e| Error::Invalid {
        message: format!("logging already initialized: {e}"),
    })?;

    tracing::debug!("Writing logs to {}", directory);
    Ok(Some(guard))
}
