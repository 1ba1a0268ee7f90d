//! File-backed tracing setup. The terminal belongs to the UI, so log lines go
//! to `{state_dir}/reminder-tui/logs/session-{timestamp}.log`.

use std::path::{Path, PathBuf};

use chrono::Local;
use color_eyre::eyre::{eyre, Result, WrapErr};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;

use crate::config::APP_DIR;

pub fn log_dir() -> Option<PathBuf> {
    dirs::state_dir()
        .or_else(dirs::data_local_dir)
        .map(|d| d.join(APP_DIR).join("logs"))
}

/// Create a fresh log file for this session under `log_dir`.
///
/// The guard flushes buffered lines on drop and must outlive the subscriber.
pub fn create_session_log_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .wrap_err_with(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_name = format!("session-{}.log", Local::now().format("%Y%m%d-%H%M%S"));
    let file_appender = tracing_appender::rolling::never(log_dir, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// `RUST_LOG` wins over the configured level.
pub fn env_filter(default_level: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(default_level)
            .wrap_err_with(|| format!("invalid log_level `{default_level}`")),
    }
}

/// Install the global subscriber. Returns `None` when no log directory can be
/// determined; the app then runs without logging.
pub fn init(default_level: &str) -> Result<Option<WorkerGuard>> {
    let Some(dir) = log_dir() else {
        return Ok(None);
    };
    let (writer, guard) = create_session_log_writer(&dir)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level)?)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| eyre!(e))?;

    Ok(Some(guard))
}
