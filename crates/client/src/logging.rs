//! Tracing setup for the `contest` binary.
//!
//! Logs always go to stderr so stdout carries only the report. With
//! `--log-file` a second layer writes to `<log dir>/<session>/contest.log`.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_DIR_ENV: &str = "CONTEST_LOG_DIR";
const LOG_FILE_NAME: &str = "contest.log";

/// Install the global subscriber.
///
/// The returned guard flushes the file writer when dropped; keep it alive for
/// the whole run.
pub fn setup_logging(to_file: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    let (file_layer, guard, session_dir) = if to_file {
        let session_dir = log_dir().join(session_id());
        std::fs::create_dir_all(&session_dir).with_context(|| {
            format!("failed to create log directory {}", session_dir.display())
        })?;

        let file_appender = tracing_appender::rolling::never(&session_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        let layer = fmt::layer().with_writer(writer).with_ansi(false);
        (Some(layer), Some(guard), Some(session_dir))
    } else {
        (None, None, None)
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    if let Some(dir) = session_dir {
        tracing::info!("Log file: {}", dir.join(LOG_FILE_NAME).display());
    }

    Ok(guard)
}

/// Platform log directory (`CONTEST_LOG_DIR` overrides).
///
/// - Linux: `~/.cache/contest/logs`
/// - macOS: `~/Library/Caches/contest/logs`
/// - Windows: `%LOCALAPPDATA%\contest\cache\logs`
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(LOG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "contest")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("contest").join("logs"))
}

fn session_id() -> String {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default();
    format!("session_{timestamp}")
}
