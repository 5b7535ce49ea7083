//! File-backed tracing subscriber setup.

use std::path::{Path, PathBuf};

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{PopcornError, Result};

const LOG_FILE_NAME: &str = "popcorn.log";

/// Default log file location under the platform data directory
pub fn default_log_path() -> PathBuf {
    directories::ProjectDirs::from("com", "popcorn", "popcorn")
        .map(|dirs| dirs.data_local_dir().join(LOG_FILE_NAME))
        .unwrap_or_else(|| PathBuf::from(LOG_FILE_NAME))
}

/// Filter directive for a `-v` count
///
/// 0 = warn, 1 = debug (hyper connection noise suppressed), 2+ = trace.
pub fn filter_directive(verbose_level: u8) -> &'static str {
    match verbose_level {
        0 => "warn,popcorn=info",
        1 => "debug,hyper_util=warn,hyper::proto::h1=warn",
        _ => "trace",
    }
}

/// Install the global subscriber, writing to a log file.
///
/// The terminal belongs to the TUI, so nothing is ever written to stdout or
/// stderr. `RUST_LOG` wins over the verbosity flag when set.
pub fn init_logging(verbose_level: u8, log_file: Option<&Path>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(verbose_level)));

    let log_path = log_file
        .map(Path::to_path_buf)
        .unwrap_or_else(default_log_path);

    let log_dir = log_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(log_dir)?;

    let log_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| PopcornError::Config(format!("invalid log file path: {}", log_path.display())))?;

    let appender = RollingFileAppender::new(Rotation::NEVER, log_dir, log_name);

    let layer = fmt::layer().with_ansi(false).with_writer(appender);

    Registry::default()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| PopcornError::Other(format!("failed to initialize logging: {e}")))?;

    tracing::info!("logging to {}", log_path.display());
    Ok(())
}
