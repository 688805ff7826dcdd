//! Tracing subscriber initialization.
//!
//! The CLI prints tables to stdout, so diagnostics go to a log file instead.
//! Filtering follows `RUST_LOG` and falls back to the level the caller passes.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Level used when neither `RUST_LOG` nor the caller choose one.
pub const DEFAULT_LEVEL: &str = "info";

/// Error type for logging initialization failures.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// Failed to create log directory
    #[error("Failed to create log directory at {path:?}: {source}")]
    DirectoryCreation {
        /// The directory path that failed to be created
        path: PathBuf,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid log file path (no filename component)
    #[error("Invalid log file path: {0:?}")]
    InvalidPath(PathBuf),

    /// Tracing subscriber already initialized
    #[error("Tracing subscriber already initialized")]
    SubscriberAlreadySet,
}

/// Split `log_path` into the directory to create and the file name to open.
///
/// A bare file name logs into the current directory.
///
/// # Errors
///
/// `LoggingError::InvalidPath` if the path has no UTF-8 file name.
pub fn split_log_path(log_path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let file_name = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(log_path.to_path_buf()))?;

    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((directory, file_name.to_string()))
}

/// Build the event filter: `RUST_LOG` if set and valid, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Initialize the tracing subscriber with file-based logging at the default level.
///
/// # Errors
///
/// See [`init_with_level`].
pub fn init(log_path: &Path) -> Result<(), LoggingError> {
    init_with_level(log_path, DEFAULT_LEVEL)
}

/// Initialize the tracing subscriber writing to `log_path`.
///
/// Creates the log directory if it doesn't exist. The file is appended to,
/// never rotated.
///
/// # Errors
///
/// Returns `Err(LoggingError)` if the path is unusable, the directory cannot
/// be created, or a subscriber is already installed.
pub fn init_with_level(log_path: &Path, default_level: &str) -> Result<(), LoggingError> {
    let (directory, file_name) = split_log_path(log_path)?;

    std::fs::create_dir_all(&directory).map_err(|source| LoggingError::DirectoryCreation {
        path: directory.clone(),
        source,
    })?;

    let file_appender = tracing_appender::rolling::never(&directory, &file_name);

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|_| LoggingError::SubscriberAlreadySet)
}
