// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File logging.
//!
//! The console's stdout and stderr belong to statement output, so tracing goes
//! to `<state_dir>/oc.log`. `OC_LOG` (else `RUST_LOG`) sets the filter.

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;

pub const LOG_FILE: &str = "oc.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not determine state directory")]
    NoStateDir,

    #[error("failed to create log directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },
}

/// Install the global subscriber. Keep the guard alive until exit so
/// buffered lines are flushed.
pub fn setup_logging() -> Result<WorkerGuard, LoggingError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let dir = crate::env::state_dir().ok_or(LoggingError::NoStateDir)?;
    ensure_dir(&dir)?;

    let filter = match crate::env::log_filter() {
        Some(directive) => EnvFilter::try_new(&directive).map_err(|e| LoggingError::Filter {
            filter: directive.clone(),
            message: e.to_string(),
        })?,
        None => EnvFilter::new("info"),
    };

    let file_appender = tracing_appender::rolling::never(&dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}

fn ensure_dir(dir: &Path) -> Result<(), LoggingError> {
    std::fs::create_dir_all(dir).map_err(|source| LoggingError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "logging_tests.rs"]
mod tests;
