//! Logging setup.
//!
//! Everything at the configured level goes to a daily-rolling file under the
//! logs directory. Stderr only carries logs when `--verbose` is given, so
//! command output stays readable. `RUST_LOG` overrides the configured level.

use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const LOG_FILE_PREFIX: &str = "bookling.log";

/// Keeps the file writer alive; logs are flushed when it is dropped.
pub struct LogGuard {
    _file: Option<WorkerGuard>,
}

pub fn init(level: &str, logs_dir: Option<&Path>, verbose: bool) -> LogGuard {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_level = if verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::OFF
    };
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(stderr_level);

    let file_writer = logs_dir.and_then(|dir| match fs::create_dir_all(dir) {
        Ok(()) => Some(tracing_appender::non_blocking(
            tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX),
        )),
        Err(e) => {
            eprintln!("Cannot create log directory {}: {}", dir.display(), e);
            None
        }
    });

    match file_writer {
        Some((writer, guard)) => {
            let file_layer = fmt::layer().with_ansi(false).with_writer(writer);
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .with(file_layer)
                .try_init();
            LogGuard { _file: Some(guard) }
        }
        None => {
            let _ = tracing_subscriber::registry()
                .with(filter)
                .with(stderr_layer)
                .try_init();
            LogGuard { _file: None }
        }
    }
}
