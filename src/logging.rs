//! File-backed tracing setup
//!
//! The terminal belongs to the UI, so log lines go to a file. Without a
//! writable log directory logging stays off.

use crate::{APP_NAME, LOG_DIR_ENV, LOG_FILE};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset
const DEFAULT_FILTER: &str = "quizfunnel=info";

/// Log directory: the override if given, else the platform data directory
pub fn log_dir(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir.or_else(|| dirs::data_local_dir().map(|dir| dir.join(APP_NAME).join("logs")))
}

/// Install the file subscriber; returns the log file path on success
pub fn init() -> Option<PathBuf> {
    let log_dir = log_dir(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from))?;
    fs::create_dir_all(&log_dir).ok()?;

    let log_path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .ok()?;

    tracing::info!(path = ?log_path, "tracing initialized");
    Some(log_path)
}
