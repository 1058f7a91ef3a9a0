//! Tracing setup
//!
//! The terminal belongs to the UI while the app runs, so every event goes to a
//! log file instead of stdout/stderr.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{AppError, AppResult};

/// Initialize tracing, writing to `log_file` (truncated on each run)
///
/// The filter comes from `RUST_LOG` and defaults to `info`.
pub fn init_tracing(log_file: &Path) -> AppResult<()> {
    let file = File::create(log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))?;

    tracing::info!(log_file = %log_file.display(), "Tracing initialized");

    Ok(())
}
