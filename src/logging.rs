//! Run logging: every event goes to a plain-text log file that is truncated
//! at the start of each run, and optionally to stderr.
use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

pub const DEFAULT_LOG_FILE: &str = "tmp/make_text_log.log";

/// Install the global subscriber.
///
/// The filter defaults to `debug` and can be overridden with `RUST_LOG`.
/// Fails if the log file cannot be created or a subscriber is already set.
pub fn init_logging(log_file: &Path, console: bool) -> std::io::Result<()> {
    if let Some(parent) = log_file.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(log_file)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .compact()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()
        .map_err(std::io::Error::other)
}
