//! Tracing initialization.
//!
//! Output goes to a file rather than stderr: the alternate screen owns the
//! terminal while the app runs. Logging is enabled only when `RUST_LOG` is
//! set, and the filter follows it as usual.

use crate::error::Error;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "tasklist.log";

/// Initializes the tracing subscriber when `RUST_LOG` is set.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened for appending.
pub fn init() -> Result<(), Error> {
    if std::env::var_os("RUST_LOG").is_none() {
        return Ok(());
    }

    let file = OpenOptions::new().create(true).append(true).open(LOG_FILE)?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(())
}
