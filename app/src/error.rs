//! Error types for the terminal shell.
//!
//! The domain layer has no error taxonomy: every store operation is total.
//! The only fallible surface is the shell itself.

use thiserror::Error;

/// Errors raised by the terminal frontend.
#[derive(Debug, Error)]
pub enum Error {
    /// Terminal or log file I/O failed.
    #[error("terminal i/o: {0}")]
    Io(#[from] std::io::Error),
}
