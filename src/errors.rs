//! Error types for the pass-by demo
//!
//! The mutators and the driver are total, so the only thing that can fail is
//! writing the recorded output to the real terminal.

use std::fmt;
use std::io;

/// Errors raised while writing output
#[derive(Debug)]
pub enum OutputError {
    /// Writing or flushing stdout failed
    Io(io::Error),
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputError::Io(err) => write!(f, "Failed to write output: {}", err),
        }
    }
}

impl std::error::Error for OutputError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            OutputError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for OutputError {
    fn from(err: io::Error) -> Self {
        OutputError::Io(err)
    }
}
