//! Error type for record generation.

use std::fmt;
use std::io;

/// Error type for the line transformer
#[derive(Debug)]
pub enum RecordError {
    /// The extracted identifier is not a catalog key.
    UnknownIdentifier {
        id: String,
        /// 1-based input line number
        line: usize,
    },
    /// Reading input or writing output failed.
    Io(io::Error),
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::UnknownIdentifier { id, line } => {
                write!(f, "Unknown identifier '{}' on line {}", id, line)
            }
            RecordError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for RecordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RecordError::Io(e) => Some(e),
            RecordError::UnknownIdentifier { .. } => None,
        }
    }
}

impl From<io::Error> for RecordError {
    fn from(e: io::Error) -> Self {
        RecordError::Io(e)
    }
}
