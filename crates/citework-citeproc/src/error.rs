//! Error types for citation rendering.

use std::fmt;

/// Result type alias for citework-citeproc operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing a processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The requested style identifier has no built-in definition.
    UnknownStyle { id: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnknownStyle { id } => {
                write!(
                    f,
                    "Unknown citation style '{}' (built-in styles: {})",
                    id,
                    crate::style::Style::builtin_ids().join(", ")
                )
            }
        }
    }
}

impl std::error::Error for Error {}
