//! Error types for the citation pipeline.

use thiserror::Error;

/// Result type alias for citework operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong between an identifier and a citation.
///
/// The high-level API collapses all of these into an absent citation; they
/// stay distinct so diagnostics can say which stage gave up.
#[derive(Debug, Error)]
pub enum Error {
    /// The identifier was empty or all whitespace.
    #[error("empty identifier")]
    EmptyIdentifier,

    /// The HTTP request itself failed.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The redirect chain exceeded the configured limit.
    #[error("more than {limit} redirects while resolving {uri}")]
    TooManyRedirects { limit: usize, uri: String },

    /// The terminal response was not 200 OK.
    #[error("unexpected HTTP status {status} from {uri}")]
    UnexpectedStatus { status: u16, uri: String },

    /// The response body was not parseable BibTeX.
    #[error("BibTeX parse error: {0}")]
    Parse(String),

    /// Rendering produced nothing usable.
    #[error("citation rendering failed: {0}")]
    Render(String),
}

impl From<biblatex::ParseError> for Error {
    fn from(err: biblatex::ParseError) -> Error {
        Error::Parse(err.to_string())
    }
}

impl From<citework_citeproc::Error> for Error {
    fn from(err: citework_citeproc::Error) -> Error {
        Error::Render(err.to_string())
    }
}
