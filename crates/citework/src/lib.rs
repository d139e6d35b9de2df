//! DOI to formatted citation pipeline.
//!
//! citework resolves a persistent identifier to a formatted, hyperlinked
//! bibliographic citation: normalize the identifier to a resolver URI,
//! fetch BibTeX through content negotiation, parse it, render one
//! bibliography entry in a built-in style, then repair renderer artifacts,
//! annotate the work type, and inject anchors.
//!
//! Lookups never fail loudly. Every failure collapses to an absent
//! citation, with the reason reported through a [`Diagnostics`] sink.
//!
//! # Example
//!
//! ```rust,ignore
//! use citework::{CitationRequest, Citer};
//!
//! let citer = Citer::new()?;
//! let request = CitationRequest::new("10.1234/cdl.12345").with_work_type("dataset");
//! match citer.fetch_citation(&request) {
//!     Some(citation) => println!("{citation}"),
//!     None => println!("no citation available"),
//! }
//! ```

pub mod citer;
pub mod diagnostics;
pub mod error;
pub mod fetch;
pub mod infer;
pub mod postprocess;
pub mod record;
pub mod render;
pub mod resolver;
pub mod transport;

// Re-export main types
pub use citer::{fetch_citation, CitationRequest, Citer, CiterBuilder, DEFAULT_STYLE};
pub use citework_citeproc::{Name, OutputFormat, Processor, Reference, Style};
pub use diagnostics::{Diagnostics, MemoryDiagnostics, NoopDiagnostics, TracingDiagnostics};
pub use error::{Error, Result};
pub use fetch::{MetadataFetcher, ACCEPT_BIBTEX, DEFAULT_MAX_REDIRECTS};
pub use resolver::{resolve_identifier, DEFAULT_RESOLVER_BASE};
pub use transport::{HttpTransport, ReqwestTransport, TransportResponse};
