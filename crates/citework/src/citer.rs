//! The public citation lookup API.
//!
//! [`Citer`] wires the pipeline together: resolve the identifier, fetch
//! BibTeX, parse it, infer a work type when the caller gave none, render,
//! post-process. Every failure collapses to `None`; the reason goes to the
//! diagnostics sink instead of the caller.

use std::time::Duration;

use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::error::{Error, Result};
use crate::fetch::{MetadataFetcher, DEFAULT_MAX_REDIRECTS};
use crate::resolver::{resolve_identifier, DEFAULT_RESOLVER_BASE};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::{infer, record, render};

/// Style used when a request names none.
pub const DEFAULT_STYLE: &str = "chicago-author-date";

/// One citation lookup.
#[derive(Debug, Clone)]
pub struct CitationRequest {
    /// DOI, `doi:`-prefixed DOI, or full resolver URL.
    pub identifier: String,
    /// Work-type annotation; blank means infer from the record.
    pub work_type: String,
    /// Citation style identifier.
    pub style: String,
}

impl CitationRequest {
    pub fn new(identifier: impl Into<String>) -> CitationRequest {
        CitationRequest {
            identifier: identifier.into(),
            work_type: String::new(),
            style: DEFAULT_STYLE.to_string(),
        }
    }

    pub fn with_work_type(mut self, work_type: impl Into<String>) -> CitationRequest {
        self.work_type = work_type.into();
        self
    }

    pub fn with_style(mut self, style: impl Into<String>) -> CitationRequest {
        self.style = style.into();
        self
    }
}

/// Resolves identifiers to formatted citations.
pub struct Citer {
    resolver_base: String,
    fetcher: MetadataFetcher,
    diagnostics: Box<dyn Diagnostics>,
    debug: bool,
}

impl Citer {
    /// A citer with default configuration. Fails only when the HTTP
    /// client cannot be constructed.
    pub fn new() -> Result<Citer> {
        CiterBuilder::default().build()
    }

    pub fn builder() -> CiterBuilder {
        CiterBuilder::default()
    }

    /// Look up one citation. Returns `None` for every kind of failure;
    /// the failure reason is reported through the diagnostics sink.
    pub fn fetch_citation(&self, request: &CitationRequest) -> Option<String> {
        match self.try_fetch(request) {
            Ok(citation) => {
                self.debug_message(format_args!("citation built: {citation}"));
                Some(citation)
            }
            Err(error) => {
                self.diagnostics.error(&format!(
                    "no citation for '{}': {error}",
                    request.identifier
                ));
                None
            }
        }
    }

    fn try_fetch(&self, request: &CitationRequest) -> Result<String> {
        let uri = resolve_identifier(&request.identifier, &self.resolver_base)
            .ok_or(Error::EmptyIdentifier)?;
        self.debug_message(format_args!(
            "resolved '{}' to {uri}",
            request.identifier
        ));

        let bibtex = self.fetcher.fetch_bibtex(&uri)?;
        self.debug_message(format_args!("received BibTeX ({} bytes)", bibtex.len()));

        let references = record::parse_references(&bibtex)?;
        self.debug_message(format_args!("parsed {} reference(s)", references.len()));

        let work_type = if request.work_type.trim().is_empty() {
            infer::infer_work_type(&references)
        } else {
            request.work_type.clone()
        };

        render::build_citation(&uri, &work_type, &references, &request.style)
    }

    fn debug_message(&self, message: std::fmt::Arguments<'_>) {
        if self.debug {
            self.diagnostics.debug(&message.to_string());
        }
    }
}

/// Configures and builds a [`Citer`].
pub struct CiterBuilder {
    resolver_base: String,
    timeout: Option<Duration>,
    max_redirects: usize,
    transport: Option<Box<dyn HttpTransport>>,
    diagnostics: Box<dyn Diagnostics>,
    debug: bool,
}

impl Default for CiterBuilder {
    fn default() -> CiterBuilder {
        CiterBuilder {
            resolver_base: DEFAULT_RESOLVER_BASE.to_string(),
            timeout: None,
            max_redirects: DEFAULT_MAX_REDIRECTS,
            transport: None,
            diagnostics: Box::new(NoopDiagnostics),
            debug: false,
        }
    }
}

impl CiterBuilder {
    /// Resolver the identifier is joined to; defaults to doi.org.
    pub fn resolver_base(mut self, base: impl Into<String>) -> CiterBuilder {
        self.resolver_base = base.into();
        self
    }

    /// Per-request timeout for the default transport. Unset keeps the
    /// HTTP client's own 30 second default.
    pub fn timeout(mut self, timeout: Duration) -> CiterBuilder {
        self.timeout = Some(timeout);
        self
    }

    pub fn max_redirects(mut self, max_redirects: usize) -> CiterBuilder {
        self.max_redirects = max_redirects;
        self
    }

    /// Replace the HTTP transport. The timeout setting does not apply to
    /// a caller-supplied transport.
    pub fn transport(mut self, transport: Box<dyn HttpTransport>) -> CiterBuilder {
        self.transport = Some(transport);
        self
    }

    pub fn diagnostics(mut self, diagnostics: Box<dyn Diagnostics>) -> CiterBuilder {
        self.diagnostics = diagnostics;
        self
    }

    /// Emit step-by-step progress to the diagnostics sink.
    pub fn debug(mut self, debug: bool) -> CiterBuilder {
        self.debug = debug;
        self
    }

    pub fn build(self) -> Result<Citer> {
        let transport: Box<dyn HttpTransport> = match self.transport {
            Some(transport) => transport,
            None => Box::new(ReqwestTransport::new(self.timeout)?),
        };
        Ok(Citer {
            resolver_base: self.resolver_base,
            fetcher: MetadataFetcher::new(transport, self.max_redirects),
            diagnostics: self.diagnostics,
            debug: self.debug,
        })
    }
}

/// One-shot lookup with default configuration: chicago-author-date,
/// inferred work type, discarded diagnostics.
pub fn fetch_citation(identifier: &str) -> Option<String> {
    let citer = Citer::new().ok()?;
    citer.fetch_citation(&CitationRequest::new(identifier))
}
