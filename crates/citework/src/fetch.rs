//! BibTeX retrieval over DOI content negotiation.
//!
//! DOI resolvers answer `Accept: application/x-bibtex` with a BibTeX
//! record, usually from behind one or more redirects. Hops are followed by
//! hand (see [`crate::transport`]) and bounded, because a misconfigured
//! resolver can redirect forever.

use crate::error::{Error, Result};
use crate::transport::{HttpTransport, TransportResponse};

/// Media type requested from the resolver.
pub const ACCEPT_BIBTEX: &str = "application/x-bibtex";

/// Redirect hops allowed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Fetches BibTeX for a resolvable URI.
pub struct MetadataFetcher {
    transport: Box<dyn HttpTransport>,
    max_redirects: usize,
}

impl MetadataFetcher {
    pub fn new(transport: Box<dyn HttpTransport>, max_redirects: usize) -> MetadataFetcher {
        MetadataFetcher {
            transport,
            max_redirects,
        }
    }

    /// GET `uri` asking for BibTeX, following `Location` headers up to the
    /// redirect limit. Only a terminal 200 yields a body; any other
    /// terminal status is an error.
    pub fn fetch_bibtex(&self, uri: &str) -> Result<String> {
        let mut current = uri.to_string();
        for _hop in 0..=self.max_redirects {
            let TransportResponse {
                status,
                location,
                body,
            } = self.transport.get(&current, ACCEPT_BIBTEX)?;
            if let Some(next) = location {
                current = next;
                continue;
            }
            if status != 200 {
                return Err(Error::UnexpectedStatus {
                    status,
                    uri: current,
                });
            }
            return Ok(body);
        }
        Err(Error::TooManyRedirects {
            limit: self.max_redirects,
            uri: uri.to_string(),
        })
    }
}
