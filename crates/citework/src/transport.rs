//! HTTP transport seam.
//!
//! The fetcher talks to this trait so tests can swap in a scripted
//! transport. The real implementation is a blocking reqwest client with
//! automatic redirects turned off; the fetcher chases `Location` itself so
//! the Accept header stays pinned across hops.

use std::time::Duration;

use reqwest::header::{ACCEPT, LOCATION};
use reqwest::redirect::Policy;

use crate::error::Result;

/// One HTTP response as the fetcher sees it.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Redirect target when the response carries a `Location` header.
    /// Relative targets are resolved against the request URI.
    pub location: Option<String>,
    /// Response body.
    pub body: String,
}

/// A blocking HTTP GET with a caller-chosen Accept header.
pub trait HttpTransport: Send + Sync {
    fn get(&self, uri: &str, accept: &str) -> Result<TransportResponse>;
}

/// Production transport over a blocking reqwest client.
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    /// Build a transport. `timeout` of `None` keeps reqwest's default
    /// 30 second request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<ReqwestTransport> {
        let mut builder = reqwest::blocking::Client::builder().redirect(Policy::none());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(ReqwestTransport {
            client: builder.build()?,
        })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get(&self, uri: &str, accept: &str) -> Result<TransportResponse> {
        let response = self.client.get(uri).header(ACCEPT, accept).send()?;
        let status = response.status().as_u16();
        let location = response
            .headers()
            .get(LOCATION)
            .and_then(|value| value.to_str().ok())
            .map(|raw| match response.url().join(raw) {
                Ok(resolved) => resolved.to_string(),
                Err(_) => raw.to_string(),
            });
        let body = response.text()?;
        Ok(TransportResponse {
            status,
            location,
            body,
        })
    }
}
