//! Transport tests against a real local HTTP server.
//!
//! Everything here goes over sockets through the blocking client:
//! content-negotiation headers, the no-auto-redirect policy, Location
//! resolution, and one full lookup through the public API.

use std::time::Duration;

use citework::{
    CitationRequest, Citer, HttpTransport, MemoryDiagnostics, MetadataFetcher, ReqwestTransport,
    ACCEPT_BIBTEX,
};

const DATASET_BIBTEX: &str = r#"@misc{https://doi.org/10.1234/cdl.12345,
  doi = {10.1234/cdl.12345},
  url = {https://doi.org/10.1234/cdl.12345},
  author = {Doe, Jane},
  title = {Arctic river dissolved and biogenic silicon exports},
  publisher = {Dryad},
  year = {2020}
}
"#;

fn transport() -> ReqwestTransport {
    ReqwestTransport::new(Some(Duration::from_secs(5))).unwrap()
}

#[test]
fn test_accept_header_is_sent() {
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/10.1234/cdl.12345")
        .match_header("accept", "application/x-bibtex")
        .with_status(200)
        .with_body(DATASET_BIBTEX)
        .create();

    let response = transport()
        .get(
            &format!("{}/10.1234/cdl.12345", server.url()),
            ACCEPT_BIBTEX,
        )
        .unwrap();
    assert_eq!(response.status, 200);
    assert!(response.body.contains("@misc"));
    mock.assert();
}

#[test]
fn test_client_reports_redirects_instead_of_following() {
    let mut server = mockito::Server::new();
    let _hop = server
        .mock("GET", "/10.1/hop")
        .with_status(302)
        .with_header("location", "https://elsewhere.test/record")
        .create();

    let response = transport()
        .get(&format!("{}/10.1/hop", server.url()), ACCEPT_BIBTEX)
        .unwrap();
    assert_eq!(response.status, 302);
    assert_eq!(
        response.location.as_deref(),
        Some("https://elsewhere.test/record")
    );
}

#[test]
fn test_relative_location_is_resolved_absolute() {
    let mut server = mockito::Server::new();
    let _hop = server
        .mock("GET", "/10.1/rel")
        .with_status(302)
        .with_header("location", "/records/full.bib")
        .create();

    let response = transport()
        .get(&format!("{}/10.1/rel", server.url()), ACCEPT_BIBTEX)
        .unwrap();
    assert_eq!(
        response.location.as_deref(),
        Some(format!("{}/records/full.bib", server.url()).as_str())
    );
}

#[test]
fn test_fetcher_chases_redirects_with_accept_pinned() {
    let mut server = mockito::Server::new();
    let _hop = server
        .mock("GET", "/10.1234/cdl.12345")
        .with_status(302)
        .with_header("location", "/records/cdl.bib")
        .create();
    let target = server
        .mock("GET", "/records/cdl.bib")
        .match_header("accept", "application/x-bibtex")
        .with_status(200)
        .with_body(DATASET_BIBTEX)
        .create();

    let fetcher = MetadataFetcher::new(Box::new(transport()), 10);
    let body = fetcher
        .fetch_bibtex(&format!("{}/10.1234/cdl.12345", server.url()))
        .unwrap();
    assert!(body.contains("Arctic river"));
    target.assert();
}

#[test]
fn test_citer_end_to_end_over_sockets() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/10.1234/cdl.12345")
        .match_header("accept", "application/x-bibtex")
        .with_status(200)
        .with_body(DATASET_BIBTEX)
        .create();

    let citer = Citer::builder()
        .resolver_base(server.url())
        .timeout(Duration::from_secs(5))
        .build()
        .unwrap();
    let request = CitationRequest::new("10.1234/cdl.12345").with_work_type("dataset");
    let citation = citer.fetch_citation(&request).unwrap();
    assert!(citation.contains("[Dataset]."), "Got: {citation}");
    assert!(citation.contains("target=\"_blank\""));
}

#[test]
fn test_missing_doi_over_sockets_yields_absence() {
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/10.9/missing")
        .with_status(404)
        .with_body("DOI not found")
        .create();

    let diagnostics = MemoryDiagnostics::new();
    let citer = Citer::builder()
        .resolver_base(server.url())
        .diagnostics(Box::new(diagnostics.clone()))
        .build()
        .unwrap();
    assert_eq!(
        citer.fetch_citation(&CitationRequest::new("10.9/missing")),
        None
    );
    assert!(diagnostics.error_messages()[0].contains("404"));
}
