//! Citework binary - formatted citation lookup for a DOI

use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use citework::{
    CitationRequest, Citer, TracingDiagnostics, DEFAULT_MAX_REDIRECTS, DEFAULT_RESOLVER_BASE,
    DEFAULT_STYLE,
};

#[derive(Parser, Debug)]
#[command(name = "citework")]
#[command(about = "Fetch a formatted, hyperlinked citation for a DOI")]
struct Args {
    /// DOI, doi:-prefixed DOI, or full resolver URL
    identifier: String,

    /// Citation style
    #[arg(short, long, default_value = DEFAULT_STYLE)]
    style: String,

    /// Work-type annotation, e.g. "dataset" (inferred from the record
    /// when omitted)
    #[arg(short, long, default_value = "")]
    work_type: String,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Redirect hops to follow before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_REDIRECTS)]
    max_redirects: usize,

    /// DOI resolver base URL
    #[arg(long, default_value = DEFAULT_RESOLVER_BASE)]
    resolver_base: String,

    /// Emit step-by-step progress
    #[arg(short, long)]
    debug: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Initialize tracing; --debug lowers the default filter so the
    // pipeline's progress messages are visible.
    let default_filter = if args.debug {
        "citework=debug"
    } else {
        "citework=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut builder = Citer::builder()
        .resolver_base(args.resolver_base)
        .max_redirects(args.max_redirects)
        .diagnostics(Box::new(TracingDiagnostics))
        .debug(args.debug);
    if let Some(seconds) = args.timeout {
        builder = builder.timeout(Duration::from_secs(seconds));
    }
    let citer = builder.build()?;

    let request = CitationRequest::new(args.identifier)
        .with_work_type(args.work_type)
        .with_style(args.style);

    match citer.fetch_citation(&request) {
        Some(citation) => {
            println!("{citation}");
            Ok(ExitCode::SUCCESS)
        }
        None => {
            eprintln!("no citation available");
            Ok(ExitCode::FAILURE)
        }
    }
}
