//! Citation rendering orchestration.
//!
//! Glue between parsed references and the style engine: pick the first
//! entry, render it as one bibliography entry in HTML, then hand the raw
//! string to the post-processor.

use citework_citeproc::{OutputFormat, Processor, Reference};

use crate::error::{Error, Result};
use crate::postprocess;

/// Render one citation for the first reference and post-process it.
///
/// `uri` must be non-empty and `references` must lead with an entry that
/// has an identifying key; otherwise this is a render failure, which the
/// public API folds into an absent citation.
pub fn build_citation(
    uri: &str,
    work_type: &str,
    references: &[Reference],
    style: &str,
) -> Result<String> {
    if uri.is_empty() {
        return Err(Error::Render("no resolvable URI".to_string()));
    }
    let Some(first_key) = references
        .first()
        .map(|reference| reference.id.as_str())
        .filter(|id| !id.is_empty())
    else {
        return Err(Error::Render(
            "no entry with an identifying key".to_string(),
        ));
    };

    let mut processor = Processor::new(style, OutputFormat::Html)?;
    processor.import(references.iter().cloned());
    let rendered = processor.render_bibliography(first_key);
    let Some(entry) = rendered.first().filter(|entry| !entry.is_empty()) else {
        return Err(Error::Render(format!("style '{style}' produced no output")));
    };
    Ok(postprocess::apply(entry, work_type, uri))
}
