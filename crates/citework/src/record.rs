//! BibTeX records into references.
//!
//! The resolver hands back BibTeX; `biblatex` parses it and this module
//! flattens the entries into [`Reference`] values for the style engine.
//! Field coverage is deliberately narrow: the built-in styles read a
//! handful of variables, and everything else rides along in `extra`.

use biblatex::{Bibliography, ChunksExt, Entry, EntryType, Person};
use citework_citeproc::{Name, Reference};

use crate::error::Result;

/// BibTeX fields kept in [`Reference::extra`] beyond the styled ones.
/// "software" matters to work-type inference; the rest are retained for
/// callers inspecting parsed records.
const EXTRA_FIELDS: &[&str] = &[
    "copyright",
    "keywords",
    "language",
    "note",
    "software",
    "version",
];

/// Parse a BibTeX document into references, preserving entry order.
pub fn parse_references(bibtex: &str) -> Result<Vec<Reference>> {
    let bibliography = Bibliography::parse(bibtex)?;
    Ok(bibliography.iter().map(to_reference).collect())
}

fn to_reference(entry: &Entry) -> Reference {
    let mut reference = Reference {
        id: entry.key.clone(),
        ref_type: entry_type_label(&entry.entry_type),
        title: field(entry, "title"),
        container_title: field(entry, "journaltitle").or_else(|| field(entry, "journal")),
        publisher: field(entry, "publisher"),
        url: field(entry, "url"),
        doi: field(entry, "doi"),
        author: authors(entry),
        issued: issued_year(entry),
        ..Default::default()
    };
    for name in EXTRA_FIELDS {
        if let Some(value) = field(entry, name) {
            reference
                .extra
                .insert((*name).to_string(), serde_json::Value::String(value));
        }
    }
    reference
}

/// The lowercase BibTeX name of an entry type, e.g. "article" or "misc".
fn entry_type_label(entry_type: &EntryType) -> String {
    match entry_type {
        EntryType::Unknown(name) => name.to_lowercase(),
        known => format!("{known:?}").to_lowercase(),
    }
}

/// A trimmed, non-empty field value.
fn field(entry: &Entry, name: &str) -> Option<String> {
    entry
        .get(name)
        .map(|chunks| chunks.format_verbatim())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn authors(entry: &Entry) -> Vec<Name> {
    entry
        .author()
        .unwrap_or_default()
        .into_iter()
        .map(person_name)
        .collect()
}

fn person_name(person: Person) -> Name {
    let family = if person.prefix.is_empty() {
        person.name
    } else {
        format!("{} {}", person.prefix, person.name)
    };
    Name::person(family, person.given_name)
}

fn issued_year(entry: &Entry) -> Option<i32> {
    if let Some(year) = field(entry, "year") {
        if let Ok(parsed) = year.trim().parse() {
            return Some(parsed);
        }
    }
    // biblatex-style records carry a date field instead.
    field(entry, "date")
        .and_then(|date| date.get(..4).map(str::to_string))
        .and_then(|prefix| prefix.parse().ok())
}
