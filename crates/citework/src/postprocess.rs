//! Post-processing of rendered citations.
//!
//! Style engines leave artifacts behind: TeX en-dash tokens, protective
//! braces around all-caps words. This module repairs those, inserts the
//! bracketed work-type annotation after the first sentence boundary, and
//! turns embedded URLs into anchors. Each transform is a pure function so
//! it can be tested on its own; [`apply`] runs them in pipeline order.

use once_cell::sync::Lazy;
use regex::{NoExpand, Regex};

static ENDASH_ARTIFACT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\{\\textendash\}").unwrap());

/// Sentence boundary after a closing curly quote, chicago style.
static QUOTE_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"\.”\s+").unwrap());

/// Sentence boundary after closing italics, apa style.
static ITALIC_BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"</i>\.\s+").unwrap());

static URL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r#"https?://[^\s<>"]+"#).unwrap());

/// Run the full repair, annotation, and linking pass over a rendered
/// citation. `uri` is the resolvable URI the citation was fetched from.
pub fn apply(citation: &str, work_type: &str, uri: &str) -> String {
    let citation = normalize_dashes(citation);
    let citation = strip_braces(&citation);
    let citation = annotate_work_type(&citation, work_type);
    inject_hyperlinks(&citation, uri)
}

/// Replace literal `{\textendash}` artifact tokens with a plain hyphen.
pub(crate) fn normalize_dashes(citation: &str) -> String {
    ENDASH_ARTIFACT.replace_all(citation, "-").into_owned()
}

/// Drop every literal brace left over from case-protection groups.
pub(crate) fn strip_braces(citation: &str) -> String {
    citation.replace(['{', '}'], "")
}

/// Insert `"[Work type]. "` after the first chicago-style quote boundary
/// and, independently, after the first apa-style italics boundary. A blank
/// work type or a citation with neither boundary passes through unchanged.
pub(crate) fn annotate_work_type(citation: &str, work_type: &str) -> String {
    if work_type.trim().is_empty() {
        return citation.to_string();
    }
    let label = humanize(work_type);
    let citation = QUOTE_BOUNDARY
        .replacen(citation, 1, NoExpand(&format!(".” [{label}]. ")))
        .into_owned();
    ITALIC_BOUNDARY
        .replacen(&citation, 1, NoExpand(&format!("</i>. [{label}]. ")))
        .into_owned()
}

/// Replace each embedded HTTP(S) URL with an anchor followed by a single
/// trailing period. A match that is the resolvable URI up to letter case
/// links to the canonical `uri`; any other URL links to itself.
pub(crate) fn inject_hyperlinks(citation: &str, uri: &str) -> String {
    URL_PATTERN
        .replace_all(citation, |captures: &regex::Captures<'_>| {
            let matched = &captures[0];
            let trimmed = matched.strip_suffix('.').unwrap_or(matched);
            let target = if trimmed.eq_ignore_ascii_case(uri) {
                uri
            } else {
                trimmed
            };
            format!("<a href=\"{target}\" target=\"_blank\">{target}</a>.")
        })
        .into_owned()
}

/// `"journal_article"` becomes `"Journal article"`.
pub(crate) fn humanize(work_type: &str) -> String {
    let spaced = work_type.to_lowercase().replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URI: &str = "https://doi.org/10.1234/cdl.12345";

    #[test]
    fn test_endash_artifact_variants() {
        assert_eq!(normalize_dashes(r"pp. 10{\textendash}20"), "pp. 10-20");
        assert_eq!(normalize_dashes(r"pp. 10{\Textendash}20"), "pp. 10-20");
        assert_eq!(normalize_dashes(r"pp. 10{\TEXTENDASH}20"), "pp. 10-20");
        assert_eq!(normalize_dashes("no artifact here"), "no artifact here");
    }

    #[test]
    fn test_brace_stripping() {
        assert_eq!(
            strip_braces("The {DNA} of {FORTRAN} programs"),
            "The DNA of FORTRAN programs"
        );
        assert_eq!(strip_braces("{{nested}}"), "nested");
    }

    #[test]
    fn test_quote_boundary_annotation() {
        assert_eq!(
            annotate_work_type("Doe, Jane. 2020. “Title.” Dryad.", "dataset"),
            "Doe, Jane. 2020. “Title.” [Dataset]. Dryad."
        );
    }

    #[test]
    fn test_italics_boundary_annotation() {
        assert_eq!(
            annotate_work_type("Doe, J. (2020). <i>Title</i>. Dryad.", "dataset"),
            "Doe, J. (2020). <i>Title</i>. [Dataset]. Dryad."
        );
    }

    #[test]
    fn test_only_first_boundary_of_each_kind_is_annotated() {
        assert_eq!(
            annotate_work_type("“A.” One. “B.” Two.", "dataset"),
            "“A.” [Dataset]. One. “B.” Two."
        );
    }

    #[test]
    fn test_boundaries_of_both_kinds_are_annotated_independently() {
        // A chicago article entry carries a quoted title and an italic
        // journal, so both boundary kinds appear and both get the label.
        assert_eq!(
            annotate_work_type("“Title.” <i>Journal</i>. 2020.", "article"),
            "“Title.” [Article]. <i>Journal</i>. [Article]. 2020."
        );
    }

    #[test]
    fn test_blank_work_type_suppresses_annotation() {
        assert_eq!(
            annotate_work_type("Doe, Jane. 2020. “Title.” Dryad.", ""),
            "Doe, Jane. 2020. “Title.” Dryad."
        );
        assert_eq!(
            annotate_work_type("Doe, Jane. 2020. “Title.” Dryad.", "  "),
            "Doe, Jane. 2020. “Title.” Dryad."
        );
    }

    #[test]
    fn test_no_boundary_returns_citation_unchanged() {
        assert_eq!(annotate_work_type("No boundaries here", "dataset"), "No boundaries here");
    }

    #[test]
    fn test_underscored_work_type_is_humanized() {
        assert_eq!(humanize("dataset"), "Dataset");
        assert_eq!(humanize("journal_article"), "Journal article");
        assert_eq!(humanize("SOFTWARE"), "Software");
        assert_eq!(humanize(""), "");
    }

    #[test]
    fn test_hyperlink_injection_dedups_trailing_period() {
        assert_eq!(
            inject_hyperlinks(&format!("Dryad. {URI}."), URI),
            format!("Dryad. <a href=\"{URI}\" target=\"_blank\">{URI}</a>.")
        );
    }

    #[test]
    fn test_hyperlink_injection_appends_missing_period() {
        assert_eq!(
            inject_hyperlinks(&format!("Dryad. {URI}"), URI),
            format!("Dryad. <a href=\"{URI}\" target=\"_blank\">{URI}</a>.")
        );
    }

    #[test]
    fn test_matched_uri_is_canonicalized_case_insensitively() {
        let shouting = "https://doi.org/10.1234/CDL.12345.";
        assert_eq!(
            inject_hyperlinks(shouting, URI),
            format!("<a href=\"{URI}\" target=\"_blank\">{URI}</a>.")
        );
    }

    #[test]
    fn test_unrelated_url_links_to_itself() {
        let text = "Data at https://repo.test/records/9. See also.";
        assert_eq!(
            inject_hyperlinks(text, URI),
            "Data at <a href=\"https://repo.test/records/9\" target=\"_blank\">\
             https://repo.test/records/9</a>. See also."
        );
    }

    #[test]
    fn test_non_http_text_passes_through() {
        assert_eq!(inject_hyperlinks("ftp://mirror.test/x", URI), "ftp://mirror.test/x");
        assert_eq!(inject_hyperlinks("no links at all", URI), "no links at all");
    }

    #[test]
    fn test_apply_chicago_fixture() {
        let raw = "Doe, Jane. 2020. “Arctic River Dissolved and Biogenic Silicon Exports.” \
                   Dryad. https://doi.org/10.1234/cdl.12345.";
        assert_eq!(
            apply(raw, "dataset", URI),
            "Doe, Jane. 2020. “Arctic River Dissolved and Biogenic Silicon Exports.” \
             [Dataset]. Dryad. <a href=\"https://doi.org/10.1234/cdl.12345\" \
             target=\"_blank\">https://doi.org/10.1234/cdl.12345</a>."
        );
    }

    #[test]
    fn test_apply_apa_fixture() {
        let raw = "Doe, J. (2020). <i>Arctic river dissolved and biogenic silicon exports</i>. \
                   Dryad. https://doi.org/10.1234/cdl.12345";
        assert_eq!(
            apply(raw, "dataset", URI),
            "Doe, J. (2020). <i>Arctic river dissolved and biogenic silicon exports</i>. \
             [Dataset]. Dryad. <a href=\"https://doi.org/10.1234/cdl.12345\" \
             target=\"_blank\">https://doi.org/10.1234/cdl.12345</a>."
        );
    }

    #[test]
    fn test_apply_with_braces_and_dashes() {
        let raw = r"Doe, Jane. 2020. “Rivers 1990{\textendash}2020 {DNA} survey.” Dryad.";
        assert_eq!(
            apply(raw, "", URI),
            "Doe, Jane. 2020. “Rivers 1990-2020 DNA survey.” Dryad."
        );
    }
}
