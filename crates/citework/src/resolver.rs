//! Identifier normalization: bare DOIs become resolver URIs.

/// Default DOI resolver base.
pub const DEFAULT_RESOLVER_BASE: &str = "https://doi.org";

/// Normalize a raw identifier into a resolvable URI.
///
/// Identifiers already carrying an `http` or `https` scheme pass through
/// unchanged. Otherwise a leading `doi:` scheme is dropped and the rest is
/// joined to `base`. Empty and all-whitespace input yields `None`.
pub fn resolve_identifier(identifier: &str, base: &str) -> Option<String> {
    let trimmed = identifier.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        return Some(trimmed.to_string());
    }
    let bare = trimmed.strip_prefix("doi:").unwrap_or(trimmed);
    if bare.is_empty() {
        return None;
    }
    Some(format!("{}/{}", base.trim_end_matches('/'), bare))
}
