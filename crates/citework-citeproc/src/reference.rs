//! Bibliographic references in CSL-JSON-shaped form.
//!
//! A [`Reference`] carries the small closed set of variables the built-in
//! styles consume, plus a flattened map for anything else a record parser
//! hands over. Variable lookup never fails: absent or empty values simply
//! read as absent, so callers do not need to guard field access.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single bibliographic reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    /// Unique identifier for this reference.
    pub id: String,

    /// Reference type (e.g., "article", "misc").
    #[serde(rename = "type", default, skip_serializing_if = "String::is_empty")]
    pub ref_type: String,

    /// Title of the work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Container title (the journal name for articles).
    #[serde(
        rename = "container-title",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub container_title: Option<String>,

    /// Publisher name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Resolvable URL for the work.
    #[serde(rename = "URL", default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Digital Object Identifier, without a resolver prefix.
    #[serde(rename = "DOI", default, skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,

    /// Authors, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub author: Vec<Name>,

    /// Year of issue.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issued: Option<i32>,

    /// Any other string-valued variables (keywords, language, copyright, ...).
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>,
}

impl Reference {
    /// Look up a string variable by its CSL name.
    ///
    /// Empty and whitespace-only values read as absent.
    pub fn get_variable(&self, name: &str) -> Option<String> {
        let value = match name {
            "title" => self.title.clone(),
            "container-title" => self.container_title.clone(),
            "publisher" => self.publisher.clone(),
            "URL" => self.url.clone(),
            "DOI" => self.doi.clone(),
            _ => self.extra.get(name).and_then(json_string),
        };
        value.filter(|v| !v.trim().is_empty())
    }

    /// Whether a variable is present with a non-empty value.
    pub fn has_variable(&self, name: &str) -> bool {
        self.get_variable(name).is_some()
    }

    /// Names associated with a name variable.
    ///
    /// `author` is the only name variable the built-in styles consume.
    pub fn get_names(&self, name: &str) -> Option<&[Name]> {
        match name {
            "author" if !self.author.is_empty() => Some(&self.author),
            _ => None,
        }
    }

    /// Year of issue, when known.
    pub fn issued_year(&self) -> Option<i32> {
        self.issued
    }
}

fn json_string(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A personal or institutional name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Name {
    /// Family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,

    /// Given name(s).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub given: Option<String>,

    /// Literal name for institutions, rendered as-is.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub literal: Option<String>,
}

impl Name {
    /// A personal name. An empty given name reads as absent.
    pub fn person(family: impl Into<String>, given: impl Into<String>) -> Name {
        let given = given.into();
        Name {
            family: Some(family.into()),
            given: (!given.is_empty()).then_some(given),
            literal: None,
        }
    }

    /// An institutional name, rendered without inversion or initials.
    pub fn institution(literal: impl Into<String>) -> Name {
        Name {
            family: None,
            given: None,
            literal: Some(literal.into()),
        }
    }

    /// Display-order form: "Given Family", or the literal for institutions.
    pub fn display_name(&self) -> String {
        if let Some(literal) = &self.literal {
            return literal.clone();
        }
        match (&self.given, &self.family) {
            (Some(given), Some(family)) => format!("{} {}", given, family),
            (None, Some(family)) => family.clone(),
            (Some(given), None) => given.clone(),
            (None, None) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_reference_from_json() {
        let json = r#"{
            "id": "doe2020",
            "type": "misc",
            "title": "Arctic river dissolved and biogenic silicon exports",
            "publisher": "Dryad",
            "DOI": "10.1234/cdl.12345",
            "author": [{"family": "Doe", "given": "Jane"}],
            "issued": 2020,
            "language": "en"
        }"#;

        let reference: Reference = serde_json::from_str(json).unwrap();
        assert_eq!(reference.id, "doe2020");
        assert_eq!(reference.ref_type, "misc");
        assert_eq!(
            reference.get_variable("title").as_deref(),
            Some("Arctic river dissolved and biogenic silicon exports")
        );
        assert_eq!(
            reference.get_variable("DOI").as_deref(),
            Some("10.1234/cdl.12345")
        );
        assert_eq!(reference.issued_year(), Some(2020));
        // Unknown variables land in the flattened map.
        assert_eq!(reference.get_variable("language").as_deref(), Some("en"));
    }

    #[test]
    fn test_get_variable_filters_empty_values() {
        let reference = Reference {
            id: "x".to_string(),
            title: Some(String::new()),
            container_title: Some("   ".to_string()),
            ..Default::default()
        };

        assert_eq!(reference.get_variable("title"), None);
        assert!(!reference.has_variable("container-title"));
        assert!(!reference.has_variable("publisher"));
    }

    #[test]
    fn test_get_names() {
        let reference = Reference {
            id: "x".to_string(),
            author: vec![Name::person("Doe", "Jane")],
            ..Default::default()
        };

        let names = reference.get_names("author").unwrap();
        assert_eq!(names.len(), 1);
        assert_eq!(names[0].family.as_deref(), Some("Doe"));
        assert!(reference.get_names("editor").is_none());
    }

    #[test]
    fn test_display_name() {
        assert_eq!(Name::person("Doe", "Jane").display_name(), "Jane Doe");
        assert_eq!(Name::person("Doe", "").display_name(), "Doe");
        assert_eq!(Name::institution("Dryad").display_name(), "Dryad");
    }
}
