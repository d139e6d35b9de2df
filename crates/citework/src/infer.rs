//! Work-type inference from parsed records.

use citework_citeproc::Reference;

/// Infer a work type from the first reference.
///
/// A journal title means an article; a software field means software.
/// Anything else infers the empty string, which downstream suppresses the
/// bracketed annotation.
pub fn infer_work_type(references: &[Reference]) -> String {
    let Some(first) = references.first() else {
        return String::new();
    };
    if first.has_variable("container-title") {
        return "article".to_string();
    }
    if first.has_variable("software") {
        return "software".to_string();
    }
    String::new()
}
