//! The citation processor: a style plus an ordered reference store.

use hashlink::LinkedHashMap;

use crate::error::{Error, Result};
use crate::eval::evaluate_bibliography_entry;
use crate::output::OutputFormat;
use crate::reference::Reference;
use crate::style::Style;

/// Renders bibliography entries for imported references.
///
/// References keep their import order, so callers that render "the first
/// imported entry" get a stable answer.
#[derive(Debug, Clone)]
pub struct Processor {
    style: Style,
    format: OutputFormat,
    references: LinkedHashMap<String, Reference>,
}

impl Processor {
    /// Create a processor for a built-in style.
    ///
    /// Fails with [`Error::UnknownStyle`] when `style_id` is not one of
    /// [`Style::builtin_ids`].
    pub fn new(style_id: &str, format: OutputFormat) -> Result<Processor> {
        let style = Style::builtin(style_id).ok_or_else(|| Error::UnknownStyle {
            id: style_id.to_string(),
        })?;
        Ok(Processor::with_style(style, format))
    }

    /// Create a processor from an already-constructed style.
    pub fn with_style(style: Style, format: OutputFormat) -> Processor {
        Processor {
            style,
            format,
            references: LinkedHashMap::new(),
        }
    }

    pub fn style_id(&self) -> &str {
        &self.style.id
    }

    /// Import references, keeping their order. A reference with an already
    /// imported id replaces the earlier one in place.
    pub fn import(&mut self, references: impl IntoIterator<Item = Reference>) {
        for reference in references {
            self.add_reference(reference);
        }
    }

    pub fn add_reference(&mut self, reference: Reference) {
        // `replace` keeps the entry's position; `insert` would move a
        // re-imported id to the back.
        self.references.replace(reference.id.clone(), reference);
    }

    pub fn get_reference(&self, id: &str) -> Option<&Reference> {
        self.references.get(id)
    }

    pub fn reference_ids(&self) -> impl Iterator<Item = &str> {
        self.references.keys().map(String::as_str)
    }

    /// Render the bibliography entry for one reference id.
    ///
    /// Unknown ids and entries that render to nothing both yield an empty
    /// list rather than an error.
    pub fn render_bibliography(&self, id: &str) -> Vec<String> {
        let Some(reference) = self.references.get(id) else {
            return Vec::new();
        };
        let rendered = evaluate_bibliography_entry(&self.style, reference).render(self.format);
        if rendered.is_empty() {
            Vec::new()
        } else {
            vec![rendered]
        }
    }
}
