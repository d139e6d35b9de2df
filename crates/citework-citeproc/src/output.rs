//! Output AST for rendered citations.
//!
//! Rendering happens in two steps: a layout evaluates into an [`Output`]
//! tree, and the tree renders to a string in a chosen [`OutputFormat`].
//! Smart constructors drop null children, so an absent variable suppresses
//! its own affixes instead of leaving stray punctuation behind.

use crate::style::{FontStyle, Formatting, TextCase};

/// Target output flavor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// HTML markup: italics as `<i>...</i>`.
    #[default]
    Html,
    /// Markup-free text.
    Text,
}

/// A node in the rendered output tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// Children wrapped in formatting.
    Formatted {
        formatting: Formatting,
        children: Vec<Output>,
    },
    /// Literal text.
    Literal(String),
    /// Nothing. Dropped by the smart constructors.
    Null,
}

impl Output {
    /// Literal text; empty strings collapse to null.
    pub fn literal(text: impl Into<String>) -> Output {
        let text = text.into();
        if text.is_empty() {
            Output::Null
        } else {
            Output::Literal(text)
        }
    }

    /// Children wrapped in formatting; collapses to null when no child
    /// renders.
    pub fn formatted(formatting: Formatting, children: Vec<Output>) -> Output {
        let children: Vec<Output> = children.into_iter().filter(|c| !c.is_null()).collect();
        if children.is_empty() {
            Output::Null
        } else {
            Output::Formatted {
                formatting,
                children,
            }
        }
    }

    /// A bare sequence with no formatting of its own.
    pub fn sequence(children: Vec<Output>) -> Output {
        Output::formatted(Formatting::default(), children)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Output::Null)
    }

    /// Render the tree to a string.
    pub fn render(&self, format: OutputFormat) -> String {
        match self {
            Output::Null => String::new(),
            Output::Literal(text) => text.clone(),
            Output::Formatted {
                formatting,
                children,
            } => {
                let content: String = children.iter().map(|c| c.render(format)).collect();
                render_with_formatting(formatting, content, format)
            }
        }
    }
}

/// Join outputs with a delimiter, skipping nulls.
pub fn join_outputs(outputs: Vec<Output>, delimiter: &str) -> Output {
    let non_null: Vec<Output> = outputs.into_iter().filter(|o| !o.is_null()).collect();
    let mut children = Vec::with_capacity(non_null.len() * 2);
    for (index, output) in non_null.into_iter().enumerate() {
        if index > 0 && !delimiter.is_empty() {
            children.push(Output::Literal(delimiter.to_string()));
        }
        children.push(output);
    }
    Output::sequence(children)
}

/// Apply formatting to already-rendered content.
///
/// Order: text case, font markup, quotes (with en-US terminal punctuation
/// pulled inside the closing quote), then affixes with period dedup.
fn render_with_formatting(formatting: &Formatting, content: String, format: OutputFormat) -> String {
    if content.is_empty() {
        return content;
    }

    let mut text = match formatting.text_case {
        Some(case) => apply_text_case(&content, case),
        None => content,
    };

    if formatting.font_style == FontStyle::Italic && format == OutputFormat::Html {
        text = format!("<i>{}</i>", text);
    }

    let mut suffix = formatting.suffix.clone().unwrap_or_default();

    if formatting.quotes {
        if let Some(first) = suffix.chars().next() {
            if first == '.' || first == ',' {
                suffix.remove(0);
                if !text.ends_with(first) {
                    text.push(first);
                }
            }
        }
        text = format!("“{}”", text);
    }

    // A suffix period onto content already ending in one would double up.
    if suffix.starts_with('.') {
        let bare = text.strip_suffix("</i>").unwrap_or(&text);
        if bare.ends_with('.') {
            suffix.remove(0);
        }
    }

    let prefix = formatting.prefix.as_deref().unwrap_or_default();
    format!("{}{}{}", prefix, text, suffix)
}

/// Apply a text case transformation.
pub(crate) fn apply_text_case(text: &str, case: TextCase) -> String {
    match case {
        TextCase::Lowercase => text.to_lowercase(),
        TextCase::Uppercase => text.to_uppercase(),
        TextCase::CapitalizeFirst => capitalize_first(text),
        TextCase::Title => title_case(text),
    }
}

fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Words that stay lowercase in title case unless first or last.
const TITLE_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "as", "at", "but", "by", "down", "for", "from", "in", "into", "nor", "of",
    "off", "on", "onto", "or", "over", "so", "the", "to", "up", "upon", "via", "with", "yet",
];

/// Title case: capitalize lowercase words, leaving interior stop words and
/// words that already carry capitals untouched.
fn title_case(text: &str) -> String {
    let words: Vec<&str> = text.split(' ').collect();
    let last = words.len().saturating_sub(1);
    words
        .iter()
        .enumerate()
        .map(|(index, word)| {
            if word.chars().any(|c| c.is_uppercase()) {
                (*word).to_string()
            } else if index != 0 && index != last && TITLE_STOP_WORDS.contains(word) {
                (*word).to_string()
            } else {
                capitalize_first(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
