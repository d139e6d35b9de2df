//! Citation style definitions.
//!
//! A style is plain data: a bibliography layout of elements, each carrying
//! its own formatting. The built-in table below stands in for CSL style
//! parsing; the evaluator in `eval` walks a layout over one reference.

/// Inline formatting attached to an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formatting {
    pub font_style: FontStyle,
    pub text_case: Option<TextCase>,
    pub prefix: Option<String>,
    pub suffix: Option<String>,
    /// Wrap the content in curly double quotes. A `.` or `,` opening the
    /// suffix moves inside the closing quote (en-US punctuation rules).
    pub quotes: bool,
}

/// Font style for rendered output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FontStyle {
    #[default]
    Normal,
    Italic,
}

/// Text case transformation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextCase {
    Lowercase,
    Uppercase,
    CapitalizeFirst,
    Title,
}

/// How a single name is written out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameForm {
    /// Full form, inverted to "Family, Given" where the sort order asks.
    #[default]
    Long,
    /// Family name only.
    Short,
}

/// Connective before the final name in a list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameAnd {
    #[default]
    None,
    /// The word "and".
    Text,
    /// An ampersand.
    Symbol,
}

/// Which names in a list are inverted to "Family, Given" order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum NameAsSortOrder {
    #[default]
    None,
    First,
    All,
}

/// Options controlling name-list formatting.
#[derive(Debug, Clone, PartialEq)]
pub struct NameOptions {
    pub form: NameForm,
    /// When set, given names are reduced to initials terminated by this
    /// string.
    pub initialize_with: Option<String>,
    pub and: NameAnd,
    /// Delimiter between names.
    pub delimiter: String,
    /// Separator between family and given parts of an inverted name.
    pub sort_separator: String,
    pub name_as_sort_order: NameAsSortOrder,
    /// Truncate lists of at least this many names to `et_al_use_first`
    /// names followed by the et-al term.
    pub et_al_min: Option<usize>,
    pub et_al_use_first: usize,
}

impl Default for NameOptions {
    fn default() -> Self {
        NameOptions {
            form: NameForm::Long,
            initialize_with: None,
            and: NameAnd::None,
            delimiter: ", ".to_string(),
            sort_separator: ", ".to_string(),
            name_as_sort_order: NameAsSortOrder::None,
            et_al_min: None,
            et_al_use_first: 1,
        }
    }
}

/// One element of a bibliography layout.
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    /// A string variable looked up on the reference.
    Text {
        variable: String,
        formatting: Formatting,
    },
    /// The issued year.
    Issued { formatting: Formatting },
    /// A formatted name list.
    Names {
        variable: String,
        options: NameOptions,
        formatting: Formatting,
    },
    /// The first branch whose variable is present wins; `otherwise` renders
    /// when none is.
    Choose {
        branches: Vec<Branch>,
        otherwise: Vec<Element>,
    },
}

/// A conditional branch keyed on variable presence.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub variable: String,
    pub elements: Vec<Element>,
}

/// The bibliography layout of a style.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Delimiter joining top-level elements.
    pub delimiter: String,
    pub elements: Vec<Element>,
}

/// A citation style: an identifier plus its bibliography layout.
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub id: String,
    pub bibliography: Layout,
}

impl Style {
    /// Look up a built-in style by identifier.
    pub fn builtin(id: &str) -> Option<Style> {
        match id {
            "chicago-author-date" => Some(chicago_author_date()),
            "apa" => Some(apa()),
            _ => None,
        }
    }

    /// Identifiers of all built-in styles.
    pub fn builtin_ids() -> &'static [&'static str] {
        &["apa", "chicago-author-date"]
    }
}

fn text(variable: &str, formatting: Formatting) -> Element {
    Element::Text {
        variable: variable.to_string(),
        formatting,
    }
}

fn suffixed(suffix: &str) -> Formatting {
    Formatting {
        suffix: Some(suffix.to_string()),
        ..Default::default()
    }
}

/// Chicago author-date bibliography entries:
/// `Doe, Jane. 2020. “Title.” Publisher. https://doi.org/...`
fn chicago_author_date() -> Style {
    let author = Element::Names {
        variable: "author".to_string(),
        options: NameOptions {
            and: NameAnd::Text,
            name_as_sort_order: NameAsSortOrder::First,
            et_al_min: Some(11),
            et_al_use_first: 7,
            ..Default::default()
        },
        formatting: suffixed("."),
    };
    let year = Element::Issued {
        formatting: suffixed("."),
    };
    let title = Element::Text {
        variable: "title".to_string(),
        formatting: Formatting {
            text_case: Some(TextCase::Title),
            suffix: Some(".".to_string()),
            quotes: true,
            ..Default::default()
        },
    };
    let container = Element::Choose {
        branches: vec![Branch {
            variable: "container-title".to_string(),
            elements: vec![Element::Text {
                variable: "container-title".to_string(),
                formatting: Formatting {
                    font_style: FontStyle::Italic,
                    suffix: Some(".".to_string()),
                    ..Default::default()
                },
            }],
        }],
        otherwise: vec![],
    };
    let publisher = text("publisher", suffixed("."));
    let link = Element::Choose {
        branches: vec![
            Branch {
                variable: "DOI".to_string(),
                elements: vec![Element::Text {
                    variable: "DOI".to_string(),
                    formatting: Formatting {
                        prefix: Some("https://doi.org/".to_string()),
                        suffix: Some(".".to_string()),
                        ..Default::default()
                    },
                }],
            },
            Branch {
                variable: "URL".to_string(),
                elements: vec![text("URL", suffixed("."))],
            },
        ],
        otherwise: vec![],
    };

    Style {
        id: "chicago-author-date".to_string(),
        bibliography: Layout {
            delimiter: " ".to_string(),
            elements: vec![author, year, title, container, publisher, link],
        },
    }
}

/// APA bibliography entries:
/// `Doe, J. (2020). <i>Title</i>. Publisher. https://doi.org/...`
fn apa() -> Style {
    let author = Element::Names {
        variable: "author".to_string(),
        options: NameOptions {
            initialize_with: Some(".".to_string()),
            and: NameAnd::Symbol,
            name_as_sort_order: NameAsSortOrder::All,
            et_al_min: Some(21),
            et_al_use_first: 19,
            ..Default::default()
        },
        formatting: suffixed("."),
    };
    let year = Element::Issued {
        formatting: Formatting {
            prefix: Some("(".to_string()),
            suffix: Some(").".to_string()),
            ..Default::default()
        },
    };
    // Journal articles keep the title plain and italicize the container;
    // everything else italicizes the title itself.
    let title_block = Element::Choose {
        branches: vec![Branch {
            variable: "container-title".to_string(),
            elements: vec![
                text("title", suffixed(".")),
                Element::Text {
                    variable: "container-title".to_string(),
                    formatting: Formatting {
                        font_style: FontStyle::Italic,
                        suffix: Some(".".to_string()),
                        ..Default::default()
                    },
                },
            ],
        }],
        otherwise: vec![Element::Text {
            variable: "title".to_string(),
            formatting: Formatting {
                font_style: FontStyle::Italic,
                suffix: Some(".".to_string()),
                ..Default::default()
            },
        }],
    };
    let publisher = text("publisher", suffixed("."));
    // APA renders the DOI link without a trailing period.
    let link = Element::Choose {
        branches: vec![
            Branch {
                variable: "DOI".to_string(),
                elements: vec![Element::Text {
                    variable: "DOI".to_string(),
                    formatting: Formatting {
                        prefix: Some("https://doi.org/".to_string()),
                        ..Default::default()
                    },
                }],
            },
            Branch {
                variable: "URL".to_string(),
                elements: vec![text("URL", Formatting::default())],
            },
        ],
        otherwise: vec![],
    };

    Style {
        id: "apa".to_string(),
        bibliography: Layout {
            delimiter: " ".to_string(),
            elements: vec![author, year, title_block, publisher, link],
        },
    }
}
