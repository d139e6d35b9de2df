//! Layout evaluation: one reference through one style.

use crate::output::{join_outputs, Output};
use crate::reference::{Name, Reference};
use crate::style::{Element, NameAnd, NameAsSortOrder, NameForm, NameOptions, Style};

/// Evaluate the bibliography layout of `style` over a single reference.
pub fn evaluate_bibliography_entry(style: &Style, reference: &Reference) -> Output {
    let layout = &style.bibliography;
    evaluate_elements(&layout.elements, reference, &layout.delimiter)
}

fn evaluate_elements(elements: &[Element], reference: &Reference, delimiter: &str) -> Output {
    let outputs = elements
        .iter()
        .map(|element| evaluate_element(element, reference, delimiter))
        .collect();
    join_outputs(outputs, delimiter)
}

fn evaluate_element(element: &Element, reference: &Reference, delimiter: &str) -> Output {
    match element {
        Element::Text {
            variable,
            formatting,
        } => match reference.get_variable(variable) {
            Some(value) => Output::formatted(formatting.clone(), vec![Output::literal(value)]),
            None => Output::Null,
        },
        Element::Issued { formatting } => match reference.issued_year() {
            Some(year) => {
                Output::formatted(formatting.clone(), vec![Output::literal(year.to_string())])
            }
            None => Output::Null,
        },
        Element::Names {
            variable,
            options,
            formatting,
        } => match reference.get_names(variable) {
            Some(names) => Output::formatted(
                formatting.clone(),
                vec![Output::literal(format_names(names, options))],
            ),
            None => Output::Null,
        },
        Element::Choose {
            branches,
            otherwise,
        } => {
            for branch in branches {
                if reference.has_variable(&branch.variable) {
                    return evaluate_elements(&branch.elements, reference, delimiter);
                }
            }
            evaluate_elements(otherwise, reference, delimiter)
        }
    }
}

/// Format a name list per the style's name options.
pub(crate) fn format_names(names: &[Name], options: &NameOptions) -> String {
    let truncated = match options.et_al_min {
        Some(min) if names.len() >= min => &names[..options.et_al_use_first.min(names.len())],
        _ => names,
    };
    let et_al = truncated.len() < names.len();

    let formatted: Vec<String> = truncated
        .iter()
        .enumerate()
        .map(|(index, name)| format_single_name(name, index, options))
        .collect();

    let and_word = match options.and {
        NameAnd::None => None,
        NameAnd::Text => Some("and"),
        NameAnd::Symbol => Some("&"),
    };

    let mut result = match formatted.split_last() {
        None => return String::new(),
        Some((last, rest)) if rest.is_empty() => last.clone(),
        Some((last, rest)) => {
            let head = rest.join(options.delimiter.as_str());
            match and_word {
                // Truncated lists read "A, B, et al." with no connective.
                Some(word) if !et_al => {
                    format!("{head}{}{word} {last}", options.delimiter)
                }
                _ => format!("{head}{}{last}", options.delimiter),
            }
        }
    };

    if et_al {
        result.push_str(&options.delimiter);
        result.push_str("et al.");
    }
    result
}

fn format_single_name(name: &Name, index: usize, options: &NameOptions) -> String {
    if let Some(literal) = &name.literal {
        return literal.clone();
    }
    let family = name.family.clone().unwrap_or_default();
    if options.form == NameForm::Short {
        return family;
    }
    let given = match (&name.given, &options.initialize_with) {
        (Some(given), Some(with)) => initialize_name(given, with),
        (Some(given), None) => given.clone(),
        (None, _) => String::new(),
    };
    if given.is_empty() {
        return family;
    }
    if family.is_empty() {
        return given;
    }
    let inverted = match options.name_as_sort_order {
        NameAsSortOrder::All => true,
        NameAsSortOrder::First => index == 0,
        NameAsSortOrder::None => false,
    };
    if inverted {
        format!("{}{}{}", family, options.sort_separator, given)
    } else {
        format!("{} {}", given, family)
    }
}

/// Reduce a given name to initials: "Jane" becomes "J.", "Jean-Luc"
/// becomes "J.-L.".
pub(crate) fn initialize_name(given: &str, with: &str) -> String {
    given
        .split_whitespace()
        .map(|word| {
            word.split('-')
                .filter(|part| !part.is_empty())
                .map(|part| {
                    let initial: String = part
                        .chars()
                        .take(1)
                        .flat_map(|c| c.to_uppercase())
                        .collect();
                    format!("{initial}{with}")
                })
                .collect::<Vec<_>>()
                .join("-")
        })
        .collect::<Vec<_>>()
        .join(" ")
}
