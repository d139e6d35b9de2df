//! Built-in citation style rendering.
//!
//! This crate renders bibliography entries from:
//! - A built-in [`Style`] (Chicago author-date or APA)
//! - Bibliographic [`Reference`]s in CSL-JSON shape
//!
//! and produces formatted output as HTML or plain text.
//!
//! # Example
//!
//! ```rust,ignore
//! use citework_citeproc::{OutputFormat, Processor, Reference};
//!
//! let mut processor = Processor::new("chicago-author-date", OutputFormat::Html)?;
//! processor.import(references);
//! let entries = processor.render_bibliography("doe_2020");
//! ```

pub mod error;
pub mod output;
pub mod processor;
pub mod reference;
pub mod style;

mod eval;

// Re-export main types
pub use error::{Error, Result};
pub use output::OutputFormat;
pub use processor::Processor;
pub use reference::{Name, Reference};
pub use style::Style;
