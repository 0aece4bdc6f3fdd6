//! Core text conversion: citation markers to numbered footnotes.
//!
//! This is the heart of the crate. [`convert`] scans raw input for
//! `{{fn: ...}}` markers in a single left-to-right pass and produces a
//! [`ConversionResult`]: an ordered segment sequence (plain text /
//! footnote reference) plus the parallel footnote list. Every exporter
//! ([`crate::export`]) consumes this output.
//!
//! The scanner is pure and total: it never fails, regardless of how
//! malformed the input is. Markers are user-typed, so malformed input
//! degrades to plain text instead of raising an error:
//!
//! - an unterminated `{{fn:` is preserved verbatim as trailing text
//! - an empty citation (`{{fn:   }}`) is dropped without advancing the
//!   footnote counter

mod scanner;
mod segment;
mod superscript;

pub use scanner::convert;
pub use segment::{ConversionResult, Segment};
pub use superscript::{is_superscript_digit, to_superscript};

/// Format footnotes as a numbered list, one `n. citation` per line.
///
/// # Examples
///
/// ```
/// use citefix::format_footnotes;
///
/// let notes = vec!["Smith, 2020".to_string(), "Doe v. Roe".to_string()];
/// assert_eq!(format_footnotes(&notes), "1. Smith, 2020\n2. Doe v. Roe");
/// assert_eq!(format_footnotes(&[]), "");
/// ```
pub fn format_footnotes(footnotes: &[String]) -> String {
    footnotes
        .iter()
        .enumerate()
        .map(|(i, note)| format!("{}. {}", i + 1, note))
        .collect::<Vec<_>>()
        .join("\n")
}
