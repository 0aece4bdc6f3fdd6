//! The segment model produced by the marker scanner.

/// An ordered unit of converted output: either a span of plain text or
/// a numbered footnote reference.
///
/// A closed sum type rather than a trait hierarchy so that every
/// renderer gets exhaustiveness checking when it walks the sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
#[cfg_attr(feature = "cli", serde(tag = "type", rename_all = "lowercase"))]
pub enum Segment {
    /// A literal text span, preserved exactly as written.
    Text { content: String },
    /// A citation converted to a footnote reference.
    ///
    /// `number` is 1-based and strictly increasing in document order.
    Footnote { content: String, number: usize },
}

impl Segment {
    pub fn text(content: impl Into<String>) -> Self {
        Segment::Text {
            content: content.into(),
        }
    }

    pub fn footnote(content: impl Into<String>, number: usize) -> Self {
        Segment::Footnote {
            content: content.into(),
            number,
        }
    }
}

/// The output of one conversion pass.
///
/// Invariants (guaranteed by the scanner):
///
/// - the number of [`Segment::Footnote`] entries equals `footnotes.len()`
/// - footnote numbers are exactly `1..=footnotes.len()`, in document order
/// - `footnotes[i]` is the content of the footnote numbered `i + 1`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize))]
pub struct ConversionResult {
    /// Superscript-annotated main text. Debug/back-compat display only:
    /// renderers that need real formatting must walk `segments`.
    #[cfg_attr(feature = "cli", serde(rename = "mainText"))]
    pub main_text: String,
    /// Citation bodies in order of first appearance.
    pub footnotes: Vec<String>,
    /// The full segment sequence in document order.
    pub segments: Vec<Segment>,
}

impl ConversionResult {
    /// Number of footnotes produced by the conversion.
    pub fn footnote_count(&self) -> usize {
        self.footnotes.len()
    }
}
