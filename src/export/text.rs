//! Plain-text exporter.
//!
//! The annotated main text followed by the numbered footnote list.
//! This is the "copy both panes" output of the converter, and what the
//! CLI writes for .txt/.md targets.

use std::io::{Seek, Write};

use crate::convert::{convert, format_footnotes};
use crate::error::Result;

use super::Exporter;

/// Exporter producing superscript-annotated plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextExporter;

impl TextExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for TextExporter {
    fn export<W: Write + Seek>(&self, raw_text: &str, writer: &mut W) -> Result<()> {
        writer.write_all(render_plain_text(raw_text).as_bytes())?;
        Ok(())
    }
}

/// Convert `raw_text` and render main text plus the footnote list.
pub fn render_plain_text(raw_text: &str) -> String {
    let result = convert(raw_text);
    if result.footnotes.is_empty() {
        return result.main_text;
    }
    format!(
        "{}\n\nFootnotes:\n{}\n",
        result.main_text,
        format_footnotes(&result.footnotes)
    )
}
