//! Export module: renderers over conversion output.
//!
//! Provides the [`Exporter`] trait and format-specific implementations.
//! Each exporter runs the marker scanner itself (one conversion per
//! export request; conversion is pure, so there is nothing to cache)
//! and then walks the result its own way:
//!
//! - [`DocxExporter`] walks `segments`, emitting native Word footnotes
//! - [`PdfExporter`] works off the annotated main text + footnote list
//! - [`HtmlExporter`] re-parses the annotated main text into tags
//! - [`TextExporter`] emits main text plus a numbered footnote list
//!
//! # Example
//!
//! ```no_run
//! use std::fs::File;
//! use citefix::export::{DocxExporter, Exporter};
//!
//! let mut file = File::create("brief.docx")?;
//! DocxExporter::new().export("Settled law.{{fn: Marbury v. Madison}}", &mut file)?;
//! # Ok::<(), citefix::Error>(())
//! ```

use std::io::{Seek, Write};
use std::path::Path;

use crate::error::{Error, Result};

mod docx;
mod html;
mod pdf;
mod text;

pub use docx::{DocxExporter, docx_bytes, write_docx};
pub use html::{HtmlExporter, render_html};
pub use pdf::{PdfExporter, pdf_bytes, write_pdf};
pub use text::{TextExporter, render_plain_text};

/// Paragraph alignment for paged output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Formatting options shared by the exporters.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Body font name (DOCX only; the PDF exporter always renders in
    /// the base-14 Times family).
    pub font: String,
    /// Body font size in points.
    pub font_size: f32,
    /// Line spacing multiple (1.0 = single).
    pub line_spacing: f32,
    pub alignment: Alignment,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            font_size: 12.0,
            line_spacing: 1.5,
            alignment: Alignment::Left,
        }
    }
}

/// Trait for exporting converted text to a specific format.
///
/// Exporters hold their configuration and write to any `Write + Seek`
/// destination (`File`, or `Cursor<Vec<u8>>` for in-memory output).
pub trait Exporter {
    fn export<W: Write + Seek>(&self, raw_text: &str, writer: &mut W) -> Result<()>;
}

/// Output formats selectable by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Docx,
    Pdf,
    Html,
    Text,
}

impl OutputFormat {
    /// Detect the output format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "docx" => Ok(OutputFormat::Docx),
            "pdf" => Ok(OutputFormat::Pdf),
            "html" | "htm" => Ok(OutputFormat::Html),
            "txt" | "md" => Ok(OutputFormat::Text),
            _ => Err(Error::UnsupportedFormat(ext)),
        }
    }
}
