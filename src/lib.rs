//! # citefix
//!
//! Convert legal/academic text with inline `{{fn: ...}}` citation
//! markers into documents with numbered footnotes.
//!
//! ## Features
//!
//! - Single-pass marker scanner producing an ordered segment model
//! - Word (.docx) export with native footnotes and hyperlinks
//! - PDF export with bracketed references and a footnote block
//! - HTML fragment export for clipboard/preview use
//! - Malformed markers never fail: unterminated markers stay plain
//!   text, empty citations are dropped
//!
//! ## Quick Start
//!
//! ```
//! use citefix::convert;
//!
//! let result = convert("Settled law.{{fn: Marbury v. Madison, 5 U.S. 137 (1803)}}");
//! assert_eq!(result.main_text, "Settled law.¹");
//! assert_eq!(result.footnotes.len(), 1);
//! ```
//!
//! ## Exporting
//!
//! ```no_run
//! use citefix::export::{ExportOptions, write_docx, write_pdf};
//!
//! let text = "As held in *Erie*.{{fn: Erie R.R. v. Tompkins, 304 U.S. 64 (1938)}}";
//! let options = ExportOptions::default();
//! write_docx(text, &options, "brief.docx")?;
//! write_pdf(text, &options, "brief.pdf")?;
//! # Ok::<(), citefix::Error>(())
//! ```

pub mod convert;
pub mod export;
pub mod inline;
pub(crate) mod util;

mod error;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use convert::{ConversionResult, Segment, convert, format_footnotes, to_superscript};
pub use error::{Error, Result};
pub use util::{DEFAULT_WORD_LIMIT, check_word_limit, count_words, decode_text};
