//! WASM bindings for browser-based citation conversion.
//!
//! This module exposes the core conversion functions to JavaScript via wasm-bindgen.

use wasm_bindgen::prelude::*;

use crate::convert::{convert, format_footnotes};
use crate::export::{ExportOptions, docx_bytes, pdf_bytes, render_html, render_plain_text};
use crate::util::{DEFAULT_WORD_LIMIT, check_word_limit};

/// Initialize panic hook for better error messages in the browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "wasm")]
    console_error_panic_hook::set_once();
}

/// Convert marked-up text and return the main text with superscript references.
#[wasm_bindgen]
pub fn main_text(input: &str) -> String {
    convert(input).main_text
}

/// Convert marked-up text and return the numbered footnote list.
#[wasm_bindgen]
pub fn footnote_list(input: &str) -> String {
    let result = convert(input);
    format_footnotes(&result.footnotes)
}

/// Number of footnotes the input would produce.
#[wasm_bindgen]
pub fn footnote_count(input: &str) -> usize {
    convert(input).footnote_count()
}

/// Convert marked-up text to a Word document.
///
/// Returns the bytes of a .docx file with native footnotes. Empty and
/// over-limit documents are rejected, as in the CLI.
#[wasm_bindgen]
pub fn to_docx(input: &str) -> Result<Vec<u8>, JsValue> {
    checked_docx(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert marked-up text to a PDF document.
///
/// Returns the bytes of a .pdf file with a footnote block at the end.
/// Empty and over-limit documents are rejected, as in the CLI.
#[wasm_bindgen]
pub fn to_pdf(input: &str) -> Result<Vec<u8>, JsValue> {
    checked_pdf(input).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn checked_docx(input: &str) -> crate::Result<Vec<u8>> {
    check_word_limit(input, DEFAULT_WORD_LIMIT)?;
    docx_bytes(input, &ExportOptions::default())
}

fn checked_pdf(input: &str) -> crate::Result<Vec<u8>> {
    check_word_limit(input, DEFAULT_WORD_LIMIT)?;
    pdf_bytes(input, &ExportOptions::default())
}

/// Convert marked-up text to an HTML fragment.
#[wasm_bindgen]
pub fn to_html(input: &str) -> String {
    render_html(input)
}

/// Convert marked-up text to plain text with a trailing footnote list.
#[wasm_bindgen]
pub fn to_plain_text(input: &str) -> String {
    render_plain_text(input)
}
