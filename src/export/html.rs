//! HTML exporter (browser preview / clipboard payload).
//!
//! Re-parses the annotated main text with the inline tokenizer and
//! maps each token to its HTML tag: superscript runs become `<sup>`
//! footnote references, links become `<a>`, emphasis becomes
//! `<strong>`/`<em>`/`<u>`/small-caps spans. The output is a
//! self-contained fragment suitable for a `text/html` clipboard item.

use std::io::{Seek, Write};

use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use crate::convert::convert;
use crate::error::Result;
use crate::inline::{InlineToken, parse_heading, tokenize};

use super::Exporter;

/// Characters percent-escaped inside `href` attributes, on top of
/// whatever encoding the URL already carries.
const HREF_ENCODE: &AsciiSet = &CONTROLS.add(b' ').add(b'"').add(b'<').add(b'>').add(b'`');

/// Exporter producing an HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlExporter;

impl HtmlExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for HtmlExporter {
    fn export<W: Write + Seek>(&self, raw_text: &str, writer: &mut W) -> Result<()> {
        writer.write_all(render_html(raw_text).as_bytes())?;
        Ok(())
    }
}

/// Convert `raw_text` and render it as an HTML fragment.
pub fn render_html(raw_text: &str) -> String {
    let result = convert(raw_text);
    let mut out = String::new();
    let mut counter = 1usize;

    for line in result.main_text.split('\n') {
        if line.trim().is_empty() {
            continue;
        }
        match parse_heading(line) {
            Some((1, rest)) => {
                out.push_str("<h1>");
                render_inline(&mut out, rest, Some(&mut counter));
                out.push_str("</h1>\n");
            }
            Some((_, rest)) => {
                out.push_str("<h2>");
                render_inline(&mut out, rest, Some(&mut counter));
                out.push_str("</h2>\n");
            }
            None => {
                out.push_str("<p>");
                render_inline(&mut out, line, Some(&mut counter));
                out.push_str("</p>\n");
            }
        }
    }

    if !result.footnotes.is_empty() {
        out.push_str("<section class=\"footnotes\">\n<hr>\n<ol>\n");
        for note in &result.footnotes {
            out.push_str("<li>");
            // Citations render their own links; superscript glyphs in
            // a citation stay literal.
            render_inline(&mut out, note, None);
            out.push_str("</li>\n");
        }
        out.push_str("</ol>\n</section>\n");
    }

    out
}

/// Render inline tokens into `out`. `counter`, when present, numbers
/// superscript runs sequentially; without it runs stay literal text.
fn render_inline(out: &mut String, text: &str, mut counter: Option<&mut usize>) {
    for token in tokenize(text) {
        match token {
            InlineToken::Text(s) => out.push_str(&escape_html(s)),
            InlineToken::Bold(s) => {
                out.push_str("<strong>");
                out.push_str(&escape_html(s));
                out.push_str("</strong>");
            }
            InlineToken::Italic(s) => {
                out.push_str("<em>");
                out.push_str(&escape_html(s));
                out.push_str("</em>");
            }
            InlineToken::Underline(s) => {
                out.push_str("<u>");
                out.push_str(&escape_html(s));
                out.push_str("</u>");
            }
            InlineToken::SmallCaps(s) => {
                out.push_str("<span style=\"font-variant: small-caps\">");
                out.push_str(&escape_html(s));
                out.push_str("</span>");
            }
            InlineToken::Link { label, url } => {
                let href = utf8_percent_encode(url, HREF_ENCODE).to_string();
                out.push_str(&format!(
                    "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
                    escape_html(&href),
                    escape_html(label)
                ));
            }
            InlineToken::FootnoteRun(s) => match counter.as_deref_mut() {
                Some(n) => {
                    out.push_str(&format!("<sup>{n}</sup>"));
                    *n += 1;
                }
                None => out.push_str(&escape_html(s)),
            },
        }
    }
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
