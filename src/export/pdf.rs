//! PDF exporter.
//!
//! Works off the annotated main text plus the footnote list rather
//! than the segment sequence: superscript glyph runs are replaced by
//! bracketed `[n]` references, because base-14 fonts have no reliable
//! superscript digit glyphs, and the footnotes are appended as a
//! numbered block at the end of the content.
//!
//! Rendering is two-phase: a layout pass places wrapped lines on
//! pages, then a render pass emits one content stream per page (plus
//! the `Page i of n` footer, which needs the final page count).
//! Text-only output on the base-14 Times family with WinAnsi encoding.

use std::io::{Seek, Write};
use std::path::Path;
use std::sync::LazyLock;

use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use regex::Regex;

use crate::convert::convert;
use crate::error::Result;
use crate::inline::{parse_heading, strip_markup};

use super::{Alignment, ExportOptions, Exporter};

// A4 portrait, 1 inch margins, all in points.
const PAGE_WIDTH: f32 = 595.276;
const PAGE_HEIGHT: f32 = 841.89;
const MARGIN: f32 = 72.0;
const FOOTER_SIZE: f32 = 10.0;
const FOOTER_BASELINE: f32 = 36.0;

static SUPERSCRIPT_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\u{2070}\u{00B9}\u{00B2}\u{00B3}\u{2074}-\u{2079}]+")
        .expect("superscript run regex is valid")
});

/// Exporter producing a paginated PDF.
#[derive(Debug, Clone, Default)]
pub struct PdfExporter {
    options: ExportOptions,
}

impl PdfExporter {
    /// Create a new exporter with default formatting options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with the specified formatting options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl Exporter for PdfExporter {
    fn export<W: Write + Seek>(&self, raw_text: &str, writer: &mut W) -> Result<()> {
        let bytes = pdf_bytes(raw_text, &self.options)?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}

/// Convert `raw_text` and write a .pdf file to disk.
pub fn write_pdf<P: AsRef<Path>>(raw_text: &str, options: &ExportOptions, path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    PdfExporter::with_options(options.clone()).export(raw_text, &mut file)
}

/// Convert `raw_text` and return the PDF bytes.
pub fn pdf_bytes(raw_text: &str, options: &ExportOptions) -> Result<Vec<u8>> {
    let result = convert(raw_text);

    // Bracketed references instead of superscript glyphs; one number
    // per run, numbering in reading order.
    let mut counter = 1usize;
    let processed = SUPERSCRIPT_RUN.replace_all(&result.main_text, |_: &regex::Captures| {
        let replacement = format!("[{counter}]");
        counter += 1;
        replacement
    });

    let pages = layout(processed.as_ref(), &result.footnotes, options);
    Ok(render(&pages))
}

/// One positioned line of text (PDF coordinates, baseline at `y`).
struct PlacedText {
    x: f32,
    y: f32,
    size: f32,
    bold: bool,
    text: String,
}

/// A horizontal rule (the footnote separator).
struct PlacedRule {
    x1: f32,
    y: f32,
    x2: f32,
}

#[derive(Default)]
struct Page {
    texts: Vec<PlacedText>,
    rules: Vec<PlacedRule>,
}

struct Layout<'a> {
    pages: Vec<Page>,
    /// Cursor measured from the top edge of the page.
    y: f32,
    line_height: f32,
    options: &'a ExportOptions,
}

impl<'a> Layout<'a> {
    fn new(options: &'a ExportOptions) -> Self {
        Self {
            pages: vec![Page::default()],
            y: MARGIN,
            line_height: options.font_size * options.line_spacing,
            options,
        }
    }

    fn page(&mut self) -> &mut Page {
        self.pages.last_mut().expect("at least one page")
    }

    fn break_page(&mut self) {
        self.pages.push(Page::default());
        self.y = MARGIN;
    }

    /// Place a block of text with greedy word wrap, advancing the
    /// cursor one line height per wrapped line.
    fn add_text(&mut self, text: &str, x: f32, max_width: f32, size: f32, bold: bool) {
        for line in wrap(text, max_width, size, bold) {
            if self.y > PAGE_HEIGHT - MARGIN {
                self.break_page();
            }
            let line_width = measure(&line, size, bold);
            let x = match self.options.alignment {
                Alignment::Center => (PAGE_WIDTH - line_width) / 2.0,
                Alignment::Right => PAGE_WIDTH - MARGIN - line_width,
                // Full justification is not attempted; justify falls
                // back to a left-set ragged edge.
                Alignment::Left | Alignment::Justify => x,
            };
            let y = PAGE_HEIGHT - self.y;
            self.page().texts.push(PlacedText {
                x,
                y,
                size,
                bold,
                text: line,
            });
            self.y += self.line_height;
        }
    }
}

fn layout(main_text: &str, footnotes: &[String], options: &ExportOptions) -> Vec<Page> {
    let size = options.font_size;
    let content_width = PAGE_WIDTH - MARGIN * 2.0;
    let mut layout = Layout::new(options);

    for paragraph in main_text.split('\n') {
        if paragraph.trim().is_empty() {
            layout.y += layout.line_height;
            continue;
        }
        match parse_heading(paragraph) {
            Some((1, rest)) => {
                let text = strip_markup(rest).to_uppercase();
                layout.add_text(&text, MARGIN, content_width, size + 2.0, true);
                layout.y += layout.line_height * 0.5;
            }
            Some((_, rest)) => {
                let text = strip_markup(rest);
                layout.add_text(&text, MARGIN + 36.0, content_width - 36.0, size, true);
                layout.y += layout.line_height * 0.3;
            }
            None => {
                let text = strip_markup(paragraph);
                layout.add_text(&text, MARGIN, content_width, size, false);
            }
        }
    }

    if !footnotes.is_empty() {
        layout.y += layout.line_height * 2.0;
        if layout.y > PAGE_HEIGHT - MARGIN * 2.0 {
            layout.break_page();
        }

        // Short separator rule above the footnote block.
        let rule_y = PAGE_HEIGHT - layout.y;
        let rule = PlacedRule {
            x1: MARGIN,
            y: rule_y,
            x2: MARGIN + content_width * 0.3,
        };
        layout.page().rules.push(rule);
        layout.y += layout.line_height;

        let note_size = (size - 2.0).max(2.0);
        for (i, note) in footnotes.iter().enumerate() {
            let text = format!("{}. {}", i + 1, strip_markup(note));
            layout.add_text(&text, MARGIN, content_width, note_size, false);
            layout.y += layout.line_height * 0.3;
        }
    }

    layout.pages
}

fn render(pages: &[Page]) -> Vec<u8> {
    let mut pdf = Pdf::new();
    let mut next_id = 1;
    let mut alloc = || {
        let r = Ref::new(next_id);
        next_id += 1;
        r
    };

    let catalog_id = alloc();
    let page_tree_id = alloc();
    let font_regular_id = alloc();
    let font_bold_id = alloc();
    let page_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = pages.iter().map(|_| alloc()).collect();

    pdf.catalog(catalog_id).pages(page_tree_id);
    pdf.pages(page_tree_id)
        .kids(page_ids.iter().copied())
        .count(pages.len() as i32);

    pdf.type1_font(font_regular_id)
        .base_font(Name(b"Times-Roman"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(font_bold_id)
        .base_font(Name(b"Times-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    let total = pages.len();
    for (i, page) in pages.iter().enumerate() {
        let mut content = Content::new();

        for rule in &page.rules {
            content.set_line_width(0.5);
            content.move_to(rule.x1, rule.y);
            content.line_to(rule.x2, rule.y);
            content.stroke();
        }

        for text in &page.texts {
            show_text(&mut content, text);
        }

        // Centered page number footer.
        let footer = format!("Page {} of {}", i + 1, total);
        let footer_width = measure(&footer, FOOTER_SIZE, false);
        show_text(
            &mut content,
            &PlacedText {
                x: (PAGE_WIDTH - footer_width) / 2.0,
                y: FOOTER_BASELINE,
                size: FOOTER_SIZE,
                bold: false,
                text: footer,
            },
        );

        pdf.stream(content_ids[i], &content.finish());

        let mut page_writer = pdf.page(page_ids[i]);
        page_writer
            .media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT))
            .parent(page_tree_id)
            .contents(content_ids[i]);
        page_writer
            .resources()
            .fonts()
            .pair(Name(b"F1"), font_regular_id)
            .pair(Name(b"F2"), font_bold_id);
    }

    pdf.finish()
}

fn show_text(content: &mut Content, text: &PlacedText) {
    let font: &[u8] = if text.bold { b"F2" } else { b"F1" };
    content.begin_text();
    content.set_font(Name(font), text.size);
    content.next_line(text.x, text.y);
    content.show(Str(&to_winansi(&text.text)));
    content.end_text();
}

/// Greedy word wrap against the Times metrics. Words longer than the
/// available width are placed on their own line without hard breaks.
fn wrap(text: &str, max_width: f32, size: f32, bold: bool) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if measure(&candidate, size, bold) <= max_width || current.is_empty() {
            current = candidate;
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Approximate text width in points from the AFM advance widths.
fn measure(text: &str, size: f32, bold: bool) -> f32 {
    let total: u32 = text.chars().map(|c| char_width(c, bold) as u32).sum();
    total as f32 * size / 1000.0
}

fn char_width(c: char, bold: bool) -> u16 {
    let code = c as u32;
    if (0x20..=0x7E).contains(&code) {
        let idx = (code - 0x20) as usize;
        if bold {
            TIMES_BOLD_WIDTHS[idx]
        } else {
            TIMES_ROMAN_WIDTHS[idx]
        }
    } else {
        // Accented Latin and punctuation outside ASCII: a body-ish
        // default keeps the wrap estimate close enough.
        500
    }
}

/// Encode text as WinAnsi bytes. Unmappable characters degrade to '?'.
fn to_winansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            let code = c as u32;
            match c {
                '\u{2018}' => 0x91, // left single quote
                '\u{2019}' => 0x92, // right single quote
                '\u{201C}' => 0x93, // left double quote
                '\u{201D}' => 0x94, // right double quote
                '\u{2013}' => 0x96, // en dash
                '\u{2014}' => 0x97, // em dash
                '\u{2026}' => 0x85, // ellipsis
                '\u{2022}' => 0x95, // bullet
                _ if code <= 0x7F || (0xA0..=0xFF).contains(&code) => code as u8,
                _ => b'?',
            }
        })
        .collect()
}

/// Advance widths for Times-Roman, ASCII 0x20..=0x7E, in 1/1000 em.
const TIMES_ROMAN_WIDTHS: [u16; 95] = [
    250, 333, 408, 500, 500, 833, 778, 180, 333, 333, 500, 564, 250, 333, 250, 278, // 0x20-0x2F
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 278, 278, 564, 564, 564, 444, // 0x30-0x3F
    921, 722, 667, 667, 722, 611, 556, 722, 722, 333, 389, 722, 611, 889, 722, 722, // 0x40-0x4F
    556, 722, 667, 556, 611, 722, 722, 944, 722, 722, 611, 333, 278, 333, 469, 500, // 0x50-0x5F
    333, 444, 500, 444, 500, 444, 333, 500, 500, 278, 278, 500, 278, 778, 500, 500, // 0x60-0x6F
    500, 500, 333, 389, 278, 500, 500, 722, 500, 500, 444, 480, 200, 480, 541, // 0x70-0x7E
];

/// Advance widths for Times-Bold, ASCII 0x20..=0x7E, in 1/1000 em.
const TIMES_BOLD_WIDTHS: [u16; 95] = [
    250, 333, 555, 500, 500, 1000, 833, 278, 333, 333, 500, 570, 250, 333, 250, 278,
    500, 500, 500, 500, 500, 500, 500, 500, 500, 500, 333, 333, 570, 570, 570, 500,
    930, 722, 667, 722, 722, 667, 611, 778, 778, 389, 500, 778, 667, 944, 722, 778,
    611, 778, 722, 556, 667, 722, 722, 1000, 722, 722, 667, 333, 278, 333, 581, 500,
    333, 500, 556, 444, 556, 444, 333, 500, 556, 278, 333, 556, 278, 833, 556, 500,
    556, 556, 444, 389, 333, 556, 500, 722, 500, 500, 444, 394, 220, 394, 520,
];

#[cfg(test)]
mod tests {
    use super::*;

    fn default_pdf(input: &str) -> Vec<u8> {
        pdf_bytes(input, &ExportOptions::default()).unwrap()
    }

    fn contains(haystack: &[u8], needle: &str) -> bool {
        memchr::memmem::find(haystack, needle.as_bytes()).is_some()
    }

    #[test]
    fn test_pdf_header_and_fonts() {
        let bytes = default_pdf("Some text.{{fn: A note}}");
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, "Times-Roman"));
        assert!(contains(&bytes, "WinAnsiEncoding"));
    }

    #[test]
    fn test_bracketed_references() {
        let bytes = default_pdf("One.{{fn: first}} Two.{{fn: second}}");
        assert!(contains(&bytes, "One.[1] Two.[2]"));
        assert!(!contains(&bytes, "¹"));
    }

    #[test]
    fn test_footnote_block_rendered() {
        let bytes = default_pdf("Text.{{fn: Smith v. Jones}}");
        assert!(contains(&bytes, "1. Smith v. Jones"));
    }

    #[test]
    fn test_markup_stripped() {
        let bytes = default_pdf("This is **bold** and [linked](https://example.com).");
        assert!(contains(&bytes, "This is bold and linked."));
        assert!(!contains(&bytes, "example.com"));
    }

    #[test]
    fn test_page_footer() {
        let bytes = default_pdf("Short document.");
        assert!(contains(&bytes, "Page 1 of 1"));
    }

    #[test]
    fn test_long_document_paginates() {
        let paragraph = "Lorem ipsum dolor sit amet, consectetur adipiscing elit. ".repeat(8);
        let input = (0..40).map(|_| paragraph.clone()).collect::<Vec<_>>().join("\n");
        let bytes = pdf_bytes(&input, &ExportOptions::default()).unwrap();
        assert!(contains(&bytes, "Page 2 of"));
    }

    #[test]
    fn test_wrap_respects_width() {
        let lines = wrap("aaa bbb ccc ddd", 40.0, 12.0, false);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(measure(line, 12.0, false) <= 40.0 || !line.contains(' '));
        }
    }

    #[test]
    fn test_winansi_quotes() {
        assert_eq!(to_winansi("\u{201C}a\u{201D}"), vec![0x93, b'a', 0x94]);
        assert_eq!(to_winansi("\u{4E2D}"), vec![b'?']);
    }
}
