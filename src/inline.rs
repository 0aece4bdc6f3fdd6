//! Inline formatting tokenizer shared by the renderers.
//!
//! The scanner itself knows nothing about inline formatting; it is the
//! renderers that interpret emphasis markers, links, heading prefixes,
//! and the superscript runs produced by conversion. This module gives
//! them one tokenizer over rendered text so that the DOCX and HTML
//! exporters agree on what a token is:
//!
//! - `**bold**`, `*italic*`, `<u>underline</u>`, `^^small caps^^`
//! - `[label](url)` markdown-style links
//! - runs of superscript digit glyphs (footnote references)
//! - `# ` / `## ` heading prefixes at line start
//!
//! Tokens never nest: the alternation matches left to right, shortest
//! first, exactly like the original split-regex behavior.

use std::sync::LazyLock;

use regex::Regex;

/// Alternation of every inline token class. Order matters: bold must
/// precede italic so `**x**` is not consumed as two italics.
static INLINE_TOKENS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(\*\*.*?\*\*)",
        r"|(\*.*?\*)",
        r"|(<u>.*?</u>)",
        r"|(\^\^.*?\^\^)",
        r"|([\u{2070}\u{00B9}\u{00B2}\u{00B3}\u{2074}-\u{2079}]+)",
        r"|(\[.*?\]\(.*?\))",
    ))
    .expect("inline token regex is valid")
});

/// One inline token. Borrowed slices point into the tokenized line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineToken<'a> {
    /// Plain text between formatted spans.
    Text(&'a str),
    Bold(&'a str),
    Italic(&'a str),
    Underline(&'a str),
    SmallCaps(&'a str),
    Link { label: &'a str, url: &'a str },
    /// A run of superscript digit glyphs, as emitted into annotated
    /// main text. Renderers assign reference numbers sequentially.
    FootnoteRun(&'a str),
}

/// Split a line of rendered text into inline tokens.
pub fn tokenize(text: &str) -> Vec<InlineToken<'_>> {
    let mut tokens = Vec::new();
    let mut last = 0;

    for m in INLINE_TOKENS.find_iter(text) {
        if m.start() > last {
            tokens.push(InlineToken::Text(&text[last..m.start()]));
        }
        tokens.push(classify(m.as_str()));
        last = m.end();
    }
    if last < text.len() {
        tokens.push(InlineToken::Text(&text[last..]));
    }

    tokens
}

fn classify(span: &str) -> InlineToken<'_> {
    if let Some(inner) = span.strip_prefix("**").and_then(|s| s.strip_suffix("**")) {
        return InlineToken::Bold(inner);
    }
    if let Some(inner) = span.strip_prefix("<u>").and_then(|s| s.strip_suffix("</u>")) {
        return InlineToken::Underline(inner);
    }
    if let Some(inner) = span.strip_prefix("^^").and_then(|s| s.strip_suffix("^^")) {
        return InlineToken::SmallCaps(inner);
    }
    if span.starts_with('[') {
        if let Some((label, url)) = split_link(span) {
            return InlineToken::Link { label, url };
        }
    }
    if let Some(inner) = span.strip_prefix('*').and_then(|s| s.strip_suffix('*')) {
        return InlineToken::Italic(inner);
    }
    InlineToken::FootnoteRun(span)
}

/// Split `[label](url)` into its parts. Returns `None` if the span is
/// not actually a link (the tokenizer guarantees it is).
fn split_link(span: &str) -> Option<(&str, &str)> {
    let inner = span.strip_prefix('[')?.strip_suffix(')')?;
    let mid = inner.find("](")?;
    Some((&inner[..mid], &inner[mid + 2..]))
}

/// Heading level and remaining text for a line, if it carries a
/// heading prefix. Only levels 1 and 2 are recognized; deeper
/// prefixes pass through as plain text.
pub fn parse_heading(line: &str) -> Option<(u8, &str)> {
    if let Some(rest) = line.strip_prefix("## ") {
        Some((2, rest))
    } else {
        line.strip_prefix("# ").map(|rest| (1, rest))
    }
}

/// Remove inline markup from a line, keeping visible text only: bold,
/// italic, underline, and small-caps delimiters are dropped, links
/// collapse to their label. Superscript runs are left untouched.
pub fn strip_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in tokenize(text) {
        match token {
            InlineToken::Text(s)
            | InlineToken::Bold(s)
            | InlineToken::Italic(s)
            | InlineToken::Underline(s)
            | InlineToken::SmallCaps(s)
            | InlineToken::FootnoteRun(s) => out.push_str(s),
            InlineToken::Link { label, .. } => out.push_str(label),
        }
    }
    out
}
