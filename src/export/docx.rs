//! Word (.docx) exporter.
//!
//! Walks the segment sequence, emitting plain runs for text segments
//! and native `w:footnoteReference` runs for footnote segments;
//! citation bodies populate `word/footnotes.xml` keyed by footnote
//! number. Markdown-style links become external hyperlink
//! relationships in both the document and the footnotes part.
//!
//! The package is written as a zip of static boilerplate parts plus
//! generated XML, with all user content escaped through
//! [`quick_xml::escape`].

use std::io::{Cursor, Seek, Write};
use std::path::Path;

use quick_xml::escape::escape;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::convert::{ConversionResult, Segment, convert};
use crate::error::Result;
use crate::inline::{InlineToken, parse_heading, tokenize};

use super::{Alignment, ExportOptions, Exporter};

/// Exporter producing a Word document with native footnotes.
#[derive(Debug, Clone, Default)]
pub struct DocxExporter {
    options: ExportOptions,
}

impl DocxExporter {
    /// Create a new exporter with default formatting options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an exporter with the specified formatting options.
    pub fn with_options(options: ExportOptions) -> Self {
        Self { options }
    }
}

impl Exporter for DocxExporter {
    fn export<W: Write + Seek>(&self, raw_text: &str, writer: &mut W) -> Result<()> {
        let result = convert(raw_text);
        write_package(&result, &self.options, writer)
    }
}

/// Convert `raw_text` and write a .docx file to disk.
pub fn write_docx<P: AsRef<Path>>(raw_text: &str, options: &ExportOptions, path: P) -> Result<()> {
    let mut file = std::fs::File::create(path)?;
    DocxExporter::with_options(options.clone()).export(raw_text, &mut file)
}

/// Convert `raw_text` and return the .docx bytes.
pub fn docx_bytes(raw_text: &str, options: &ExportOptions) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    DocxExporter::with_options(options.clone()).export(raw_text, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// External hyperlink relationship collected while generating a part.
struct HyperlinkRel {
    rid: String,
    url: String,
}

fn write_package<W: Write + Seek>(
    result: &ConversionResult,
    options: &ExportOptions,
    writer: &mut W,
) -> Result<()> {
    let mut doc_links: Vec<HyperlinkRel> = Vec::new();
    let mut note_links: Vec<HyperlinkRel> = Vec::new();

    let document = generate_document(result, options, &mut doc_links);
    let footnotes = generate_footnotes(result, options, &mut note_links);

    let mut zip = ZipWriter::new(writer);
    let deflate = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    zip.start_file("[Content_Types].xml", deflate)?;
    zip.write_all(CONTENT_TYPES_XML.as_bytes())?;

    zip.start_file("_rels/.rels", deflate)?;
    zip.write_all(ROOT_RELS_XML.as_bytes())?;

    zip.start_file("word/document.xml", deflate)?;
    zip.write_all(document.as_bytes())?;

    zip.start_file("word/footnotes.xml", deflate)?;
    zip.write_all(footnotes.as_bytes())?;

    zip.start_file("word/styles.xml", deflate)?;
    zip.write_all(generate_styles(options).as_bytes())?;

    zip.start_file("word/settings.xml", deflate)?;
    zip.write_all(SETTINGS_XML.as_bytes())?;

    zip.start_file("word/footer1.xml", deflate)?;
    zip.write_all(generate_footer(options).as_bytes())?;

    zip.start_file("word/_rels/document.xml.rels", deflate)?;
    zip.write_all(generate_document_rels(&doc_links).as_bytes())?;

    if !note_links.is_empty() {
        zip.start_file("word/_rels/footnotes.xml.rels", deflate)?;
        zip.write_all(generate_footnotes_rels(&note_links).as_bytes())?;
    }

    zip.finish()?;
    Ok(())
}

const XML_HEADER: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const R_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

const CONTENT_TYPES_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
    "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
    "<Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    "<Override PartName=\"/word/document.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml\"/>",
    "<Override PartName=\"/word/footnotes.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.footnotes+xml\"/>",
    "<Override PartName=\"/word/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml\"/>",
    "<Override PartName=\"/word/settings.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml\"/>",
    "<Override PartName=\"/word/footer1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml\"/>",
    "</Types>"
);

const ROOT_RELS_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"word/document.xml\"/>",
    "</Relationships>"
);

const SETTINGS_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<w:settings xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">",
    "<w:footnotePr><w:footnote w:id=\"-1\"/><w:footnote w:id=\"0\"/></w:footnotePr>",
    "</w:settings>"
);

// Fixed relationship ids for the static parts; hyperlinks are
// allocated from rId5 upward.
const RID_STYLES: &str = "rId1";
const RID_SETTINGS: &str = "rId2";
const RID_FOOTNOTES: &str = "rId3";
const RID_FOOTER: &str = "rId4";
const FIRST_HYPERLINK_RID: usize = 5;

/// Run-level formatting accumulated from inline tokens and heading
/// styling.
#[derive(Debug, Clone, Copy, Default)]
struct RunProps {
    bold: bool,
    italic: bool,
    underline: bool,
    small_caps: bool,
    all_caps: bool,
}

fn alignment_value(alignment: Alignment) -> &'static str {
    match alignment {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        // OOXML calls full justification "both".
        Alignment::Justify => "both",
    }
}

fn half_points(size: f32) -> u32 {
    (size * 2.0).round() as u32
}

/// Collects runs for the paragraph currently being built.
struct ParagraphBuilder {
    runs: String,
    heading: Option<u8>,
    has_content: bool,
}

impl ParagraphBuilder {
    fn new() -> Self {
        Self {
            runs: String::new(),
            heading: None,
            has_content: false,
        }
    }

    fn flush_into(&mut self, body: &mut String, options: &ExportOptions) {
        body.push_str("<w:p><w:pPr>");
        match self.heading {
            Some(2) => {
                body.push_str("<w:ind w:left=\"720\"/>");
                body.push_str(HEADING_BORDER);
            }
            Some(_) => body.push_str(HEADING_BORDER),
            None => {}
        }
        body.push_str(&format!(
            "<w:jc w:val=\"{}\"/>",
            alignment_value(options.alignment)
        ));
        body.push_str(&format!(
            "<w:spacing w:after=\"200\" w:line=\"{}\" w:lineRule=\"auto\"/>",
            (options.line_spacing * 240.0).round() as u32
        ));
        body.push_str("</w:pPr>");
        body.push_str(&self.runs);
        body.push_str("</w:p>");

        self.runs.clear();
        self.heading = None;
        self.has_content = false;
    }
}

const HEADING_BORDER: &str =
    "<w:pBdr><w:bottom w:val=\"single\" w:sz=\"6\" w:space=\"1\" w:color=\"auto\"/></w:pBdr>";

fn run_properties(props: RunProps, options: &ExportOptions) -> String {
    let mut rpr = String::from("<w:rPr>");
    let font = escape(options.font.as_str());
    rpr.push_str(&format!(
        "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>"
    ));
    if props.bold {
        rpr.push_str("<w:b/>");
    }
    if props.italic {
        rpr.push_str("<w:i/>");
    }
    if props.small_caps {
        rpr.push_str("<w:smallCaps/>");
    }
    if props.all_caps {
        rpr.push_str("<w:caps/>");
    }
    if props.underline {
        rpr.push_str("<w:u w:val=\"single\"/>");
    }
    rpr.push_str(&format!(
        "<w:sz w:val=\"{}\"/>",
        half_points(options.font_size)
    ));
    rpr.push_str("</w:rPr>");
    rpr
}

fn text_run(text: &str, props: RunProps, options: &ExportOptions) -> String {
    format!(
        "<w:r>{}<w:t xml:space=\"preserve\">{}</w:t></w:r>",
        run_properties(props, options),
        escape(text)
    )
}

fn hyperlink_run(
    label: &str,
    url: &str,
    base: RunProps,
    options: &ExportOptions,
    links: &mut Vec<HyperlinkRel>,
    rid_offset: usize,
) -> String {
    let rid = format!("rId{}", rid_offset + links.len());
    let run = format!(
        "<w:hyperlink r:id=\"{rid}\" w:history=\"1\">\
         <w:r><w:rPr><w:rStyle w:val=\"Hyperlink\"/>\
         <w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>\
         {bold}<w:sz w:val=\"{sz}\"/></w:rPr>\
         <w:t xml:space=\"preserve\">{label}</w:t></w:r></w:hyperlink>",
        font = escape(options.font.as_str()),
        bold = if base.bold { "<w:b/>" } else { "" },
        sz = half_points(options.font_size),
        label = escape(label),
    );
    links.push(HyperlinkRel {
        rid,
        url: url.to_string(),
    });
    run
}

fn footnote_ref_run(number: usize) -> String {
    format!(
        "<w:r><w:rPr><w:rStyle w:val=\"FootnoteReference\"/></w:rPr>\
         <w:footnoteReference w:id=\"{number}\"/></w:r>"
    )
}

/// Append inline-formatted runs for one slice of line text.
fn append_inline_runs(
    out: &mut String,
    text: &str,
    base: RunProps,
    options: &ExportOptions,
    links: &mut Vec<HyperlinkRel>,
    rid_offset: usize,
) {
    for token in tokenize(text) {
        match token {
            InlineToken::Text(s) | InlineToken::FootnoteRun(s) => {
                // Stray superscript glyphs typed by the user pass
                // through as literal text; real references arrive as
                // footnote segments, never through this path.
                out.push_str(&text_run(s, base, options));
            }
            InlineToken::Bold(s) => {
                out.push_str(&text_run(s, RunProps { bold: true, ..base }, options));
            }
            InlineToken::Italic(s) => {
                out.push_str(&text_run(s, RunProps { italic: true, ..base }, options));
            }
            InlineToken::Underline(s) => {
                out.push_str(&text_run(
                    s,
                    RunProps {
                        underline: true,
                        ..base
                    },
                    options,
                ));
            }
            InlineToken::SmallCaps(s) => {
                out.push_str(&text_run(
                    s,
                    RunProps {
                        small_caps: true,
                        ..base
                    },
                    options,
                ));
            }
            InlineToken::Link { label, url } => {
                out.push_str(&hyperlink_run(label, url, base, options, links, rid_offset));
            }
        }
    }
}

fn generate_document(
    result: &ConversionResult,
    options: &ExportOptions,
    links: &mut Vec<HyperlinkRel>,
) -> String {
    let mut body = String::new();
    let mut para = ParagraphBuilder::new();

    for segment in &result.segments {
        match segment {
            Segment::Footnote { number, .. } => {
                para.runs.push_str(&footnote_ref_run(*number));
                para.has_content = true;
            }
            Segment::Text { content } => {
                for (j, line) in content.split('\n').enumerate() {
                    if j > 0 {
                        para.flush_into(&mut body, options);
                    }
                    let mut text = line;
                    let mut base = RunProps::default();
                    // Heading prefixes only count at the start of a
                    // fresh paragraph.
                    if !para.has_content && para.runs.is_empty() {
                        if let Some((level, rest)) = parse_heading(line) {
                            para.heading = Some(level);
                            text = rest;
                            base.bold = true;
                            base.all_caps = level == 1;
                        }
                    }
                    if !text.is_empty() {
                        append_inline_runs(
                            &mut para.runs,
                            text,
                            base,
                            options,
                            links,
                            FIRST_HYPERLINK_RID,
                        );
                        para.has_content = true;
                    }
                }
            }
        }
    }
    // Final paragraph; an empty document still gets one empty paragraph.
    para.flush_into(&mut body, options);

    format!(
        "{XML_HEADER}<w:document xmlns:w=\"{W_NS}\" xmlns:r=\"{R_NS}\">\
         <w:body>{body}\
         <w:sectPr>\
         <w:footerReference w:type=\"default\" r:id=\"{RID_FOOTER}\"/>\
         <w:pgSz w:w=\"11906\" w:h=\"16838\"/>\
         <w:pgMar w:top=\"1440\" w:right=\"1440\" w:bottom=\"1440\" w:left=\"1440\" \
w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\
         </w:sectPr>\
         </w:body></w:document>"
    )
}

fn generate_footnotes(
    result: &ConversionResult,
    options: &ExportOptions,
    links: &mut Vec<HyperlinkRel>,
) -> String {
    let mut xml = format!(
        "{XML_HEADER}<w:footnotes xmlns:w=\"{W_NS}\" xmlns:r=\"{R_NS}\">\
         <w:footnote w:type=\"separator\" w:id=\"-1\">\
         <w:p><w:pPr><w:spacing w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr>\
         <w:r><w:separator/></w:r></w:p></w:footnote>\
         <w:footnote w:type=\"continuationSeparator\" w:id=\"0\">\
         <w:p><w:pPr><w:spacing w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr>\
         <w:r><w:continuationSeparator/></w:r></w:p></w:footnote>"
    );

    for (i, citation) in result.footnotes.iter().enumerate() {
        let number = i + 1;
        xml.push_str(&format!(
            "<w:footnote w:id=\"{number}\">\
             <w:p><w:pPr><w:pStyle w:val=\"FootnoteText\"/></w:pPr>\
             <w:r><w:rPr><w:rStyle w:val=\"FootnoteReference\"/></w:rPr><w:footnoteRef/></w:r>\
             <w:r><w:t xml:space=\"preserve\"> </w:t></w:r>"
        ));
        append_inline_runs(
            &mut xml,
            citation,
            RunProps::default(),
            options,
            links,
            FIRST_HYPERLINK_RID,
        );
        xml.push_str("</w:p></w:footnote>");
    }

    xml.push_str("</w:footnotes>");
    xml
}

fn generate_styles(options: &ExportOptions) -> String {
    let font = escape(options.font.as_str());
    let sz = half_points(options.font_size);
    let footnote_sz = half_points((options.font_size - 2.0).max(2.0));
    format!(
        "{XML_HEADER}<w:styles xmlns:w=\"{W_NS}\">\
         <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">\
         <w:name w:val=\"Normal\"/>\
         <w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/>\
         <w:sz w:val=\"{sz}\"/></w:rPr></w:style>\
         <w:style w:type=\"paragraph\" w:styleId=\"FootnoteText\">\
         <w:name w:val=\"footnote text\"/><w:basedOn w:val=\"Normal\"/>\
         <w:rPr><w:sz w:val=\"{footnote_sz}\"/></w:rPr></w:style>\
         <w:style w:type=\"character\" w:styleId=\"FootnoteReference\">\
         <w:name w:val=\"footnote reference\"/>\
         <w:rPr><w:vertAlign w:val=\"superscript\"/></w:rPr></w:style>\
         <w:style w:type=\"character\" w:styleId=\"Hyperlink\">\
         <w:name w:val=\"Hyperlink\"/>\
         <w:rPr><w:color w:val=\"0563C1\"/><w:u w:val=\"single\"/></w:rPr></w:style>\
         </w:styles>"
    )
}

fn generate_footer(options: &ExportOptions) -> String {
    let font = escape(options.font.as_str());
    // 10pt footer text, matching the original export.
    format!(
        "{XML_HEADER}<w:ftr xmlns:w=\"{W_NS}\">\
         <w:p><w:pPr><w:jc w:val=\"center\"/></w:pPr>\
         <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"20\"/></w:rPr>\
         <w:t xml:space=\"preserve\">Page </w:t></w:r>\
         <w:fldSimple w:instr=\" PAGE \"><w:r><w:t>1</w:t></w:r></w:fldSimple>\
         <w:r><w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\"/><w:sz w:val=\"20\"/></w:rPr>\
         <w:t xml:space=\"preserve\"> of </w:t></w:r>\
         <w:fldSimple w:instr=\" NUMPAGES \"><w:r><w:t>1</w:t></w:r></w:fldSimple>\
         </w:p></w:ftr>"
    )
}

fn generate_document_rels(links: &[HyperlinkRel]) -> String {
    let mut xml = format!(
        "{XML_HEADER}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">\
         <Relationship Id=\"{RID_STYLES}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>\
         <Relationship Id=\"{RID_SETTINGS}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings\" Target=\"settings.xml\"/>\
         <Relationship Id=\"{RID_FOOTNOTES}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/footnotes\" Target=\"footnotes.xml\"/>\
         <Relationship Id=\"{RID_FOOTER}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer\" Target=\"footer1.xml\"/>"
    );
    append_hyperlink_rels(&mut xml, links);
    xml.push_str("</Relationships>");
    xml
}

fn generate_footnotes_rels(links: &[HyperlinkRel]) -> String {
    let mut xml = format!(
        "{XML_HEADER}<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">"
    );
    append_hyperlink_rels(&mut xml, links);
    xml.push_str("</Relationships>");
    xml
}

fn append_hyperlink_rels(xml: &mut String, links: &[HyperlinkRel]) {
    for link in links {
        xml.push_str(&format!(
            "<Relationship Id=\"{}\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink\" Target=\"{}\" TargetMode=\"External\"/>",
            link.rid,
            escape(link.url.as_str())
        ));
    }
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    fn read_part(bytes: &[u8], name: &str) -> String {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).expect("valid zip");
        let mut part = archive.by_name(name).expect("part exists");
        let mut content = String::new();
        part.read_to_string(&mut content).expect("valid utf-8");
        content
    }

    #[test]
    fn test_package_parts_present() {
        let bytes = docx_bytes("Hello.{{fn: A note}}", &ExportOptions::default()).unwrap();
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes.as_slice())).unwrap();
        for name in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/footnotes.xml",
            "word/styles.xml",
            "word/settings.xml",
            "word/footer1.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(archive.by_name(name).is_ok(), "missing part: {name}");
        }
    }

    #[test]
    fn test_footnote_reference_and_body() {
        let bytes = docx_bytes("Hello.{{fn: Smith, 2020}} Bye.", &ExportOptions::default()).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        let footnotes = read_part(&bytes, "word/footnotes.xml");

        assert!(document.contains("<w:footnoteReference w:id=\"1\"/>"));
        assert!(!document.contains("Smith, 2020"));
        assert!(footnotes.contains("Smith, 2020"));
        assert!(footnotes.contains("<w:footnote w:id=\"1\">"));
    }

    #[test]
    fn test_user_content_is_escaped() {
        let bytes = docx_bytes(
            "Less < more & so on.{{fn: AT&T v. <nobody>}}",
            &ExportOptions::default(),
        )
        .unwrap();
        let document = read_part(&bytes, "word/document.xml");
        let footnotes = read_part(&bytes, "word/footnotes.xml");

        assert!(document.contains("Less &lt; more &amp; so on."));
        assert!(footnotes.contains("AT&amp;T v. &lt;nobody&gt;"));
    }

    #[test]
    fn test_hyperlink_relationships() {
        let bytes = docx_bytes(
            "See [LII](https://law.cornell.edu).{{fn: Also [archive](https://example.org/a?b=1&c=2)}}",
            &ExportOptions::default(),
        )
        .unwrap();
        let document = read_part(&bytes, "word/document.xml");
        let doc_rels = read_part(&bytes, "word/_rels/document.xml.rels");
        let note_rels = read_part(&bytes, "word/_rels/footnotes.xml.rels");

        assert!(document.contains("<w:hyperlink r:id=\"rId5\""));
        assert!(doc_rels.contains("Target=\"https://law.cornell.edu\""));
        assert!(note_rels.contains("Target=\"https://example.org/a?b=1&amp;c=2\""));
    }

    #[test]
    fn test_heading_styling() {
        let bytes = docx_bytes("# Argument\nBody text.", &ExportOptions::default()).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains("<w:caps/>"));
        assert!(document.contains("<w:pBdr>"));
        // The prefix itself never reaches the output.
        assert!(!document.contains("# Argument"));
        assert!(document.contains(">Argument</w:t>"));
    }

    #[test]
    fn test_options_applied() {
        let options = ExportOptions {
            font: "Garamond".to_string(),
            font_size: 11.0,
            line_spacing: 2.0,
            alignment: Alignment::Justify,
        };
        let bytes = docx_bytes("Some text.", &options).unwrap();
        let document = read_part(&bytes, "word/document.xml");

        assert!(document.contains("w:ascii=\"Garamond\""));
        assert!(document.contains("<w:sz w:val=\"22\"/>"));
        assert!(document.contains("<w:jc w:val=\"both\"/>"));
        assert!(document.contains("w:line=\"480\""));
    }

    #[test]
    fn test_empty_input_still_valid_package() {
        let bytes = docx_bytes("", &ExportOptions::default()).unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:p>"));
    }

    #[test]
    fn test_inline_emphasis_runs() {
        let bytes = docx_bytes(
            "**bold** and *italic* and <u>under</u> and ^^caps^^",
            &ExportOptions::default(),
        )
        .unwrap();
        let document = read_part(&bytes, "word/document.xml");
        assert!(document.contains("<w:b/>"));
        assert!(document.contains("<w:i/>"));
        assert!(document.contains("<w:u w:val=\"single\"/>"));
        assert!(document.contains("<w:smallCaps/>"));
    }
}
