//! citefix - citation marker to footnote converter

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use citefix::export::{
    Alignment, DocxExporter, ExportOptions, Exporter, HtmlExporter, OutputFormat, PdfExporter,
    TextExporter,
};
use citefix::{DEFAULT_WORD_LIMIT, check_word_limit, convert, count_words, decode_text};

#[derive(Parser)]
#[command(name = "citefix")]
#[command(version, about = "Convert {{fn: ...}} citation markers to numbered footnotes", long_about = None)]
#[command(after_help = "EXAMPLES:
    citefix brief.txt brief.docx    Convert to Word with native footnotes
    citefix brief.txt brief.pdf     Convert to PDF
    citefix --check brief.txt       Show word and footnote counts")]
struct Cli {
    /// Input text file (UTF-8 or Windows-1252)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output file (.docx, .pdf, .html, .txt, .md)
    #[arg(value_name = "OUTPUT", required_unless_present_any = ["check", "json"])]
    output: Option<PathBuf>,

    /// Show conversion statistics without writing anything
    #[arg(long)]
    check: bool,

    /// Dump the conversion result as JSON to stdout
    #[arg(long)]
    json: bool,

    /// Body font name (docx output)
    #[arg(long, default_value = "Times New Roman")]
    font: String,

    /// Body font size in points
    #[arg(long, default_value_t = 12.0)]
    font_size: f32,

    /// Line spacing multiple (1.0 = single)
    #[arg(long, default_value_t = 1.5)]
    line_spacing: f32,

    /// Paragraph alignment
    #[arg(long, value_enum, default_value_t = Alignment::Left)]
    align: Alignment,

    /// Maximum accepted document size in words (0 disables the limit)
    #[arg(long, default_value_t = DEFAULT_WORD_LIMIT)]
    max_words: usize,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), String> {
    let bytes = std::fs::read(&cli.input).map_err(|e| e.to_string())?;
    let text = decode_text(&bytes);

    if cli.check {
        let result = convert(&text);
        println!("File: {}", cli.input.display());
        println!("Words: {}", count_words(&text));
        println!("Footnotes: {}", result.footnote_count());
        if result.main_text.contains("{{fn:") {
            println!("Warning: unterminated {{{{fn: marker left as plain text");
        }
        return Ok(());
    }

    if cli.json {
        let result = convert(&text);
        let json = serde_json::to_string_pretty(&result).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let words = check_word_limit(&text, cli.max_words).map_err(|e| e.to_string())?;

    let output = cli
        .output
        .as_ref()
        .ok_or_else(|| String::from("no output file given"))?;
    let format = OutputFormat::from_path(output).map_err(|e| e.to_string())?;
    let options = ExportOptions {
        font: cli.font.clone(),
        font_size: cli.font_size,
        line_spacing: cli.line_spacing,
        alignment: cli.align,
    };

    let mut file = std::fs::File::create(output).map_err(|e| e.to_string())?;
    match format {
        OutputFormat::Docx => DocxExporter::with_options(options).export(&text, &mut file),
        OutputFormat::Pdf => PdfExporter::with_options(options).export(&text, &mut file),
        OutputFormat::Html => HtmlExporter::new().export(&text, &mut file),
        OutputFormat::Text => TextExporter::new().export(&text, &mut file),
    }
    .map_err(|e| e.to_string())?;

    if !cli.quiet {
        let footnotes = convert(&text).footnote_count();
        println!(
            "Converted {} words, {} footnotes -> {}",
            words,
            footnotes,
            output.display()
        );
    }

    Ok(())
}
