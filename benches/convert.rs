//! Benchmarks for the conversion pipeline.
//!
//! Run with: cargo bench

use std::io::Cursor;

use criterion::{Criterion, criterion_group, criterion_main};

use citefix::convert;
use citefix::export::{DocxExporter, ExportOptions, Exporter, PdfExporter, render_html};

/// Build a synthetic brief: `paragraphs` paragraphs, one citation each.
fn sample_document(paragraphs: usize) -> String {
    let mut text = String::from("# Argument\n\n");
    for i in 0..paragraphs {
        text.push_str(&format!(
            "The record supports reversal on point {i}, as the court below \
             acknowledged in its oral ruling.{{{{fn: Smith v. Jones, {} U.S. {} ({})}}}} \
             See also [the docket](https://example.com/docket/{i}).\n\n",
            100 + i,
            400 + i,
            1980 + (i % 40),
        ));
    }
    text
}

fn bench_convert(c: &mut Criterion) {
    let small = sample_document(10);
    let large = sample_document(500);

    c.bench_function("convert_small", |b| {
        b.iter(|| convert(&small));
    });
    c.bench_function("convert_large", |b| {
        b.iter(|| convert(&large));
    });
}

fn bench_write_docx(c: &mut Criterion) {
    let text = sample_document(100);

    c.bench_function("write_docx", |b| {
        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            DocxExporter::with_options(ExportOptions::default())
                .export(&text, &mut output)
                .unwrap();
        });
    });
}

fn bench_write_pdf(c: &mut Criterion) {
    let text = sample_document(100);

    c.bench_function("write_pdf", |b| {
        b.iter(|| {
            let mut output = Cursor::new(Vec::new());
            PdfExporter::with_options(ExportOptions::default())
                .export(&text, &mut output)
                .unwrap();
        });
    });
}

fn bench_render_html(c: &mut Criterion) {
    let text = sample_document(100);

    c.bench_function("render_html", |b| {
        b.iter(|| render_html(&text));
    });
}

criterion_group!(
    benches,
    bench_convert,
    bench_write_docx,
    bench_write_pdf,
    bench_render_html,
);
criterion_main!(benches);
