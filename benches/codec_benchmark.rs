//! Benchmarks for modality import and export.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic definitions of increasing size.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use modality::model::{DocumentModel, MarkdownHeading, TableHeading, TablePreset};
use modality::{codec, render, JsonFormat, RenderOptions};

/// Creates a synthetic definition with the given number of headings.
fn create_test_document(heading_count: usize) -> DocumentModel {
    let mut doc = DocumentModel::new();
    doc.meta.id = "bench".to_string();
    doc.meta.title = "Benchmark modality".to_string();

    // Numbers in reverse so export has to reorder them
    for i in (0..heading_count).rev() {
        let number = format!("{}.{}", i / 10 + 1, i % 10 + 1);
        if i % 5 == 0 {
            let mut heading = TableHeading::new(TablePreset::Conversion);
            heading.number = number;
            heading.title = format!("Table {}", i);
            for _ in 0..5 {
                heading.table.add_row();
            }
            doc.table_headings.push(heading);
        } else {
            doc.markdown_headings.push(MarkdownHeading::new(
                number,
                format!("Heading {}", i),
                "Benchmark content for modality encode and decode measurement.",
            ));
        }
    }

    doc
}

/// Benchmark encoding to JSON at various sizes.
fn bench_export(c: &mut Criterion) {
    let mut group = c.benchmark_group("export");

    for heading_count in [10, 100, 1000].iter() {
        let doc = create_test_document(*heading_count);

        group.bench_function(format!("{}_headings", heading_count), |b| {
            b.iter(|| render::to_json_bytes(black_box(&doc), JsonFormat::Pretty).unwrap());
        });
    }

    group.finish();
}

/// Benchmark decoding from JSON at various sizes.
fn bench_import(c: &mut Criterion) {
    let mut group = c.benchmark_group("import");

    for heading_count in [10, 100, 1000].iter() {
        let doc = create_test_document(*heading_count);
        let data = render::to_json_bytes(&doc, JsonFormat::Compact).unwrap();

        group.bench_function(format!("{}_headings", heading_count), |b| {
            b.iter(|| codec::decode_bytes(black_box(&data)).unwrap());
        });
    }

    group.finish();
}

/// Benchmark Markdown review rendering.
fn bench_review(c: &mut Criterion) {
    let doc = create_test_document(100);
    let options = RenderOptions::default();

    c.bench_function("review_100_headings", |b| {
        b.iter(|| render::to_markdown(black_box(&doc), &options).unwrap());
    });
}

criterion_group!(benches, bench_export, bench_import, bench_review);
criterion_main!(benches);
