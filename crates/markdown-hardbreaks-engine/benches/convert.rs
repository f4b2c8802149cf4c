use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use markdown_hardbreaks_engine::{
    Document, HardBreakFormat, convert_document, normalize_line,
    parsing::parse_document,
};
mod common;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.sample_size(20);

    let doc = Document::new(&common::generate_prose(100));
    group.bench_function("parse_document", |b| {
        b.iter(|| black_box(parse_document(black_box(&doc))));
    });

    group.finish();
}

fn bench_convert(c: &mut Criterion) {
    let mut group = c.benchmark_group("convert");
    group.sample_size(20);

    let prose = Document::new(&common::generate_prose(100));
    group.bench_function("mixed_document", |b| {
        b.iter(|| black_box(convert_document(black_box(&prose), HardBreakFormat::DoubleSpace)));
    });

    // Mostly already-converted input: the common case for a second run.
    let converted = Document::new(&common::generate_converted(500));
    group.bench_function("already_converted", |b| {
        b.iter(|| black_box(convert_document(black_box(&converted), HardBreakFormat::Backslash)));
    });

    group.finish();
}

fn bench_normalize_line(c: &mut Criterion) {
    c.bench_function("normalize_line", |b| {
        b.iter(|| {
            black_box(normalize_line(
                black_box("a typical line of prose with an escaped \\\\"),
                HardBreakFormat::Backslash,
            ))
        });
    });
}

criterion_group!(benches, bench_parse, bench_convert, bench_normalize_line);
criterion_main!(benches);
