//! Benchmarks for the art decoder.
//!
//! Run with: cargo bench -p dosart-parse

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dosart_parse::parse;
use std::hint::black_box;

/// Synthetic newline-delimited art: colored block rows with SGR churn.
fn synthetic_ansi(rows: usize, cols: usize) -> Vec<u8> {
    let mut bytes = Vec::new();
    for row in 0..rows {
        for col in 0..cols {
            if col % 8 == 0 {
                let fg = 31 + ((row + col) % 7);
                bytes.extend_from_slice(format!("\x1b[1;{fg}m").as_bytes());
            }
            bytes.push(match col % 4 {
                0 => 219,
                1 => 176,
                2 => 177,
                _ => 178,
            });
        }
        bytes.push(b'\n');
    }
    bytes
}

/// Fixed-width raw dump: no line feeds, forced 80-column rows.
fn synthetic_fixed_width(len: usize) -> Vec<u8> {
    (0..len).map(|i| if i % 3 == 0 { 219 } else { 177 }).collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for (rows, cols) in [(25, 80), (100, 80), (500, 80)] {
        let bytes = synthetic_ansi(rows, cols);
        group.bench_with_input(
            BenchmarkId::new("ansi", format!("{rows}x{cols}")),
            &bytes,
            |b, bytes| b.iter(|| black_box(parse(bytes))),
        );
    }

    for len in [2_000, 16_000, 64_000] {
        let bytes = synthetic_fixed_width(len);
        group.bench_with_input(
            BenchmarkId::new("fixed_width", len),
            &bytes,
            |b, bytes| b.iter(|| black_box(parse(bytes))),
        );
    }

    group.finish();
}

fn bench_content_end(c: &mut Criterion) {
    let mut bytes = synthetic_fixed_width(64_000);
    bytes.extend_from_slice(b"SAUCE00");
    bytes.extend_from_slice(&[0u8; 121]);

    c.bench_function("content_end/64k_with_trailer", |b| {
        b.iter(|| black_box(dosart_parse::content_end(&bytes)))
    });
}

criterion_group!(benches, bench_parse, bench_content_end);
criterion_main!(benches);
