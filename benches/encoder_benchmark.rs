#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for output encoders (PNG, data URI).

use chart_uri::color::Rgba;
use chart_uri::framebuffer::Framebuffer;
use chart_uri::output::{DataUri, PngEncoder};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn gradient(width: u32, height: u32) -> Framebuffer {
    let mut fb = Framebuffer::new(width, height).expect("framebuffer creation should succeed");
    for y in 0..height {
        for x in 0..width {
            let r = ((x as f32 / width as f32) * 255.0) as u8;
            let g = ((y as f32 / height as f32) * 255.0) as u8;
            fb.set_pixel(x, y, Rgba::new(r, g, 128, 255));
        }
    }
    fb
}

fn png_encoder_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("png_encoder");

    for (width, height) in [(500, 300), (1000, 600), (2000, 1200)] {
        let fb = gradient(width, height);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{width}x{height}")),
            &(width, height),
            |b, _| {
                b.iter(|| PngEncoder::to_bytes(black_box(&fb)).expect("encoding should succeed"));
            },
        );
    }

    group.finish();
}

fn data_uri_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("data_uri");

    for (width, height) in [(1000, 600), (2000, 1200)] {
        let png = PngEncoder::to_bytes(&gradient(width, height)).expect("encoding should succeed");

        group.bench_with_input(
            BenchmarkId::new("encode", format!("{width}x{height}")),
            &png,
            |b, png| b.iter(|| DataUri::encode_png(black_box(png))),
        );

        let uri = DataUri::encode_png(&png);
        group.bench_with_input(
            BenchmarkId::new("decode", format!("{width}x{height}")),
            &uri,
            |b, uri| b.iter(|| DataUri::decode(black_box(uri)).expect("decoding should succeed")),
        );
    }

    group.finish();
}

criterion_group!(benches, png_encoder_benchmark, data_uri_benchmark);
criterion_main!(benches);
