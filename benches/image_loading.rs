// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use image_rs::{Rgba, RgbaImage};
use std::hint::black_box;
use yf_image_deck::media;

fn image_loading_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("image_loading");

    // Generate a photo-sized PNG once so the benchmark needs no fixtures.
    let temp_dir = tempfile::tempdir().expect("failed to create temp dir");
    let image_path = temp_dir.path().join("sample.png");
    RgbaImage::from_fn(1024, 768, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, 128, 255]))
        .save(&image_path)
        .expect("failed to write sample png");

    group.bench_function("load_sample_png", |b| {
        b.iter(|| {
            let _ = black_box(media::load_image(&image_path));
        });
    });

    group.finish();
}

criterion_group!(benches, image_loading_benchmark);
criterion_main!(benches);
