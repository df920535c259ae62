//! Benchmarks for image preprocessing performance.
//!
//! Run with: cargo bench
//!
//! Binarization runs once per page before recognition, so its cost
//! scales with page count and DPI.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{DynamicImage, Rgb, RgbImage};
use pdfocr::preprocess::binarize;

/// Creates a synthetic scanned page: noisy light background with dark
/// horizontal "text" strokes.
fn create_test_page(width: u32, height: u32) -> DynamicImage {
    let mut img = RgbImage::new(width, height);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        // Deterministic speckle so runs are comparable
        let noise = ((x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17))) % 23) as u8;
        let in_stroke = y % 40 > 12 && y % 40 < 18 && x % 200 > 10 && x % 200 < 180;
        *pixel = if in_stroke {
            Rgb([25 + noise, 25 + noise, 30 + noise])
        } else {
            Rgb([215 + noise, 210 + noise, 205 + noise])
        };
    }
    DynamicImage::ImageRgb8(img)
}

fn bench_binarize(c: &mut Criterion) {
    let small = create_test_page(620, 877); // ~A4 at 75 dpi
    let large = create_test_page(2480, 3508); // A4 at 300 dpi

    c.bench_function("binarize_75dpi_page", |b| {
        b.iter(|| binarize(black_box(&small)))
    });

    c.bench_function("binarize_300dpi_page", |b| {
        b.iter(|| binarize(black_box(&large)))
    });
}

criterion_group!(benches, bench_binarize);
criterion_main!(benches);
