//! Geometry benchmarks
//!
//! The quad builder runs once per animation frame on the render path, so it
//! should stay trivially cheap at common surface sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use louver_core::Size;
use louver_mask::geometry::{band_boundaries, build_region_quads};

fn benchmark_quad_builder(c: &mut Criterion) {
    let surface = Size::new(1920.0, 1080.0);

    let mut group = c.benchmark_group("quad_builder");
    group.bench_function("full_coverage", |b| {
        let progress = [1.0; 5];
        b.iter(|| build_region_quads(black_box(surface), black_box(80.0), black_box(&progress)))
    });
    group.bench_function("mid_sweep", |b| {
        let progress = [0.9, 0.55, 0.1, 0.55, 0.9];
        b.iter(|| build_region_quads(black_box(surface), black_box(80.0), black_box(&progress)))
    });
    group.bench_function("withdrawn", |b| {
        let progress = [0.0; 5];
        b.iter(|| build_region_quads(black_box(surface), black_box(80.0), black_box(&progress)))
    });
    group.finish();
}

fn benchmark_band_boundaries(c: &mut Criterion) {
    c.bench_function("band_boundaries", |b| {
        b.iter(|| band_boundaries(black_box(1966.2)))
    });
}

criterion_group!(benches, benchmark_quad_builder, benchmark_band_boundaries);
criterion_main!(benches);
