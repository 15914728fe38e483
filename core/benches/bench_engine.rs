//! Benchmarks for grid encryption.
//!
//! Measures single-pixel evolution, and full-grid encrypt throughput for the
//! reference configuration across worker counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use automata_cipher_core::automaton::{evolve_pixel, RuleTable};
use automata_cipher_core::prelude::*;

/// Square grid side used for throughput runs (512 x 512, a typical test image).
const GRID_SIDE: usize = 512;

fn bench_pixel(c: &mut Criterion) {
    let table = RuleTable::from_ids(&REFERENCE_RULES).unwrap();
    c.bench_function("evolve_pixel_4_cycles", |b| {
        b.iter(|| {
            for v in 0..=255u8 {
                black_box(evolve_pixel(black_box(v), &table, DEFAULT_CYCLES));
            }
        });
    });
}

fn bench_encrypt(c: &mut Criterion) {
    let data = (0..GRID_SIDE * GRID_SIDE).map(|i| (i % 251) as u8).collect();
    let grid = PixelGrid::new(GRID_SIDE, GRID_SIDE, data).unwrap();
    let cfg = CipherConfig::default();

    let mut group = c.benchmark_group("encrypt_grid");
    group.throughput(Throughput::Bytes((GRID_SIDE * GRID_SIDE) as u64));

    for workers in [1usize, 2, 4, 8] {
        let engine = CipherEngine::with_profile(
            &cfg,
            ParallelismProfile::with_workers(workers).with_min_parallel_pixels(0),
        )
        .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(workers), &grid, |b, g| {
            b.iter(|| engine.encrypt(black_box(g)).unwrap());
        });
    }
    group.finish();
}

criterion_group!(benches, bench_pixel, bench_encrypt);
criterion_main!(benches);
