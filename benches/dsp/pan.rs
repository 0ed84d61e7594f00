//! Benchmarks for the equal-power stereo panner.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use katamaran::dsp::StereoPanner;

use crate::BLOCK_SIZES;

pub fn bench_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/pan");

    for &size in BLOCK_SIZES {
        let left: Vec<f32> = (0..size).map(|i| (i as f32 * 0.1).sin()).collect();
        let right: Vec<f32> = (0..size).map(|i| (i as f32 * 0.15).cos()).collect();
        let mut out = vec![(0.0f32, 0.0f32); size];

        for (name, pan) in [("left", -0.8), ("center", 0.0), ("right", 0.8)] {
            let panner = StereoPanner::new(pan);
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for ((frame, &l), &r) in out.iter_mut().zip(&left).zip(&right) {
                        *frame = black_box(&panner).process(l, r);
                    }
                })
            });
        }
    }

    group.finish();
}
