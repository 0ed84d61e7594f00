//! Benchmarks for seeded noise and sine partials.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use katamaran::dsp::oscillator::{sine, NoiseSource};

use crate::BLOCK_SIZES;

pub fn bench_noise(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let rate = 48_000.0f32;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Sine - uses sin() transcendental function
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                for (i, sample) in buffer.iter_mut().enumerate() {
                    *sample = sine(black_box(440.0), i as f32 / rate);
                }
            })
        });

        // Noise - PCG draw per sample
        let mut noise = NoiseSource::new(7);
        group.bench_with_input(BenchmarkId::new("noise", size), &size, |b, _| {
            b.iter(|| {
                for sample in buffer.iter_mut() {
                    *sample = noise.next_sample();
                }
                black_box(&buffer);
            })
        });
    }

    group.finish();
}
