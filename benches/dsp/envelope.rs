//! Benchmarks for the one-shot decay envelope.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use katamaran::dsp::DecayEnvelope;

use crate::BLOCK_SIZES;

pub fn bench_envelope(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/envelope");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f32; size];

        // Plain exponential decay, the tone preset
        let env = DecayEnvelope::exponential(3.0);
        group.bench_with_input(BenchmarkId::new("decay", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(sample_rate), black_box(0.3));
            })
        });

        // Attack ramp on top, the piano preset
        let env = DecayEnvelope::exponential(0.5).with_attack(50.0, 0.1);
        group.bench_with_input(BenchmarkId::new("attack", size), &size, |b, _| {
            b.iter(|| {
                env.render(black_box(&mut buffer), black_box(sample_rate), black_box(1.0));
            })
        });
    }

    group.finish();
}
