//! Benchmarks for whole-preset synthesis.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use katamaran::synth::{SoundCache, SoundId, ToneSynthesizer};

pub fn bench_synthesis(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/synthesis");
    group.sample_size(20);
    let synth = ToneSynthesizer::new(48_000);

    for id in SoundId::all() {
        let name = format!("{id:?}");
        group.bench_with_input(BenchmarkId::new("preset", name), &id, |b, &id| {
            b.iter(|| synth.render(black_box(id)))
        });
    }

    // Everything the player builds when the device opens
    group.bench_function("cache", |b| b.iter(|| SoundCache::build(black_box(&synth))));

    group.finish();
}
