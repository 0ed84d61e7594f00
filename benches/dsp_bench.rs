//! Benchmarks for DSP primitives, tone synthesis and output mixing.
//!
//! Run with: cargo bench
//!
//! Synthesis runs once per sound when the device opens, so it only has to be
//! fast enough not to delay the menu. The mixer runs inside the audio
//! callback and must finish well within the block deadline.
//!
//! Reference timing at 48kHz sample rate:
//!   - 64 samples  = 1.33ms deadline
//!   - 128 samples = 2.67ms deadline
//!   - 256 samples = 5.33ms deadline
//!   - 512 samples = 10.67ms deadline
//!
//! Benchmark groups:
//!   - dsp/*        Envelope, pan and noise primitives
//!   - scenarios/*  Whole-preset synthesis and overlapping voices in the mixer

use criterion::{criterion_group, criterion_main};

mod dsp;
mod scenarios;

/// Common buffer sizes used in audio applications.
pub const BLOCK_SIZES: &[usize] = &[64, 128, 256, 512];

criterion_group!(
    benches,
    dsp::bench_envelope,
    dsp::bench_pan,
    dsp::bench_noise,
    scenarios::bench_synthesis,
    scenarios::bench_mixer,
);
criterion_main!(benches);
