//! Benchmarks for low-level DSP primitives.

mod envelope;
mod noise;
mod pan;

pub use envelope::bench_envelope;
pub use noise::bench_noise;
pub use pan::bench_pan;
