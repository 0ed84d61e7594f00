//! Game-shaped benchmarks.
//!
//! Synthesizing every preset the way the sound cache does on startup, and
//! mixing the overlaps that actually happen during play.

mod mixer;
mod synthesis;

pub use mixer::bench_mixer;
pub use synthesis::bench_synthesis;
