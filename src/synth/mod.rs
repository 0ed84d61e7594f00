// Purpose: procedural sound generation
// Presets describe each clip, the synthesizer renders them, the cache keeps them

pub mod buffer;
pub mod cache;
pub mod presets;
pub mod sound;
pub mod spec;
pub mod synthesizer;

pub use buffer::AudioBuffer;
pub use cache::SoundCache;
pub use sound::{Direction, FrequencyClass, Instrument, SoundId, UiCue};
pub use spec::{Partial, ToneSpec, Transient};
pub use synthesizer::ToneSynthesizer;
