//! Audio-only game modes.
//!
//! One generic [`GameEngine`] runs every mode; [`modes`] holds what makes
//! them different. Engines never touch audio or speech directly: they queue
//! [`Effect`]s that the shell drains and performs, and [`script`] turns
//! narration events into words.

pub mod effect;
pub mod engine;
pub mod menu;
pub mod modes;
pub mod phase;
pub mod score;
pub mod script;
pub mod timers;

pub use effect::{Effect, Line, MenuLine};
pub use engine::{
    session, GameEngine, GameSession, MemoryGame, PrecisionGame, RhythmGame, Snapshot, Verdict,
};
pub use menu::{MainMenu, MenuKey};
pub use modes::{Memory, Precision, Rhythm, RoundStyle, Rules};
pub use phase::{Arrow, GamePhase, ModeKind};
pub use score::ScoreState;
pub use timers::{Scheduler, TimerEvent};
