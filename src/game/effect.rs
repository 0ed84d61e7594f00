use crate::game::phase::ModeKind;
use crate::synth::SoundId;

/// Something the shell should make audible. Engines queue these; the
/// shell drains and performs them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Play(SoundId),
    /// Speak a game line, rendered through the mode's script.
    Narrate(Line),
    /// Speak a main-menu line.
    Announce(MenuLine),
}

/// Narration events of a running game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Intro,
    Ready,
    Countdown,
    Paused,
    Resuming,
    Combo(u32),
    /// Wrong answer; names the stimulus that was played.
    Reveal(SoundId),
    Timeout,
    Level { level: u32, length: usize },
    YourTurn,
    SequenceCorrect { points: u32 },
    SequenceWrong,
    GameOver { score: u32, record: bool },
    NewGame,
}

/// Narration events of the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuLine {
    Welcome,
    Repeat,
    Info,
    Describe(ModeKind),
    Confirm(ModeKind),
}
