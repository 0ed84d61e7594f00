#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lifecycle phase of one game instance. Exactly one is active at a time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Instructions are being read out.
    Intro,
    /// Waiting for the start key (or counting down after it).
    Ready,
    Playing,
    /// Memory mode: the sequence is being played to the player.
    Listening,
    /// Memory mode: the player repeats the sequence.
    Inputting,
    Paused,
    /// Re-entry countdown after a pause. No stimulus fires here.
    Resuming,
    GameOver,
    /// Left via back navigation. Nothing happens after this.
    Terminated,
}

impl GamePhase {
    /// Phases in which the game clock runs.
    pub fn is_timed(self) -> bool {
        matches!(
            self,
            GamePhase::Playing | GamePhase::Listening | GamePhase::Inputting
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            GamePhase::Intro => "intro",
            GamePhase::Ready => "ready",
            GamePhase::Playing => "playing",
            GamePhase::Listening => "listening",
            GamePhase::Inputting => "inputting",
            GamePhase::Paused => "paused",
            GamePhase::Resuming => "resuming",
            GamePhase::GameOver => "game over",
            GamePhase::Terminated => "terminated",
        }
    }
}

/// The three game modes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModeKind {
    Rhythm,
    Precision,
    Memory,
}

impl ModeKind {
    pub const ALL: [ModeKind; 3] = [ModeKind::Rhythm, ModeKind::Precision, ModeKind::Memory];

    /// Menu option number, 1-based.
    pub fn option(self) -> u8 {
        match self {
            ModeKind::Rhythm => 1,
            ModeKind::Precision => 2,
            ModeKind::Memory => 3,
        }
    }

    pub fn from_option(option: u8) -> Option<Self> {
        ModeKind::ALL.into_iter().find(|mode| mode.option() == option)
    }

    pub fn title(self) -> &'static str {
        match self {
            ModeKind::Rhythm => "Ritmo Auditivo",
            ModeKind::Precision => "Precisión Auditiva",
            ModeKind::Memory => "Memoria Auditiva",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            ModeKind::Rhythm => {
                "Sigue el ritmo con tus teclas. Escucha los sonidos que vienen de la izquierda, \
                 centro o derecha y presiona las teclas correctas al compás de la música."
            }
            ModeKind::Precision => {
                "Reacciona al instante. Identifica sonidos agudos o graves y responde rápido \
                 según el tipo o secuencia."
            }
            ModeKind::Memory => {
                "Escucha, memoriza y repite. Sigue la secuencia de sonidos y repítela en el \
                 mismo orden usando las teclas correspondientes."
            }
        }
    }
}

/// Directional keys the games read. The shell maps physical keys to these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arrow {
    Left,
    Up,
    Right,
    Down,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_play_is_timed() {
        let timed: Vec<GamePhase> = [
            GamePhase::Intro,
            GamePhase::Ready,
            GamePhase::Playing,
            GamePhase::Listening,
            GamePhase::Inputting,
            GamePhase::Paused,
            GamePhase::Resuming,
            GamePhase::GameOver,
            GamePhase::Terminated,
        ]
        .into_iter()
        .filter(|phase| phase.is_timed())
        .collect();

        assert_eq!(
            timed,
            vec![GamePhase::Playing, GamePhase::Listening, GamePhase::Inputting]
        );
    }

    #[test]
    fn menu_options_round_trip() {
        for mode in ModeKind::ALL {
            assert_eq!(ModeKind::from_option(mode.option()), Some(mode));
        }
        assert_eq!(ModeKind::from_option(4), None);
    }
}
