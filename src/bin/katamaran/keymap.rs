//! Physical keys to game commands
//!
//! Digits and Enter navigate, P or Space pauses, arrows or WASD answer.

use crossterm::event::KeyCode;
use katamaran::game::{Arrow, GamePhase, MenuKey, ModeKind, Snapshot};

/// What a key press means on the current screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Menu(MenuKey),
    Start,
    Restart,
    TogglePause,
    Back,
    Answer(Arrow),
}

fn arrow(code: KeyCode) -> Option<Arrow> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Arrow::Left),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Arrow::Up),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Arrow::Right),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Arrow::Down),
        _ => None,
    }
}

pub fn menu_command(code: KeyCode) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Enter => Some(Command::Menu(MenuKey::Enter)),
        KeyCode::Char(c) => c
            .to_digit(10)
            .map(|digit| Command::Menu(MenuKey::Digit(digit as u8))),
        _ => None,
    }
}

pub fn game_command(code: KeyCode, game: &Snapshot) -> Option<Command> {
    match code {
        KeyCode::Char('q') | KeyCode::Char('Q') => return Some(Command::Quit),
        KeyCode::Esc => return Some(Command::Back),
        _ => {}
    }

    match game.phase {
        GamePhase::Intro | GamePhase::Ready => match code {
            KeyCode::Char('1') | KeyCode::Enter => Some(Command::Start),
            KeyCode::Char('0') => Some(Command::Back),
            _ => None,
        },
        GamePhase::GameOver => match code {
            KeyCode::Char('1') | KeyCode::Enter => Some(Command::Restart),
            KeyCode::Char('0') => Some(Command::Back),
            _ => None,
        },
        GamePhase::Paused => match code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                Some(Command::TogglePause)
            }
            KeyCode::Char('0') => Some(Command::Back),
            _ => None,
        },
        phase if phase.is_timed() => match code {
            KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char(' ') => {
                Some(Command::TogglePause)
            }
            // Leaving a running game takes two presses, except in memory.
            KeyCode::Char('0') if game.mode == ModeKind::Memory => Some(Command::Back),
            KeyCode::Char('0') => Some(Command::TogglePause),
            code => arrow(code).map(Command::Answer),
        },
        _ => match code {
            KeyCode::Char('0') => Some(Command::Back),
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use katamaran::game::{session, GameSession};
    use katamaran::GameConfig;

    fn snapshot_of(game: &dyn GameSession) -> Snapshot {
        game.snapshot()
    }

    #[test]
    fn menu_digits_and_enter() {
        assert_eq!(menu_command(KeyCode::Char('3')), Some(Command::Menu(MenuKey::Digit(3))));
        assert_eq!(menu_command(KeyCode::Enter), Some(Command::Menu(MenuKey::Enter)));
        assert_eq!(menu_command(KeyCode::Esc), Some(Command::Quit));
        assert_eq!(menu_command(KeyCode::Char('x')), None);
    }

    #[test]
    fn zero_pauses_running_rhythm_but_leaves_memory() {
        let mut rhythm = session(ModeKind::Rhythm, GameConfig::default().with_seed(1));
        rhythm.start();
        rhythm.start();
        rhythm.advance(std::time::Duration::from_secs(3));
        let snapshot = snapshot_of(rhythm.as_ref());
        assert_eq!(game_command(KeyCode::Char('0'), &snapshot), Some(Command::TogglePause));
        assert_eq!(game_command(KeyCode::Char('a'), &snapshot), Some(Command::Answer(Arrow::Left)));

        let mut memory = session(ModeKind::Memory, GameConfig::default().with_seed(1));
        memory.start();
        memory.advance(std::time::Duration::from_secs(3));
        let snapshot = snapshot_of(memory.as_ref());
        assert_eq!(game_command(KeyCode::Char('0'), &snapshot), Some(Command::Back));
    }
}
