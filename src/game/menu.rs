use std::time::Duration;

use tracing::debug;

use crate::game::effect::{Effect, MenuLine};
use crate::game::phase::ModeKind;
use crate::synth::UiCue;

/// Pause between confirming a mode and launching it, so the confirmation
/// is heard before the game's introduction interrupts it.
pub const LAUNCH_DELAY: Duration = Duration::from_secs(2);

/// Keys the menu reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKey {
    Digit(u8),
    Enter,
}

/// The spoken main menu.
///
/// 1-3 describe a mode, 4 gives general information, 0 repeats the menu.
/// Enter confirms the described mode; so does 1 once a mode has been
/// described. The game launches after [`LAUNCH_DELAY`].
#[derive(Debug)]
pub struct MainMenu {
    selected: Option<ModeKind>,
    launch: Option<(ModeKind, Duration)>,
    effects: Vec<Effect>,
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl MainMenu {
    pub fn new() -> Self {
        Self {
            selected: None,
            launch: None,
            effects: vec![Effect::Announce(MenuLine::Welcome)],
        }
    }

    /// The menu as heard when coming back from a game: the short version.
    pub fn returning() -> Self {
        Self {
            effects: vec![Effect::Announce(MenuLine::Repeat)],
            ..Self::new()
        }
    }

    pub fn selected(&self) -> Option<ModeKind> {
        self.selected
    }

    /// Mode waiting for its launch delay, if any.
    pub fn launching(&self) -> Option<ModeKind> {
        self.launch.map(|(mode, _)| mode)
    }

    pub fn press(&mut self, key: MenuKey) {
        if self.launch.is_some() {
            debug!(?key, "menu key ignored while launching");
            return;
        }

        match key {
            MenuKey::Enter => self.confirm(),
            MenuKey::Digit(1) if self.selected.is_some() => self.confirm(),
            MenuKey::Digit(digit @ 1..=3) => {
                if let Some(mode) = ModeKind::from_option(digit) {
                    self.selected = Some(mode);
                    self.effects.push(Effect::Play(UiCue::Select.into()));
                    self.effects.push(Effect::Announce(MenuLine::Describe(mode)));
                }
            }
            MenuKey::Digit(4) => {
                self.effects.push(Effect::Play(UiCue::Info.into()));
                self.effects.push(Effect::Announce(MenuLine::Info));
            }
            MenuKey::Digit(0) => {
                self.selected = None;
                self.effects.push(Effect::Play(UiCue::Back.into()));
                self.effects.push(Effect::Announce(MenuLine::Repeat));
            }
            MenuKey::Digit(_) => {}
        }
    }

    fn confirm(&mut self) {
        let Some(mode) = self.selected else {
            return;
        };
        self.effects.push(Effect::Play(UiCue::Confirm.into()));
        self.effects.push(Effect::Announce(MenuLine::Confirm(mode)));
        self.launch = Some((mode, LAUNCH_DELAY));
    }

    /// Count down a pending launch. Returns the mode once it is due.
    pub fn advance(&mut self, dt: Duration) -> Option<ModeKind> {
        let (mode, remaining) = self.launch?;
        let remaining = remaining.saturating_sub(dt);
        if remaining.is_zero() {
            self.launch = None;
            self.selected = None;
            Some(mode)
        } else {
            self.launch = Some((mode, remaining));
            None
        }
    }

    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_then_confirm_launches_after_delay() {
        let mut menu = MainMenu::new();
        assert_eq!(menu.drain_effects(), vec![Effect::Announce(MenuLine::Welcome)]);

        menu.press(MenuKey::Digit(2));
        assert_eq!(menu.selected(), Some(ModeKind::Precision));
        assert_eq!(
            menu.drain_effects(),
            vec![
                Effect::Play(UiCue::Select.into()),
                Effect::Announce(MenuLine::Describe(ModeKind::Precision))
            ]
        );

        menu.press(MenuKey::Digit(1));
        assert_eq!(menu.launching(), Some(ModeKind::Precision));
        assert_eq!(menu.advance(Duration::from_millis(1_500)), None);
        menu.press(MenuKey::Digit(3));
        assert_eq!(menu.advance(Duration::from_millis(500)), Some(ModeKind::Precision));
        assert_eq!(menu.advance(Duration::from_secs(5)), None);
    }

    #[test]
    fn first_digit_one_selects_rhythm() {
        let mut menu = MainMenu::new();
        menu.press(MenuKey::Digit(1));
        assert_eq!(menu.selected(), Some(ModeKind::Rhythm));
        assert_eq!(menu.launching(), None);

        menu.press(MenuKey::Enter);
        assert_eq!(menu.launching(), Some(ModeKind::Rhythm));
    }

    #[test]
    fn returning_menu_is_short() {
        let mut menu = MainMenu::returning();
        assert_eq!(menu.drain_effects(), vec![Effect::Announce(MenuLine::Repeat)]);
        assert_eq!(menu.selected(), None);
    }

    #[test]
    fn enter_without_selection_does_nothing() {
        let mut menu = MainMenu::new();
        menu.drain_effects();
        menu.press(MenuKey::Enter);
        assert!(menu.drain_effects().is_empty());
        assert_eq!(menu.launching(), None);
    }

    #[test]
    fn zero_repeats_and_clears_selection() {
        let mut menu = MainMenu::new();
        menu.press(MenuKey::Digit(3));
        menu.press(MenuKey::Digit(0));
        assert_eq!(menu.selected(), None);
        assert!(menu
            .drain_effects()
            .ends_with(&[Effect::Play(UiCue::Back.into()), Effect::Announce(MenuLine::Repeat)]));

        menu.press(MenuKey::Digit(4));
        assert_eq!(
            menu.drain_effects(),
            vec![Effect::Play(UiCue::Info.into()), Effect::Announce(MenuLine::Info)]
        );
    }
}
