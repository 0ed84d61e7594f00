//! Katamaran - the terminal shell around the menu and the games

use std::time::{Duration, Instant};

use color_eyre::eyre::Result as EyreResult;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use katamaran::game::{script, session, Effect, GamePhase, GameSession, MainMenu};
use katamaran::narration::VoiceNarrator;
use katamaran::output::SpatialAudioPlayer;
use katamaran::GameConfig;
use ratatui::DefaultTerminal;
use rtrb::Consumer;
use tracing::{debug, info};

use super::keymap::{self, Command};
use super::ui::{self, spectrum::SpectrumAnalyzer, Screen as ScreenView, View};

/// Samples kept for the scope and the spectrum
const VIS_BUFFER_SIZE: usize = 1024;

/// Frame budget of the event loop (~60fps)
const FRAME: Duration = Duration::from_millis(16);

enum Screen {
    Menu(MainMenu),
    Game(Box<dyn GameSession>),
}

pub struct App {
    config: GameConfig,
    screen: Screen,
    player: SpatialAudioPlayer,
    narrator: VoiceNarrator,
    /// Mixed output tapped from the audio thread
    scope: Option<Consumer<f32>>,
    audio_buffer: Vec<f32>,
    spectrum: SpectrumAnalyzer,
    /// Last narrated text, shown for players who read along
    caption: String,
    should_quit: bool,
}

impl App {
    pub fn new(
        config: GameConfig,
        player: SpatialAudioPlayer,
        narrator: VoiceNarrator,
        scope: Option<Consumer<f32>>,
    ) -> Self {
        let sample_rate = player.device().sample_rate().unwrap_or(48_000);
        Self {
            config,
            screen: Screen::Menu(MainMenu::new()),
            player,
            narrator,
            scope,
            audio_buffer: vec![0.0; VIS_BUFFER_SIZE],
            spectrum: SpectrumAnalyzer::new(VIS_BUFFER_SIZE, sample_rate as f32),
            caption: String::new(),
            should_quit: false,
        }
    }

    /// Run the event loop until the player quits
    pub fn run(mut self, mut terminal: DefaultTerminal) -> EyreResult<()> {
        let mut last = Instant::now();

        while !self.should_quit {
            self.poll_audio();

            let now = Instant::now();
            self.tick(now - last);
            last = now;

            terminal.draw(|frame| ui::render(frame, &self.view()))?;

            if event::poll(FRAME)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }

        self.shutdown();
        Ok(())
    }

    fn shutdown(self) {
        let App {
            player,
            mut narrator,
            ..
        } = self;
        narrator.cancel();
        player.close();
        info!("bye");
    }

    /// Pull everything the audio thread produced, keeping the newest samples
    fn poll_audio(&mut self) {
        let Some(scope) = self.scope.as_mut() else {
            return;
        };

        let available = scope.slots();
        if available == 0 {
            return;
        }
        if let Ok(chunk) = scope.read_chunk(available) {
            let (first, second) = chunk.as_slices();
            self.audio_buffer.extend_from_slice(first);
            self.audio_buffer.extend_from_slice(second);
            chunk.commit_all();
        }

        if self.audio_buffer.len() > VIS_BUFFER_SIZE {
            let excess = self.audio_buffer.len() - VIS_BUFFER_SIZE;
            self.audio_buffer.drain(0..excess);
        }
        self.spectrum.update(&self.audio_buffer);
    }

    fn tick(&mut self, dt: Duration) {
        self.narrator.poll_voices(dt);

        let launch = match &mut self.screen {
            Screen::Menu(menu) => menu.advance(dt),
            Screen::Game(game) => {
                game.advance(dt);
                None
            }
        };
        self.perform_effects();

        if let Some(mode) = launch {
            info!(?mode, "starting game");
            self.screen = Screen::Game(session(mode, self.config.clone()));
            self.perform_effects();
        }
        self.leave_finished_game();
    }

    fn handle_key(&mut self, code: KeyCode) {
        let command = match &self.screen {
            Screen::Menu(_) => keymap::menu_command(code),
            Screen::Game(game) => keymap::game_command(code, &game.snapshot()),
        };
        let Some(command) = command else {
            return;
        };
        debug!(?command, "key");

        match (&mut self.screen, command) {
            (_, Command::Quit) => self.should_quit = true,
            (Screen::Menu(menu), Command::Menu(key)) => menu.press(key),
            (Screen::Game(game), Command::Start) => game.start(),
            (Screen::Game(game), Command::Restart) => game.restart(),
            (Screen::Game(game), Command::TogglePause) => {
                game.toggle_pause();
            }
            (Screen::Game(game), Command::Back) => game.back(),
            (Screen::Game(game), Command::Answer(arrow)) => {
                game.press(arrow);
            }
            _ => {}
        }

        self.perform_effects();
        self.leave_finished_game();
    }

    fn leave_finished_game(&mut self) {
        let finished = matches!(
            &self.screen,
            Screen::Game(game) if game.snapshot().phase == GamePhase::Terminated
        );
        if finished {
            self.screen = Screen::Menu(MainMenu::returning());
            self.perform_effects();
        }
    }

    /// Play and speak whatever the current screen queued
    fn perform_effects(&mut self) {
        let (mode, effects) = match &mut self.screen {
            Screen::Menu(menu) => (None, menu.drain_effects()),
            Screen::Game(game) => (Some(game.mode()), game.drain_effects()),
        };

        for effect in effects {
            match effect {
                Effect::Play(sound) => self.player.play_cue(sound),
                Effect::Narrate(line) => {
                    if let Some(text) = mode.and_then(|mode| script::line(mode, &line)) {
                        self.say(text);
                    }
                }
                Effect::Announce(line) => self.say(script::menu_line(&line)),
            }
        }
    }

    fn say(&mut self, text: String) {
        self.narrator.speak(&text, None, None);
        self.caption = text;
    }

    fn view(&self) -> View<'_> {
        let screen = match &self.screen {
            Screen::Menu(menu) => ScreenView::Menu {
                selected: menu.selected(),
                launching: menu.launching(),
            },
            Screen::Game(game) => ScreenView::Game(game.snapshot()),
        };

        View {
            screen,
            caption: &self.caption,
            audio: &self.audio_buffer,
            spectrum: self.spectrum.data(),
            sample_rate: self.player.device().sample_rate(),
            voice: self.narrator.selected_voice().map(|voice| voice.name.as_str()),
        }
    }
}
