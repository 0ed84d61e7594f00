//! The shared game state machine.
//!
//! ```text
//!  intro --start--> ready --start--> [countdown] --> playing <--pause/resume--> paused
//!                                                      |                          |
//!                                                      |               resume --> resuming --[countdown]--> playing
//!                                                      +--time up--> game over --restart--> ready
//!  any phase --back--> terminated
//! ```
//!
//! Modes without a ready phase go straight from intro (or game over) to
//! the countdown. Sequence modes cycle playing -> listening -> inputting
//! for every level.

use std::marker::PhantomData;
use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use tracing::{debug, info};

use crate::config::GameConfig;
use crate::game::effect::{Effect, Line};
use crate::game::modes::{Memory, Precision, Rhythm, RoundStyle, Rules};
use crate::game::phase::{Arrow, GamePhase, ModeKind};
use crate::game::score::ScoreState;
use crate::game::timers::{CountdownClock, Scheduler, TimerEvent};
use crate::synth::{SoundId, UiCue};

/// Outcome of an accepted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Correct { points: u32 },
    Incorrect,
    /// Sequence modes: right so far, more to go.
    Partial,
}

/// What the shell shows each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub mode: ModeKind,
    pub phase: GamePhase,
    pub score: u32,
    pub high_score: u32,
    pub combo: u32,
    pub time_left: u32,
    pub level: u32,
    /// Stimulus awaiting an answer, if any.
    pub stimulus: Option<SoundId>,
    pub sequence_len: usize,
    pub input_len: usize,
    /// A start countdown is running.
    pub counting_down: bool,
}

/// One game instance, parameterized by its mode's [`Rules`].
///
/// Single-threaded and clockless: time only moves through
/// [`advance`](Self::advance). Every timer callback is stamped with the
/// scheduler generation and re-checks the phase before acting, and every
/// phase change or finished round bumps the generation.
pub struct GameEngine<R: Rules> {
    config: GameConfig,
    phase: GamePhase,
    score: ScoreState,
    stimulus: Option<R::Token>,
    stimulus_at_ms: u64,
    sequence: Vec<R::Token>,
    input: Vec<R::Token>,
    counting_down: bool,
    timers: Scheduler,
    clock: CountdownClock,
    /// Sub-millisecond remainder of the frames fed to `advance`.
    carry: Duration,
    rng: Pcg32,
    effects: Vec<Effect>,
    _rules: PhantomData<R>,
}

pub type RhythmGame = GameEngine<Rhythm>;
pub type PrecisionGame = GameEngine<Precision>;
pub type MemoryGame = GameEngine<Memory>;

impl<R: Rules> GameEngine<R> {
    pub fn new(config: GameConfig) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let high_score = config.high_score.unwrap_or(R::INITIAL_HIGH_SCORE);
        debug!(mode = ?R::KIND, seed, "game created");

        Self {
            score: ScoreState::new(high_score, config.time_limit),
            config,
            phase: GamePhase::Intro,
            stimulus: None,
            stimulus_at_ms: 0,
            sequence: Vec::new(),
            input: Vec::new(),
            counting_down: false,
            timers: Scheduler::new(),
            clock: CountdownClock::default(),
            carry: Duration::ZERO,
            rng: Pcg32::seed_from_u64(seed),
            effects: vec![Effect::Narrate(Line::Intro)],
            _rules: PhantomData,
        }
    }

    pub fn mode(&self) -> ModeKind {
        R::KIND
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn score(&self) -> &ScoreState {
        &self.score
    }

    pub fn current_stimulus(&self) -> Option<R::Token> {
        self.stimulus
    }

    /// The memory sequence of the current level (empty between levels).
    pub fn sequence(&self) -> &[R::Token] {
        &self.sequence
    }

    pub fn input(&self) -> &[R::Token] {
        &self.input
    }

    pub fn timers(&self) -> &Scheduler {
        &self.timers
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: R::KIND,
            phase: self.phase,
            score: self.score.score,
            high_score: self.score.high_score,
            combo: self.score.combo,
            time_left: self.score.time_left,
            level: self.score.level,
            stimulus: self.stimulus.map(Into::into),
            sequence_len: self.sequence.len(),
            input_len: self.input.len(),
            counting_down: self.counting_down,
        }
    }

    /// Take the effects queued since the last call.
    pub fn drain_effects(&mut self) -> Vec<Effect> {
        std::mem::take(&mut self.effects)
    }

    // ---- inbound -------------------------------------------------------

    /// The start key: intro -> ready, ready -> countdown.
    pub fn start(&mut self) {
        match self.phase {
            GamePhase::Intro if R::has_ready_phase() => {
                self.transition(GamePhase::Ready);
                self.play(UiCue::Confirm);
                self.narrate(Line::Ready);
            }
            GamePhase::Intro | GamePhase::Ready => self.begin_countdown(),
            phase => debug!(?phase, "start ignored"),
        }
    }

    /// Start another game after game over.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            debug!(phase = ?self.phase, "restart ignored");
            return;
        }

        self.score.reset(self.config.time_limit);
        if R::has_ready_phase() {
            self.transition(GamePhase::Ready);
            self.narrate(Line::NewGame);
        } else {
            self.begin_countdown();
        }
    }

    /// Freeze the game. Only valid while the clock is running.
    pub fn pause(&mut self) -> bool {
        if !self.phase.is_timed() {
            return false;
        }

        self.stimulus = None;
        self.input.clear();
        self.transition(GamePhase::Paused);
        self.play(UiCue::Pause);
        self.narrate(Line::Paused);
        true
    }

    /// Leave pause through the re-entry countdown.
    pub fn resume(&mut self) -> bool {
        if self.phase != GamePhase::Paused {
            return false;
        }

        self.transition(GamePhase::Resuming);
        self.play(UiCue::Resume);
        self.narrate(Line::Resuming);
        self.timers
            .schedule(self.config.countdown, TimerEvent::ResumeElapsed);
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.phase == GamePhase::Paused {
            self.resume()
        } else {
            self.pause()
        }
    }

    /// Leave the game. Terminal: every pending timer goes stale.
    pub fn back(&mut self) {
        if self.phase == GamePhase::Terminated {
            return;
        }

        self.stimulus = None;
        self.input.clear();
        self.counting_down = false;
        self.transition(GamePhase::Terminated);
        self.play(UiCue::Back);
    }

    /// Answer with an arrow key. Keys the mode does not use are ignored.
    pub fn press(&mut self, arrow: Arrow) -> Option<Verdict> {
        R::token(arrow).and_then(|token| self.handle_input(token))
    }

    /// Judge an answer. `None` when no answer is expected right now.
    pub fn handle_input(&mut self, token: R::Token) -> Option<Verdict> {
        match R::STYLE {
            RoundStyle::Single { next_delay, .. } => self.judge_single(token, next_delay),
            RoundStyle::Sequence { lead_in, .. } => self.judge_sequence(token, lead_in),
        }
    }

    /// Move time forward by `dt`, firing clock ticks and timers in order.
    ///
    /// Timers run on whole milliseconds; the fraction left over is carried
    /// into the next call so frame-sized steps add up to wall time.
    pub fn advance(&mut self, dt: Duration) {
        let elapsed = self.carry + dt;
        let whole_ms = elapsed.as_millis() as u64;
        self.carry = elapsed - Duration::from_millis(whole_ms);
        let target = self.timers.now_ms() + whole_ms;

        loop {
            let now = self.timers.now_ms();
            let tick_at = self
                .phase
                .is_timed()
                .then(|| now + self.clock.until_tick());
            let next = [tick_at, self.timers.next_due()]
                .into_iter()
                .flatten()
                .min()
                .filter(|&at| at <= target);

            let step_to = next.unwrap_or(target);
            if self.phase.is_timed() && self.clock.run(step_to - now) > 0 {
                self.timers.set_now(step_to);
                self.tick_second();
            } else {
                self.timers.set_now(step_to);
            }

            while let Some(event) = self.timers.pop_due() {
                self.fire(event);
            }

            if next.is_none() {
                break;
            }
        }
    }

    // ---- internals -----------------------------------------------------

    fn transition(&mut self, to: GamePhase) {
        if self.phase != to {
            debug!(mode = ?R::KIND, from = ?self.phase, ?to, "phase");
        }
        self.phase = to;
        self.timers.invalidate();
    }

    fn play(&mut self, sound: impl Into<SoundId>) {
        self.effects.push(Effect::Play(sound.into()));
    }

    fn narrate(&mut self, line: Line) {
        self.effects.push(Effect::Narrate(line));
    }

    fn draw(&mut self) -> R::Token {
        R::ALPHABET[self.rng.random_range(0..R::ALPHABET.len())]
    }

    fn begin_countdown(&mut self) {
        if self.counting_down {
            return;
        }

        self.counting_down = true;
        self.play(UiCue::Start);
        self.narrate(Line::Countdown);
        self.timers
            .schedule(self.config.countdown, TimerEvent::CountdownElapsed);
    }

    fn tick_second(&mut self) {
        if self.score.tick() {
            self.game_over();
        }
    }

    fn game_over(&mut self) {
        self.stimulus = None;
        self.sequence.clear();
        self.input.clear();
        self.transition(GamePhase::GameOver);

        let record = self.score.settle();
        info!(
            mode = ?R::KIND,
            score = self.score.score,
            high_score = self.score.high_score,
            record,
            "game over"
        );
        self.narrate(Line::GameOver {
            score: self.score.score,
            record,
        });
    }

    fn fire(&mut self, event: TimerEvent) {
        match event {
            TimerEvent::CountdownElapsed if self.counting_down => {
                self.counting_down = false;
                self.score.reset(self.config.time_limit);
                self.clock.reset();
                self.stimulus = None;
                self.sequence.clear();
                self.input.clear();
                self.transition(GamePhase::Playing);
                self.begin_round();
            }
            TimerEvent::ResumeElapsed if self.phase == GamePhase::Resuming => {
                self.transition(GamePhase::Playing);
                match R::STYLE {
                    RoundStyle::Single { .. } => self.issue_stimulus(),
                    // Replays the interrupted sequence from the start.
                    RoundStyle::Sequence { .. } => self.begin_level(),
                }
            }
            TimerEvent::NextStimulus
                if self.phase == GamePhase::Playing && self.stimulus.is_none() =>
            {
                self.issue_stimulus()
            }
            TimerEvent::ResponseWindowClosed
                if self.phase == GamePhase::Playing && self.stimulus.is_some() =>
            {
                self.miss()
            }
            TimerEvent::BeginLevel if self.phase == GamePhase::Playing => self.begin_level(),
            TimerEvent::SequenceStep(index) if self.phase == GamePhase::Listening => {
                self.sequence_step(index)
            }
            TimerEvent::SequenceFinished if self.phase == GamePhase::Listening => {
                self.transition(GamePhase::Inputting);
                self.narrate(Line::YourTurn);
            }
            event => debug!(?event, phase = ?self.phase, "timer ignored in this phase"),
        }
    }

    fn begin_round(&mut self) {
        match R::STYLE {
            RoundStyle::Single { .. } => self.issue_stimulus(),
            RoundStyle::Sequence { lead_in, .. } => {
                self.timers.schedule(lead_in, TimerEvent::BeginLevel)
            }
        }
    }

    fn issue_stimulus(&mut self) {
        let RoundStyle::Single {
            response_window, ..
        } = R::STYLE
        else {
            return;
        };

        let token = self.draw();
        self.stimulus = Some(token);
        self.stimulus_at_ms = self.timers.now_ms();
        self.play(token);
        self.timers
            .schedule(response_window, TimerEvent::ResponseWindowClosed);
    }

    fn miss(&mut self) {
        let RoundStyle::Single { next_delay, .. } = R::STYLE else {
            return;
        };

        debug!(mode = ?R::KIND, stimulus = ?self.stimulus, "missed");
        self.stimulus = None;
        self.score.break_combo();
        self.play(UiCue::Wrong);
        self.narrate(Line::Timeout);
        self.timers.invalidate();
        self.timers.schedule(next_delay, TimerEvent::NextStimulus);
    }

    fn judge_single(&mut self, token: R::Token, next_delay: Duration) -> Option<Verdict> {
        if self.phase != GamePhase::Playing {
            return None;
        }
        let expected = self.stimulus.take()?;
        let reaction = Duration::from_millis(self.timers.now_ms() - self.stimulus_at_ms);

        let verdict = if R::judge(expected, token) {
            let points = R::award(&self.score, reaction);
            let combo = self.score.hit(points);
            self.play(UiCue::Correct);
            if R::combo_milestone(combo) {
                self.narrate(Line::Combo(combo));
            }
            Verdict::Correct { points }
        } else {
            self.score.break_combo();
            self.play(UiCue::Wrong);
            self.narrate(Line::Reveal(expected.into()));
            Verdict::Incorrect
        };

        // The response window of the judged stimulus must not fire.
        self.timers.invalidate();
        self.timers.schedule(next_delay, TimerEvent::NextStimulus);
        Some(verdict)
    }

    fn begin_level(&mut self) {
        let RoundStyle::Sequence {
            first_step,
            max_length,
            ..
        } = R::STYLE
        else {
            return;
        };

        if self.sequence.is_empty() {
            let length = (2 + self.score.level as usize).min(max_length);
            let sequence: Vec<R::Token> = (0..length).map(|_| self.draw()).collect();
            self.sequence = sequence;
        }
        self.input.clear();

        self.transition(GamePhase::Listening);
        self.narrate(Line::Level {
            level: self.score.level,
            length: self.sequence.len(),
        });
        self.timers.schedule(first_step, TimerEvent::SequenceStep(0));
    }

    fn sequence_step(&mut self, index: usize) {
        let RoundStyle::Sequence {
            step, answer_delay, ..
        } = R::STYLE
        else {
            return;
        };
        let Some(&token) = self.sequence.get(index) else {
            return;
        };

        self.play(token);
        if index + 1 < self.sequence.len() {
            self.timers.schedule(step, TimerEvent::SequenceStep(index + 1));
        } else {
            self.timers
                .schedule(answer_delay, TimerEvent::SequenceFinished);
        }
    }

    fn judge_sequence(&mut self, token: R::Token, lead_in: Duration) -> Option<Verdict> {
        if self.phase != GamePhase::Inputting {
            return None;
        }

        self.play(token);
        self.input.push(token);

        let matches = self
            .input
            .iter()
            .zip(&self.sequence)
            .all(|(&given, &expected)| R::judge(expected, given));
        if !matches {
            self.input.clear();
            self.play(UiCue::Wrong);
            self.narrate(Line::SequenceWrong);
            return Some(Verdict::Incorrect);
        }

        if self.input.len() < self.sequence.len() {
            return Some(Verdict::Partial);
        }

        let points = R::award(&self.score, Duration::ZERO);
        self.score.add_points(points);
        self.play(UiCue::Correct);
        self.narrate(Line::SequenceCorrect { points });
        debug!(level = self.score.level, points, "sequence complete");

        self.score.level += 1;
        self.sequence.clear();
        self.input.clear();
        self.transition(GamePhase::Playing);
        self.timers.schedule(lead_in, TimerEvent::BeginLevel);
        Some(Verdict::Correct { points })
    }
}

/// Object-safe view of a running game, for shells that switch modes.
pub trait GameSession {
    fn mode(&self) -> ModeKind;
    fn start(&mut self);
    fn restart(&mut self);
    fn toggle_pause(&mut self) -> bool;
    fn back(&mut self);
    fn press(&mut self, arrow: Arrow) -> Option<Verdict>;
    fn advance(&mut self, dt: Duration);
    fn snapshot(&self) -> Snapshot;
    fn drain_effects(&mut self) -> Vec<Effect>;
}

impl<R: Rules> GameSession for GameEngine<R> {
    fn mode(&self) -> ModeKind {
        GameEngine::mode(self)
    }

    fn start(&mut self) {
        GameEngine::start(self)
    }

    fn restart(&mut self) {
        GameEngine::restart(self)
    }

    fn toggle_pause(&mut self) -> bool {
        GameEngine::toggle_pause(self)
    }

    fn back(&mut self) {
        GameEngine::back(self)
    }

    fn press(&mut self, arrow: Arrow) -> Option<Verdict> {
        GameEngine::press(self, arrow)
    }

    fn advance(&mut self, dt: Duration) {
        GameEngine::advance(self, dt)
    }

    fn snapshot(&self) -> Snapshot {
        GameEngine::snapshot(self)
    }

    fn drain_effects(&mut self) -> Vec<Effect> {
        GameEngine::drain_effects(self)
    }
}

/// A fresh game of `mode`.
pub fn session(mode: ModeKind, config: GameConfig) -> Box<dyn GameSession> {
    match mode {
        ModeKind::Rhythm => Box::new(RhythmGame::new(config)),
        ModeKind::Precision => Box::new(PrecisionGame::new(config)),
        ModeKind::Memory => Box::new(MemoryGame::new(config)),
    }
}
