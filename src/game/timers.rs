//! Fake-time scheduling for the game engine.
//!
//! The engine never sleeps. The shell (or a test) calls `advance(dt)` and
//! the engine fires whatever came due in between, in order.

use std::time::Duration;

use tracing::trace;

/*
Generation Tokens
=================

A game arms many short-lived timers: the response window of a stimulus,
the gap before the next one, each step of a memory sequence. Whenever the
game changes phase or finishes a round, every timer armed before that
point must stop mattering.

Rather than tracking handles and cancelling them one by one, the
scheduler keeps a single counter:

  schedule()    stamps the event with the current generation
  invalidate()  bumps the generation
  pop_due()     drops any event whose stamp is not current

    gen 4: [NextStimulus @ 2500]   [ResponseWindowClosed @ 3000]
                                      |
    invalidate() -> gen 5             |
                                      v
    pop_due() at 3000: stamp 4 != 5, discarded

A stale event can never mutate state, no matter how it was armed.
*/

/// Something the engine asked to be told about later.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The start countdown finished.
    CountdownElapsed,
    /// The post-pause countdown finished.
    ResumeElapsed,
    NextStimulus,
    /// The player did not answer the current stimulus in time.
    ResponseWindowClosed,
    /// Memory mode: play the current level's sequence.
    BeginLevel,
    /// Memory mode: play sequence element `n`.
    SequenceStep(usize),
    SequenceFinished,
}

#[derive(Debug, Clone, Copy)]
struct Pending {
    due_ms: u64,
    order: u64,
    generation: u64,
    event: TimerEvent,
}

/// Millisecond timer queue with generation-based invalidation.
#[derive(Debug, Default)]
pub struct Scheduler {
    now_ms: u64,
    generation: u64,
    next_order: u64,
    pending: Vec<Pending>,
    stale_discarded: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Arm `event` to fire `delay` from now in the current generation.
    ///
    /// Delays are rounded up to the next millisecond so an event never
    /// fires early.
    pub fn schedule(&mut self, delay: Duration, event: TimerEvent) {
        let pending = Pending {
            due_ms: self.now_ms + delay.as_nanos().div_ceil(1_000_000) as u64,
            order: self.next_order,
            generation: self.generation,
            event,
        };
        self.next_order += 1;
        self.pending.push(pending);
    }

    /// Make every event armed so far stale.
    pub fn invalidate(&mut self) {
        self.generation += 1;
    }

    /// Due time of the earliest pending event, stale or not.
    pub fn next_due(&self) -> Option<u64> {
        self.pending.iter().map(|p| p.due_ms).min()
    }

    /// Move the clock. Time never goes backwards.
    pub fn set_now(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }

    /// Next current-generation event that is due, earliest first, ties in
    /// arming order. Stale events met on the way are dropped.
    pub fn pop_due(&mut self) -> Option<TimerEvent> {
        loop {
            let index = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.due_ms <= self.now_ms)
                .min_by_key(|(_, p)| (p.due_ms, p.order))
                .map(|(index, _)| index)?;

            let pending = self.pending.swap_remove(index);
            if pending.generation == self.generation {
                return Some(pending.event);
            }

            self.stale_discarded += 1;
            trace!(
                event = ?pending.event,
                armed = pending.generation,
                current = self.generation,
                "stale timer discarded"
            );
        }
    }

    /// Events currently armed, stale ones included.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn stale_discarded(&self) -> u64 {
        self.stale_discarded
    }
}

/// Whole-second countdown that only advances while it is told to.
///
/// Pausing keeps the partial second, so a game paused at 12.6 s resumes
/// with 0.4 s to go before the next tick.
#[derive(Debug, Default, Clone, Copy)]
pub struct CountdownClock {
    carry_ms: u64,
}

impl CountdownClock {
    const TICK_MS: u64 = 1_000;

    pub fn reset(&mut self) {
        self.carry_ms = 0;
    }

    /// Milliseconds until the next whole-second tick.
    pub fn until_tick(&self) -> u64 {
        Self::TICK_MS - self.carry_ms
    }

    /// Accumulate `elapsed_ms`; returns the number of whole seconds crossed.
    pub fn run(&mut self, elapsed_ms: u64) -> u64 {
        self.carry_ms += elapsed_ms;
        let ticks = self.carry_ms / Self::TICK_MS;
        self.carry_ms %= Self::TICK_MS;
        ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_in_due_order() {
        let mut timers = Scheduler::new();
        timers.schedule(Duration::from_millis(300), TimerEvent::NextStimulus);
        timers.schedule(Duration::from_millis(100), TimerEvent::BeginLevel);
        timers.schedule(Duration::from_millis(100), TimerEvent::SequenceFinished);

        assert_eq!(timers.pop_due(), None);
        timers.set_now(300);
        assert_eq!(timers.pop_due(), Some(TimerEvent::BeginLevel));
        assert_eq!(timers.pop_due(), Some(TimerEvent::SequenceFinished));
        assert_eq!(timers.pop_due(), Some(TimerEvent::NextStimulus));
        assert_eq!(timers.pop_due(), None);
    }

    #[test]
    fn invalidated_events_never_fire() {
        let mut timers = Scheduler::new();
        timers.schedule(Duration::from_millis(50), TimerEvent::ResponseWindowClosed);
        timers.invalidate();
        timers.schedule(Duration::from_millis(80), TimerEvent::NextStimulus);

        timers.set_now(100);
        assert_eq!(timers.pop_due(), Some(TimerEvent::NextStimulus));
        assert_eq!(timers.pop_due(), None);
        assert_eq!(timers.stale_discarded(), 1);
        assert_eq!(timers.pending(), 0);
    }

    #[test]
    fn fractional_delays_round_up() {
        let mut timers = Scheduler::new();
        timers.schedule(Duration::from_micros(1_500), TimerEvent::NextStimulus);
        assert_eq!(timers.next_due(), Some(2));

        timers.set_now(1);
        assert_eq!(timers.pop_due(), None);
        timers.set_now(2);
        assert_eq!(timers.pop_due(), Some(TimerEvent::NextStimulus));
    }

    #[test]
    fn clock_keeps_partial_seconds() {
        let mut clock = CountdownClock::default();
        assert_eq!(clock.run(600), 0);
        assert_eq!(clock.until_tick(), 400);
        assert_eq!(clock.run(2_500), 3);
        assert_eq!(clock.until_tick(), 900);
        clock.reset();
        assert_eq!(clock.until_tick(), 1_000);
    }
}
