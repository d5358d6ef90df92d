//! Callbacks fired on lifecycle, phase and round transitions

use tempo_types::Phase;

/// Trait for hosts that react to timer transitions.
/// Every method is called synchronously from inside the tick or command
/// that caused it, at most once per transition.
pub trait TimerObserver {
    /// Main clock armed and the run is live
    fn on_started(&mut self) {}

    /// Final phase elapsed
    fn on_completed(&mut self) {}

    fn on_phase_change(&mut self, _phase: Phase) {}

    /// Round advanced (0-based index of the new round)
    fn on_round_change(&mut self, _round: u32) {}

    /// A counting-down phase reached 3, 2 or 1 seconds remaining
    fn on_final_seconds(&mut self, _seconds: u32) {}
}

/// No-op observer
impl TimerObserver for () {}

/// A recorded observer callback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started,
    Completed,
    PhaseChanged(Phase),
    RoundChanged(u32),
    FinalSeconds(u32),
}

/// Observer that records every callback in order.
///
/// Hosts that prefer polling over callbacks drain it after each tick.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    events: Vec<TimerEvent>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[TimerEvent] {
        &self.events
    }

    pub fn drain(&mut self) -> Vec<TimerEvent> {
        std::mem::take(&mut self.events)
    }

    /// Number of times `event` was recorded
    pub fn count(&self, event: TimerEvent) -> usize {
        self.events.iter().filter(|e| **e == event).count()
    }
}

impl TimerObserver for EventLog {
    fn on_started(&mut self) {
        self.events.push(TimerEvent::Started);
    }

    fn on_completed(&mut self) {
        self.events.push(TimerEvent::Completed);
    }

    fn on_phase_change(&mut self, phase: Phase) {
        self.events.push(TimerEvent::PhaseChanged(phase));
    }

    fn on_round_change(&mut self, round: u32) {
        self.events.push(TimerEvent::RoundChanged(round));
    }

    fn on_final_seconds(&mut self, seconds: u32) {
        self.events.push(TimerEvent::FinalSeconds(seconds));
    }
}
