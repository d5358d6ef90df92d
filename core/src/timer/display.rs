//! Derived, read-only values for presentation
//!
//! Nothing here is stored; every value is recomputed from the config and the
//! current runtime state.

use serde::Serialize;
use tempo_types::{Lifecycle, Phase, TimerConfig, TimerDiscipline};

use super::engine::TimerEngine;
use super::observer::TimerObserver;
use super::policy;
use super::state::TimerRuntimeState;
use crate::clock::ClockSource;

/// Zero-padded minutes of `seconds`
pub fn formatted_minutes(seconds: u32) -> String {
    format!("{:02}", seconds / 60)
}

/// Zero-padded seconds-of-minute of `seconds`
pub fn formatted_seconds(seconds: u32) -> String {
    format!("{:02}", seconds % 60)
}

/// "MM:SS"
pub fn formatted_time(seconds: u32) -> String {
    format!("{}:{}", formatted_minutes(seconds), formatted_seconds(seconds))
}

/// Full length of the active phase, 0 once completed or for a stopwatch
pub fn total_seconds(config: &TimerConfig, state: &TimerRuntimeState) -> u32 {
    if state.lifecycle == Lifecycle::Completed {
        return 0;
    }
    policy::phase_duration(config, state.phase)
}

/// Fraction of the active phase already elapsed (0.0 ..= 1.0)
pub fn progress(config: &TimerConfig, state: &TimerRuntimeState) -> f32 {
    if state.lifecycle == Lifecycle::Completed {
        return 1.0;
    }
    let total = total_seconds(config, state);
    if total == 0 {
        return 0.0;
    }
    let elapsed = total.saturating_sub(state.remaining_seconds);
    (elapsed as f32 / total as f32).clamp(0.0, 1.0)
}

/// Effort/rest tab labels, Tabata and custom only
pub fn phase_tabs(config: &TimerConfig) -> Option<[String; 2]> {
    match config.discipline {
        TimerDiscipline::Tabata | TimerDiscipline::Custom => Some([
            format!("{} {}s", Phase::Effort.label(), config.effort_seconds),
            format!("{} {}s", Phase::Rest.label(), config.rest_seconds),
        ]),
        _ => None,
    }
}

/// Round counter line. None for disciplines without rounds.
pub fn round_text(config: &TimerConfig, state: &TimerRuntimeState) -> Option<String> {
    match config.discipline {
        TimerDiscipline::Amrap => Some(format!("{} rounds", state.rounds_completed)),
        d if d.is_interval() => Some(format!("Round {}/{}", state.round + 1, config.total_rounds)),
        _ => None,
    }
}

/// Everything a host needs to render one frame of the timer
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub discipline: TimerDiscipline,
    pub label: &'static str,
    pub lifecycle: Lifecycle,
    pub phase: Phase,
    pub round: u32,
    pub rounds_completed: u32,
    pub remaining_seconds: u32,
    pub starting_countdown: u32,
    pub minutes: String,
    pub seconds: String,
    pub total_seconds: u32,
    pub progress: f32,
    pub phase_tabs: Option<[String; 2]>,
    pub round_text: Option<String>,
    pub is_paused: bool,
}

impl TimerSnapshot {
    pub fn capture(config: &TimerConfig, state: &TimerRuntimeState) -> Self {
        Self {
            discipline: config.discipline,
            label: config.discipline.label(),
            lifecycle: state.lifecycle,
            phase: state.phase,
            round: state.round,
            rounds_completed: state.rounds_completed,
            remaining_seconds: state.remaining_seconds,
            starting_countdown: state.starting_countdown,
            minutes: formatted_minutes(state.remaining_seconds),
            seconds: formatted_seconds(state.remaining_seconds),
            total_seconds: total_seconds(config, state),
            progress: progress(config, state),
            phase_tabs: phase_tabs(config),
            round_text: round_text(config, state),
            is_paused: state.lifecycle == Lifecycle::Paused,
        }
    }

    /// "MM:SS"
    pub fn time(&self) -> String {
        format!("{}:{}", self.minutes, self.seconds)
    }
}

impl<C: ClockSource, O: TimerObserver> TimerEngine<C, O> {
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot::capture(self.config(), &self.state())
    }

    pub fn round_text(&self) -> Option<String> {
        round_text(self.config(), &self.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(remaining: u32) -> TimerRuntimeState {
        TimerRuntimeState {
            remaining_seconds: remaining,
            ..TimerRuntimeState::initial(&TimerConfig::tabata())
        }
    }

    #[test]
    fn formats_zero_padded() {
        assert_eq!(formatted_minutes(65), "01");
        assert_eq!(formatted_seconds(65), "05");
        assert_eq!(formatted_time(0), "00:00");
        assert_eq!(formatted_time(600), "10:00");
        assert_eq!(formatted_time(6001), "100:01");
    }

    #[test]
    fn tabata_tabs_and_round_text() {
        let cfg = TimerConfig::tabata();
        let st = TimerRuntimeState { round: 2, ..state(20) };

        assert_eq!(
            phase_tabs(&cfg),
            Some(["Effort 20s".to_string(), "Rest 10s".to_string()])
        );
        assert_eq!(round_text(&cfg, &st).as_deref(), Some("Round 3/8"));
    }

    #[test]
    fn emom_has_round_text_but_no_tabs() {
        let cfg = TimerConfig::preset(TimerDiscipline::Emom);
        assert_eq!(phase_tabs(&cfg), None);
        assert_eq!(round_text(&cfg, &state(40)).as_deref(), Some("Round 1/10"));
    }

    #[test]
    fn amrap_round_text_counts_tally() {
        let cfg = TimerConfig::preset(TimerDiscipline::Amrap);
        let st = TimerRuntimeState { rounds_completed: 4, ..state(100) };
        assert_eq!(round_text(&cfg, &st).as_deref(), Some("4 rounds"));
    }

    #[test]
    fn no_round_text_without_rounds() {
        for discipline in [TimerDiscipline::Stopwatch, TimerDiscipline::Countdown] {
            let cfg = TimerConfig::preset(discipline);
            assert_eq!(round_text(&cfg, &state(0)), None, "{discipline}");
        }
    }

    #[test]
    fn total_seconds_follows_phase() {
        let cfg = TimerConfig::tabata();
        assert_eq!(total_seconds(&cfg, &state(20)), 20);

        let rest = TimerRuntimeState { phase: Phase::Rest, ..state(10) };
        assert_eq!(total_seconds(&cfg, &rest), 10);

        let done = TimerRuntimeState { lifecycle: Lifecycle::Completed, ..state(0) };
        assert_eq!(total_seconds(&cfg, &done), 0);
    }

    #[test]
    fn progress_through_phase() {
        let cfg = TimerConfig::tabata();
        assert_eq!(progress(&cfg, &state(20)), 0.0);
        assert_eq!(progress(&cfg, &state(15)), 0.25);

        let done = TimerRuntimeState { lifecycle: Lifecycle::Completed, ..state(0) };
        assert_eq!(progress(&cfg, &done), 1.0);

        let stopwatch = TimerConfig::preset(TimerDiscipline::Stopwatch);
        assert_eq!(progress(&stopwatch, &state(42)), 0.0);
    }

    #[test]
    fn snapshot_reflects_state() {
        let cfg = TimerConfig::tabata();
        let st = TimerRuntimeState { lifecycle: Lifecycle::Paused, ..state(75) };
        let snap = TimerSnapshot::capture(&cfg, &st);

        assert_eq!(snap.label, "Tabata");
        assert_eq!(snap.time(), "01:15");
        assert!(snap.is_paused);
        assert_eq!(snap.round_text.as_deref(), Some("Round 1/8"));
    }
}
