//! Phase and round transition rules
//!
//! Pure functions only. The engine calls [`transition`] when the running
//! phase reaches zero and applies whatever comes back.
//!
//! | Discipline        | On reaching zero                                        |
//! |-------------------|---------------------------------------------------------|
//! | stopwatch         | never reaches zero (counts up)                          |
//! | countdown, amrap  | completed                                               |
//! | emom              | effort → rest (60 − effort), rest → next round / done   |
//! | tabata, custom    | effort → rest, rest → next round / done                 |
//!
//! A round only counts as done once its rest has elapsed. Zero-length rests
//! are skipped straight to the end-of-round outcome.

use tempo_types::{Phase, TimerConfig, TimerDiscipline};

/// Result of a phase reaching zero
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseTransition {
    pub next_phase: Phase,
    pub next_remaining: u32,
    pub next_round: u32,
    pub completed: bool,
    pub phase_changed: bool,
    pub round_changed: bool,
}

impl PhaseTransition {
    fn unchanged(phase: Phase, remaining: u32, round: u32) -> Self {
        Self {
            next_phase: phase,
            next_remaining: remaining,
            next_round: round,
            completed: false,
            phase_changed: false,
            round_changed: false,
        }
    }

    fn completed(phase: Phase, round: u32) -> Self {
        Self {
            completed: true,
            ..Self::unchanged(phase, 0, round)
        }
    }
}

/// Seconds on the clock before the first tick
pub fn initial_remaining(config: &TimerConfig) -> u32 {
    phase_duration(config, Phase::Effort)
}

/// Full length of `phase` under `config`. Zero means "no fixed length".
pub fn phase_duration(config: &TimerConfig, phase: Phase) -> u32 {
    match config.discipline {
        TimerDiscipline::Stopwatch => 0,
        TimerDiscipline::Countdown | TimerDiscipline::Amrap => config.duration_seconds,
        TimerDiscipline::Emom | TimerDiscipline::Tabata | TimerDiscipline::Custom => match phase {
            Phase::Effort => config.effort_seconds,
            Phase::Rest => config.effective_rest_seconds(),
        },
    }
}

/// Compute what follows a phase that just hit zero.
pub fn transition(config: &TimerConfig, phase: Phase, round: u32) -> PhaseTransition {
    match config.discipline {
        TimerDiscipline::Stopwatch => PhaseTransition::unchanged(phase, 0, round),
        TimerDiscipline::Countdown | TimerDiscipline::Amrap => {
            PhaseTransition::completed(phase, round)
        }
        TimerDiscipline::Emom | TimerDiscipline::Tabata | TimerDiscipline::Custom => {
            interval_transition(config, phase, round)
        }
    }
}

fn interval_transition(config: &TimerConfig, phase: Phase, round: u32) -> PhaseTransition {
    if phase == Phase::Effort {
        let rest = phase_duration(config, Phase::Rest);
        if rest > 0 {
            return PhaseTransition {
                next_phase: Phase::Rest,
                next_remaining: rest,
                next_round: round,
                completed: false,
                phase_changed: true,
                round_changed: false,
            };
        }
    }

    // Rest elapsed (or there was none): the round is done
    if round + 1 >= config.total_rounds {
        return PhaseTransition::completed(phase, round);
    }

    PhaseTransition {
        next_phase: Phase::Effort,
        next_remaining: phase_duration(config, Phase::Effort),
        next_round: round + 1,
        completed: false,
        phase_changed: phase != Phase::Effort,
        round_changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(effort: u32, rest: u32, rounds: u32) -> TimerConfig {
        TimerConfig {
            discipline: TimerDiscipline::Custom,
            effort_seconds: effort,
            rest_seconds: rest,
            duration_seconds: 0,
            total_rounds: rounds,
        }
    }

    #[test]
    fn effort_moves_to_rest() {
        let t = transition(&TimerConfig::tabata(), Phase::Effort, 0);
        assert_eq!(t.next_phase, Phase::Rest);
        assert_eq!(t.next_remaining, 10);
        assert_eq!(t.next_round, 0);
        assert!(t.phase_changed);
        assert!(!t.round_changed);
        assert!(!t.completed);
    }

    #[test]
    fn rest_starts_next_round() {
        let t = transition(&TimerConfig::tabata(), Phase::Rest, 2);
        assert_eq!(t.next_phase, Phase::Effort);
        assert_eq!(t.next_remaining, 20);
        assert_eq!(t.next_round, 3);
        assert!(t.phase_changed);
        assert!(t.round_changed);
    }

    #[test]
    fn last_rest_completes() {
        let t = transition(&TimerConfig::tabata(), Phase::Rest, 7);
        assert!(t.completed);
        assert_eq!(t.next_remaining, 0);
        assert_eq!(t.next_round, 7);
    }

    #[test]
    fn last_effort_still_gets_its_rest() {
        let t = transition(&TimerConfig::tabata(), Phase::Effort, 7);
        assert!(!t.completed);
        assert_eq!(t.next_phase, Phase::Rest);
    }

    #[test]
    fn emom_rest_is_derived() {
        let cfg = TimerConfig {
            effort_seconds: 15,
            total_rounds: 5,
            ..TimerConfig::preset(TimerDiscipline::Emom)
        };
        let t = transition(&cfg, Phase::Effort, 0);
        assert_eq!(t.next_phase, Phase::Rest);
        assert_eq!(t.next_remaining, 45);
    }

    #[test]
    fn zero_rest_skips_to_next_round() {
        let t = transition(&custom(30, 0, 3), Phase::Effort, 0);
        assert_eq!(t.next_phase, Phase::Effort);
        assert_eq!(t.next_remaining, 30);
        assert_eq!(t.next_round, 1);
        assert!(!t.phase_changed);
        assert!(t.round_changed);

        let t = transition(&custom(30, 0, 3), Phase::Effort, 2);
        assert!(t.completed);
    }

    #[test]
    fn full_minute_emom_has_no_rest() {
        let cfg = TimerConfig {
            effort_seconds: 60,
            total_rounds: 2,
            ..TimerConfig::preset(TimerDiscipline::Emom)
        };
        let t = transition(&cfg, Phase::Effort, 0);
        assert_eq!(t.next_phase, Phase::Effort);
        assert_eq!(t.next_round, 1);
    }

    #[test]
    fn countdown_and_amrap_complete_at_zero() {
        for discipline in [TimerDiscipline::Countdown, TimerDiscipline::Amrap] {
            let t = transition(&TimerConfig::preset(discipline), Phase::Effort, 0);
            assert!(t.completed, "{discipline}");
        }
    }

    #[test]
    fn stopwatch_never_transitions() {
        let t = transition(&TimerConfig::preset(TimerDiscipline::Stopwatch), Phase::Effort, 0);
        assert!(!t.completed);
        assert!(!t.phase_changed);
        assert!(!t.round_changed);
    }

    #[test]
    fn initial_remaining_per_discipline() {
        assert_eq!(initial_remaining(&TimerConfig::preset(TimerDiscipline::Stopwatch)), 0);
        assert_eq!(initial_remaining(&TimerConfig::preset(TimerDiscipline::Countdown)), 300);
        assert_eq!(initial_remaining(&TimerConfig::preset(TimerDiscipline::Amrap)), 600);
        assert_eq!(initial_remaining(&TimerConfig::preset(TimerDiscipline::Emom)), 40);
        assert_eq!(initial_remaining(&TimerConfig::tabata()), 20);
    }
}
