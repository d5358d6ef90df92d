//! Shared timer configuration types for TEMPO
//!
//! This crate contains the serializable value types that are shared between
//! the timer engine (tempo-core) and any host that renders or persists it.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Constants
// ─────────────────────────────────────────────────────────────────────────────

/// Length of the pre-roll countdown before an interval run begins
pub const PRE_ROLL_SECONDS: u32 = 5;

/// EMOM rounds always last one minute; rest fills what effort leaves over
pub const EMOM_MINUTE_SECONDS: u32 = 60;

/// Seconds remaining at which the final-seconds cue starts firing (3, 2, 1)
pub const FINAL_SECONDS_CUE: u32 = 3;

// ─────────────────────────────────────────────────────────────────────────────
// Discipline
// ─────────────────────────────────────────────────────────────────────────────

/// The kind of workout a timer runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerDiscipline {
    Stopwatch,
    Countdown,
    Emom,
    Amrap,
    #[default]
    Tabata,
    Custom,
}

impl TimerDiscipline {
    pub const ALL: [TimerDiscipline; 6] = [
        TimerDiscipline::Stopwatch,
        TimerDiscipline::Countdown,
        TimerDiscipline::Emom,
        TimerDiscipline::Amrap,
        TimerDiscipline::Tabata,
        TimerDiscipline::Custom,
    ];

    /// Human readable label shown above the clock
    pub fn label(&self) -> &'static str {
        match self {
            TimerDiscipline::Stopwatch => "Stopwatch",
            TimerDiscipline::Countdown => "Countdown",
            TimerDiscipline::Emom => "EMOM",
            TimerDiscipline::Amrap => "AMRAP",
            TimerDiscipline::Tabata => "Tabata",
            TimerDiscipline::Custom => "Custom",
        }
    }

    /// Returns true for disciplines made of effort/rest rounds.
    /// These get the pre-roll countdown on `start`.
    pub fn is_interval(&self) -> bool {
        matches!(
            self,
            TimerDiscipline::Emom | TimerDiscipline::Tabata | TimerDiscipline::Custom
        )
    }

    /// Returns true if the clock counts upward instead of down
    pub fn counts_up(&self) -> bool {
        matches!(self, TimerDiscipline::Stopwatch)
    }

    /// Returns true if the discipline shows a round counter of any kind
    pub fn has_rounds(&self) -> bool {
        self.is_interval() || matches!(self, TimerDiscipline::Amrap)
    }
}

impl std::fmt::Display for TimerDiscipline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TimerDiscipline {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stopwatch" => Ok(TimerDiscipline::Stopwatch),
            "countdown" => Ok(TimerDiscipline::Countdown),
            "emom" => Ok(TimerDiscipline::Emom),
            "amrap" => Ok(TimerDiscipline::Amrap),
            "tabata" => Ok(TimerDiscipline::Tabata),
            "custom" => Ok(TimerDiscipline::Custom),
            other => Err(format!("unknown timer discipline '{other}'")),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Runtime discriminators
// ─────────────────────────────────────────────────────────────────────────────

/// Sub-state within a round of an interval discipline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    #[default]
    Effort,
    Rest,
}

impl Phase {
    pub fn label(&self) -> &'static str {
        match self {
            Phase::Effort => "Effort",
            Phase::Rest => "Rest",
        }
    }
}

/// Primary state of a timer run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    /// Configured but never started (or reset)
    #[default]
    Default,
    /// Pre-roll countdown in progress
    Starting,
    Running,
    Paused,
    Completed,
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration of a single timer run.
///
/// Fields that don't apply to the active discipline are ignored, so a
/// countdown config may leave `effort_seconds` and friends at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    #[serde(default)]
    pub discipline: TimerDiscipline,

    /// Effort phase length (emom, tabata, custom)
    #[serde(default)]
    pub effort_seconds: u32,

    /// Rest phase length (tabata, custom)
    #[serde(default)]
    pub rest_seconds: u32,

    /// Total run length (countdown, amrap)
    #[serde(default)]
    pub duration_seconds: u32,

    /// Number of rounds (emom, tabata, custom)
    #[serde(default)]
    pub total_rounds: u32,
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self::tabata()
    }
}

impl TimerConfig {
    /// Classic Tabata: 20s on, 10s off, 8 rounds
    pub fn tabata() -> Self {
        Self {
            discipline: TimerDiscipline::Tabata,
            effort_seconds: 20,
            rest_seconds: 10,
            duration_seconds: 0,
            total_rounds: 8,
        }
    }

    /// Default configuration for each discipline
    pub fn preset(discipline: TimerDiscipline) -> Self {
        let blank = Self {
            discipline,
            effort_seconds: 0,
            rest_seconds: 0,
            duration_seconds: 0,
            total_rounds: 0,
        };
        match discipline {
            TimerDiscipline::Stopwatch => blank,
            TimerDiscipline::Countdown => Self {
                duration_seconds: 5 * 60,
                ..blank
            },
            TimerDiscipline::Amrap => Self {
                duration_seconds: 10 * 60,
                ..blank
            },
            TimerDiscipline::Emom => Self {
                effort_seconds: 40,
                total_rounds: 10,
                ..blank
            },
            TimerDiscipline::Tabata => Self::tabata(),
            TimerDiscipline::Custom => Self {
                effort_seconds: 30,
                rest_seconds: 15,
                total_rounds: 5,
                ..blank
            },
        }
    }

    /// Rest length that actually applies to this discipline.
    ///
    /// EMOM derives rest from the minute; other interval disciplines use the
    /// configured value. Non-interval disciplines have no rest.
    pub fn effective_rest_seconds(&self) -> u32 {
        match self.discipline {
            TimerDiscipline::Emom => EMOM_MINUTE_SECONDS.saturating_sub(self.effort_seconds),
            TimerDiscipline::Tabata | TimerDiscipline::Custom => self.rest_seconds,
            _ => 0,
        }
    }

    /// Turn an edited Tabata into a custom interval timer.
    ///
    /// Timings are kept; only the discipline changes. No-op for anything
    /// that isn't Tabata.
    pub fn reclassify_as_custom(&mut self) -> bool {
        if self.discipline == TimerDiscipline::Tabata {
            self.discipline = TimerDiscipline::Custom;
            true
        } else {
            false
        }
    }

    pub fn set_effort_seconds(&mut self, secs: u32) {
        self.effort_seconds = secs;
    }

    pub fn set_rest_seconds(&mut self, secs: u32) {
        self.rest_seconds = secs;
    }

    pub fn set_duration_seconds(&mut self, secs: u32) {
        self.duration_seconds = secs;
    }

    pub fn set_total_rounds(&mut self, rounds: u32) {
        self.total_rounds = rounds;
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Timer Store
// ─────────────────────────────────────────────────────────────────────────────

/// Persisted timer selection.
///
/// Holds the configuration the user last picked and whether the compact
/// widget should follow them across screens. Runtime state never lives here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerStore {
    #[serde(default)]
    pub selected: TimerConfig,

    #[serde(default)]
    pub show_widget: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emom_rest_fills_the_minute() {
        let mut cfg = TimerConfig::preset(TimerDiscipline::Emom);
        cfg.set_effort_seconds(15);
        assert_eq!(cfg.effective_rest_seconds(), 45);
    }

    #[test]
    fn rest_ignored_outside_interval_disciplines() {
        let cfg = TimerConfig {
            rest_seconds: 30,
            ..TimerConfig::preset(TimerDiscipline::Countdown)
        };
        assert_eq!(cfg.effective_rest_seconds(), 0);
    }

    #[test]
    fn setters_leave_discipline_alone() {
        let mut cfg = TimerConfig::tabata();
        cfg.set_effort_seconds(30);
        cfg.set_total_rounds(4);
        assert_eq!(cfg.discipline, TimerDiscipline::Tabata);

        assert!(cfg.reclassify_as_custom());
        assert_eq!(cfg.discipline, TimerDiscipline::Custom);
        assert_eq!(cfg.effort_seconds, 30);
        assert_eq!(cfg.total_rounds, 4);
    }

    #[test]
    fn reclassify_only_touches_tabata() {
        let mut cfg = TimerConfig::preset(TimerDiscipline::Amrap);
        assert!(!cfg.reclassify_as_custom());
        assert_eq!(cfg.discipline, TimerDiscipline::Amrap);
    }

    #[test]
    fn discipline_parses_case_insensitively() {
        assert_eq!("EMOM".parse::<TimerDiscipline>(), Ok(TimerDiscipline::Emom));
        assert_eq!(" amrap ".parse::<TimerDiscipline>(), Ok(TimerDiscipline::Amrap));
        assert!("pilates".parse::<TimerDiscipline>().is_err());
    }

    #[test]
    fn missing_fields_deserialize_as_zero() {
        let cfg: TimerConfig = toml::from_str(
            r#"
            discipline = "countdown"
            duration_seconds = 90
            "#,
        )
        .unwrap();
        assert_eq!(cfg.discipline, TimerDiscipline::Countdown);
        assert_eq!(cfg.duration_seconds, 90);
        assert_eq!(cfg.effort_seconds, 0);
        assert_eq!(cfg.total_rounds, 0);
    }

    #[test]
    fn missing_discipline_deserializes_as_tabata() {
        let cfg: TimerConfig = toml::from_str("effort_seconds = 25").unwrap();
        assert_eq!(cfg.discipline, TimerDiscipline::Tabata);
        assert_eq!(cfg.effort_seconds, 25);
        assert_eq!(cfg.total_rounds, 0);
    }
}
