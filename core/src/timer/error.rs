//! Error types for timer configuration

use tempo_types::{EMOM_MINUTE_SECONDS, TimerConfig, TimerDiscipline};
use thiserror::Error;

/// A configuration the engine refuses to run
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("{discipline} needs an effort phase of at least 1 second")]
    ZeroEffort { discipline: TimerDiscipline },

    #[error("{discipline} needs a duration of at least 1 second")]
    ZeroDuration { discipline: TimerDiscipline },

    #[error("{discipline} needs at least 1 round")]
    ZeroRounds { discipline: TimerDiscipline },

    #[error("EMOM effort of {effort_seconds}s does not fit in a 60s minute")]
    EmomEffortExceedsMinute { effort_seconds: u32 },
}

/// Check only the fields the discipline actually uses.
pub fn validate(config: &TimerConfig) -> Result<(), ConfigError> {
    let discipline = config.discipline;
    match discipline {
        TimerDiscipline::Stopwatch => Ok(()),
        TimerDiscipline::Countdown | TimerDiscipline::Amrap => {
            if config.duration_seconds == 0 {
                return Err(ConfigError::ZeroDuration { discipline });
            }
            Ok(())
        }
        TimerDiscipline::Emom | TimerDiscipline::Tabata | TimerDiscipline::Custom => {
            if config.effort_seconds == 0 {
                return Err(ConfigError::ZeroEffort { discipline });
            }
            if config.total_rounds == 0 {
                return Err(ConfigError::ZeroRounds { discipline });
            }
            if discipline == TimerDiscipline::Emom && config.effort_seconds > EMOM_MINUTE_SECONDS {
                return Err(ConfigError::EmomEffortExceedsMinute {
                    effort_seconds: config.effort_seconds,
                });
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets_are_valid() {
        for discipline in TimerDiscipline::ALL {
            assert_eq!(validate(&TimerConfig::preset(discipline)), Ok(()), "{discipline}");
        }
    }

    #[test]
    fn irrelevant_fields_are_not_checked() {
        // Countdown with no rounds or effort is fine
        let cfg = TimerConfig::preset(TimerDiscipline::Countdown);
        assert_eq!(cfg.total_rounds, 0);
        assert_eq!(validate(&cfg), Ok(()));

        // Tabata ignores a zero duration
        let cfg = TimerConfig::tabata();
        assert_eq!(cfg.duration_seconds, 0);
        assert_eq!(validate(&cfg), Ok(()));
    }

    #[test]
    fn zero_rounds_rejected() {
        let mut cfg = TimerConfig::preset(TimerDiscipline::Custom);
        cfg.set_total_rounds(0);
        assert_eq!(
            validate(&cfg),
            Err(ConfigError::ZeroRounds { discipline: TimerDiscipline::Custom })
        );
    }

    #[test]
    fn emom_effort_longer_than_a_minute_rejected() {
        let mut cfg = TimerConfig::preset(TimerDiscipline::Emom);
        cfg.set_effort_seconds(61);
        assert_eq!(
            validate(&cfg),
            Err(ConfigError::EmomEffortExceedsMinute { effort_seconds: 61 })
        );

        cfg.set_effort_seconds(60);
        assert_eq!(validate(&cfg), Ok(()));
    }

    #[test]
    fn amrap_without_duration_rejected() {
        let mut cfg = TimerConfig::preset(TimerDiscipline::Amrap);
        cfg.set_duration_seconds(0);
        assert_eq!(
            validate(&cfg),
            Err(ConfigError::ZeroDuration { discipline: TimerDiscipline::Amrap })
        );
    }
}
