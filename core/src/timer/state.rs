use serde::Serialize;
use tempo_types::{Lifecycle, PRE_ROLL_SECONDS, Phase, TimerConfig};

use super::policy;

/// Mutable runtime state of one timer run.
///
/// Owned by the engine; hosts only ever see copies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TimerRuntimeState {
    pub lifecycle: Lifecycle,

    /// Seconds left in the current phase (elapsed seconds for a stopwatch)
    pub remaining_seconds: u32,

    /// Only meaningful for interval disciplines
    pub phase: Phase,

    /// 0-based round index for interval disciplines
    pub round: u32,

    /// User-tallied rounds, AMRAP only
    pub rounds_completed: u32,

    /// Pre-roll seconds left while `Starting`
    pub starting_countdown: u32,
}

impl TimerRuntimeState {
    /// State of a freshly constructed (or reset) engine
    pub fn initial(config: &TimerConfig) -> Self {
        Self {
            lifecycle: Lifecycle::Default,
            remaining_seconds: policy::initial_remaining(config),
            phase: Phase::Effort,
            round: 0,
            rounds_completed: 0,
            starting_countdown: PRE_ROLL_SECONDS,
        }
    }
}
