pub mod clock;
pub mod store;
pub mod timer;

// Re-exports for convenience
pub use clock::{ClockChannel, ClockSource, IntervalClock, ManualClock, Tick};
pub use store::{StoreError, TimerStore, TimerStoreExt};
pub use tempo_types::{
    EMOM_MINUTE_SECONDS, FINAL_SECONDS_CUE, Lifecycle, PRE_ROLL_SECONDS, Phase, TimerConfig,
    TimerDiscipline,
};
pub use timer::{
    ConfigError, EventLog, TimerEngine, TimerEvent, TimerObserver, TimerRuntimeState,
    TimerSnapshot,
};
