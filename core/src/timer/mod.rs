//! Workout timer
//!
//! This module provides:
//! - **Policy**: pure phase/round transition rules per discipline
//! - **Engine**: the state machine that owns runtime state and clock handles
//! - **Observer**: callbacks fired on start, completion, phase and round changes
//! - **Display**: formatted time, tab labels and round text derived from state
//!
//! # Disciplines
//!
//! - Stopwatch (counts up until reset)
//! - Countdown and AMRAP (single phase; AMRAP adds a manual round tally)
//! - EMOM (effort, then rest for the remainder of the minute)
//! - Tabata and custom (effort/rest rounds)

mod display;
mod engine;
mod error;
mod observer;
pub mod policy;
mod state;


pub use display::{
    TimerSnapshot, formatted_minutes, formatted_seconds, formatted_time, phase_tabs, progress,
    round_text, total_seconds,
};
pub use engine::TimerEngine;
pub use error::{ConfigError, validate};
pub use observer::{EventLog, TimerEvent, TimerObserver};
pub use policy::PhaseTransition;
pub use state::TimerRuntimeState;
