//! Workout timer engine
//!
//! One state machine for every discipline. Lifecycle plumbing (pre-roll,
//! pause, resume, reset, teardown) is shared; what happens when a phase runs
//! out is delegated to [`policy::transition`].
//!
//! # Lifecycle
//!
//! - `Default` → `Starting` on `start` for emom/tabata/custom
//! - `Default` → `Running` on `start` for the rest, or `start_without_countdown`
//! - `Starting` → `Running` once the pre-roll reaches zero
//! - `Running` ⇄ `Paused` via `pause` / `resume`
//! - `Running` → `Completed` when the last phase elapses
//!
//! `reset` returns to `Default` from anywhere. Every exit from `Starting` or
//! `Running` disarms the clock it was using, and dropping the engine disarms
//! whatever is left.

use tempo_types::{FINAL_SECONDS_CUE, Lifecycle, Phase, TimerConfig, TimerDiscipline};

use super::error::{ConfigError, validate};
use super::observer::TimerObserver;
use super::policy;
use super::state::TimerRuntimeState;
use crate::clock::{ArmedClocks, ClockChannel, ClockSource, Tick};

pub struct TimerEngine<C: ClockSource, O: TimerObserver = ()> {
    config: TimerConfig,
    state: TimerRuntimeState,
    clock: C,
    armed: ArmedClocks,
    observer: O,
}

impl<C: ClockSource> TimerEngine<C> {
    /// Create an engine without an observer
    pub fn new(config: TimerConfig, clock: C) -> Result<Self, ConfigError> {
        Self::with_observer(config, clock, ())
    }
}

impl<C: ClockSource, O: TimerObserver> TimerEngine<C, O> {
    /// Create an engine that reports transitions to `observer`.
    ///
    /// Fails if the fields the discipline relies on can't produce a run
    /// (zero rounds, zero effort, ...).
    pub fn with_observer(config: TimerConfig, clock: C, observer: O) -> Result<Self, ConfigError> {
        validate(&config)?;
        Ok(Self {
            config,
            state: TimerRuntimeState::initial(&config),
            clock,
            armed: ArmedClocks::default(),
            observer,
        })
    }

    // ─── Commands ───────────────────────────────────────────────────────────

    /// Begin a run. Interval disciplines go through the pre-roll first.
    pub fn start(&mut self) {
        if self.state.lifecycle != Lifecycle::Default {
            self.ignored("start");
            return;
        }

        if self.config.discipline.is_interval() {
            self.state.lifecycle = Lifecycle::Starting;
            self.armed.arm(&mut self.clock, ClockChannel::PreRoll);
            tracing::debug!(
                discipline = %self.config.discipline,
                countdown = self.state.starting_countdown,
                "Pre-roll started"
            );
        } else {
            self.begin_running();
        }
    }

    /// Begin a run immediately, skipping (or cutting short) the pre-roll.
    pub fn start_without_countdown(&mut self) {
        match self.state.lifecycle {
            Lifecycle::Default | Lifecycle::Starting => self.begin_running(),
            _ => self.ignored("start_without_countdown"),
        }
    }

    /// Pause a running timer.
    ///
    /// Pausing during the pre-roll cancels the run outright.
    pub fn pause(&mut self) {
        match self.state.lifecycle {
            Lifecycle::Running => {
                self.armed.disarm(&mut self.clock, ClockChannel::Main);
                self.state.lifecycle = Lifecycle::Paused;
                tracing::debug!(remaining = self.state.remaining_seconds, "Timer paused");
            }
            Lifecycle::Starting => {
                tracing::debug!("Pause during pre-roll, cancelling run");
                self.reset();
            }
            _ => self.ignored("pause"),
        }
    }

    pub fn resume(&mut self) {
        if self.state.lifecycle != Lifecycle::Paused {
            self.ignored("resume");
            return;
        }
        self.armed.arm(&mut self.clock, ClockChannel::Main);
        self.state.lifecycle = Lifecycle::Running;
        tracing::debug!(remaining = self.state.remaining_seconds, "Timer resumed");
    }

    /// Cancel everything and return to the configured starting point.
    pub fn reset(&mut self) {
        self.armed.disarm_all(&mut self.clock);
        self.state = TimerRuntimeState::initial(&self.config);
        tracing::debug!(discipline = %self.config.discipline, "Timer reset");
    }

    /// Tally one AMRAP round. Works in any lifecycle.
    pub fn increment_round(&mut self) {
        if !self.is_amrap() {
            self.ignored("increment_round");
            return;
        }
        self.state.rounds_completed = self.state.rounds_completed.saturating_add(1);
    }

    /// Take back one AMRAP round, never below zero.
    pub fn decrement_round(&mut self) {
        if !self.is_amrap() {
            self.ignored("decrement_round");
            return;
        }
        self.state.rounds_completed = self.state.rounds_completed.saturating_sub(1);
    }

    // ─── Clock ──────────────────────────────────────────────────────────────

    /// Process one tick from the clock source.
    ///
    /// Returns false if the tick was stale (its channel has been disarmed or
    /// re-armed since it was produced) and therefore ignored.
    pub fn handle_tick(&mut self, tick: Tick) -> bool {
        if !self.armed.accepts(tick) {
            tracing::trace!(?tick, "Dropping stale tick");
            return false;
        }

        match tick.channel {
            ClockChannel::PreRoll => self.tick_pre_roll(),
            ClockChannel::Main => self.tick_main(),
        }
        true
    }

    fn tick_pre_roll(&mut self) {
        if self.state.lifecycle != Lifecycle::Starting {
            return;
        }
        self.state.starting_countdown = self.state.starting_countdown.saturating_sub(1);
        if self.state.starting_countdown == 0 {
            self.begin_running();
        }
    }

    fn tick_main(&mut self) {
        if self.state.lifecycle != Lifecycle::Running {
            return;
        }

        if self.config.discipline.counts_up() {
            self.state.remaining_seconds = self.state.remaining_seconds.saturating_add(1);
            return;
        }

        self.state.remaining_seconds = self.state.remaining_seconds.saturating_sub(1);
        match self.state.remaining_seconds {
            0 => self.apply_transition(),
            secs if secs <= FINAL_SECONDS_CUE => self.observer.on_final_seconds(secs),
            _ => {}
        }
    }

    fn apply_transition(&mut self) {
        let t = policy::transition(&self.config, self.state.phase, self.state.round);
        self.state.phase = t.next_phase;
        self.state.remaining_seconds = t.next_remaining;
        self.state.round = t.next_round;

        if t.completed {
            self.armed.disarm(&mut self.clock, ClockChannel::Main);
            self.state.lifecycle = Lifecycle::Completed;
            tracing::info!(discipline = %self.config.discipline, "Workout completed");
            self.observer.on_completed();
            return;
        }

        if t.phase_changed {
            tracing::debug!(phase = ?t.next_phase, round = t.next_round, "Phase changed");
            self.observer.on_phase_change(t.next_phase);
        }
        if t.round_changed {
            tracing::debug!(round = t.next_round, "Round changed");
            self.observer.on_round_change(t.next_round);
        }
    }

    fn begin_running(&mut self) {
        self.armed.disarm(&mut self.clock, ClockChannel::PreRoll);
        self.state.lifecycle = Lifecycle::Running;
        self.armed.arm(&mut self.clock, ClockChannel::Main);
        tracing::info!(discipline = %self.config.discipline, "Timer started");
        self.observer.on_started();
    }

    fn is_amrap(&self) -> bool {
        self.config.discipline == TimerDiscipline::Amrap
    }

    fn ignored(&self, command: &str) {
        tracing::debug!(command, lifecycle = ?self.state.lifecycle, "Command ignored");
    }

    // ─── Accessors ──────────────────────────────────────────────────────────

    pub fn config(&self) -> &TimerConfig {
        &self.config
    }

    pub fn state(&self) -> TimerRuntimeState {
        self.state
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.state.lifecycle
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn round(&self) -> u32 {
        self.state.round
    }

    pub fn rounds_completed(&self) -> u32 {
        self.state.rounds_completed
    }

    pub fn remaining_seconds(&self) -> u32 {
        self.state.remaining_seconds
    }

    pub fn starting_countdown(&self) -> u32 {
        self.state.starting_countdown
    }

    pub fn is_paused(&self) -> bool {
        self.state.lifecycle == Lifecycle::Paused
    }

    /// Returns true if `channel` currently has an armed handle
    pub fn is_armed(&self, channel: ClockChannel) -> bool {
        self.armed.is_armed(channel)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn observer(&self) -> &O {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }
}

impl<C: ClockSource, O: TimerObserver> Drop for TimerEngine<C, O> {
    fn drop(&mut self) {
        self.armed.disarm_all(&mut self.clock);
    }
}
