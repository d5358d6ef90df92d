//! Tick sources
//!
//! A clock source turns "one second elapsed" into a [`Tick`] the engine can
//! consume. The engine owns exactly one source and is the only caller of
//! [`ClockSource::arm`] / [`ClockSource::disarm`].
//!
//! # Channels
//!
//! - **Main**: drives the running timer
//! - **PreRoll**: drives the 5 second countdown before an interval run
//!
//! Every arm call carries a fresh generation number. Ticks echo it back, so
//! a tick emitted by a clock that has since been disarmed (or re-armed) is
//! recognisably stale and gets dropped.

mod interval;
mod manual;

pub use interval::IntervalClock;
pub use manual::ManualClock;

/// Independent 1 Hz sources an engine can arm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClockChannel {
    Main,
    PreRoll,
}

impl ClockChannel {
    pub const ALL: [ClockChannel; 2] = [ClockChannel::Main, ClockChannel::PreRoll];
}

/// One elapsed second on a channel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tick {
    pub channel: ClockChannel,
    /// Generation of the arm call that produced this tick
    pub generation: u64,
}

/// Something that can fire a tick once per second while armed.
pub trait ClockSource {
    /// Start ticking on `channel`, tagging every tick with `generation`.
    ///
    /// Callers disarm before re-arming; implementations may still replace an
    /// existing handle for the channel rather than run two side by side.
    fn arm(&mut self, channel: ClockChannel, generation: u64);

    /// Stop ticking on `channel`. Disarming an idle channel does nothing.
    fn disarm(&mut self, channel: ClockChannel);
}

/// Per-channel armed handles, owned by the engine.
///
/// This is the single source of truth for what is armed; the clock source is
/// only told about changes.
#[derive(Debug, Default)]
pub(crate) struct ArmedClocks {
    main: Option<u64>,
    pre_roll: Option<u64>,
    next_generation: u64,
}

impl ArmedClocks {
    fn slot(&mut self, channel: ClockChannel) -> &mut Option<u64> {
        match channel {
            ClockChannel::Main => &mut self.main,
            ClockChannel::PreRoll => &mut self.pre_roll,
        }
    }

    pub(crate) fn generation(&self, channel: ClockChannel) -> Option<u64> {
        match channel {
            ClockChannel::Main => self.main,
            ClockChannel::PreRoll => self.pre_roll,
        }
    }

    pub(crate) fn is_armed(&self, channel: ClockChannel) -> bool {
        self.generation(channel).is_some()
    }

    /// Returns true if `tick` came from the currently armed handle
    pub(crate) fn accepts(&self, tick: Tick) -> bool {
        self.generation(tick.channel) == Some(tick.generation)
    }

    /// Arm `channel`, disarming any previous handle first.
    pub(crate) fn arm<C: ClockSource>(&mut self, clock: &mut C, channel: ClockChannel) {
        if self.is_armed(channel) {
            tracing::warn!(?channel, "Clock already armed, replacing handle");
            self.disarm(clock, channel);
        }
        self.next_generation += 1;
        let generation = self.next_generation;
        *self.slot(channel) = Some(generation);
        clock.arm(channel, generation);
    }

    pub(crate) fn disarm<C: ClockSource>(&mut self, clock: &mut C, channel: ClockChannel) {
        if self.slot(channel).take().is_some() {
            clock.disarm(channel);
        }
    }

    pub(crate) fn disarm_all<C: ClockSource>(&mut self, clock: &mut C) {
        for channel in ClockChannel::ALL {
            self.disarm(clock, channel);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rearming_replaces_handle() {
        let mut clock = ManualClock::new();
        let mut armed = ArmedClocks::default();

        armed.arm(&mut clock, ClockChannel::Main);
        let first = armed.generation(ClockChannel::Main).unwrap();
        armed.arm(&mut clock, ClockChannel::Main);
        let second = armed.generation(ClockChannel::Main).unwrap();

        assert_ne!(first, second);
        assert_eq!(clock.max_concurrent(ClockChannel::Main), 1);
        assert!(!armed.accepts(Tick { channel: ClockChannel::Main, generation: first }));
        assert!(armed.accepts(Tick { channel: ClockChannel::Main, generation: second }));
    }

    #[test]
    fn disarm_is_idempotent() {
        let mut clock = ManualClock::new();
        let mut armed = ArmedClocks::default();

        armed.arm(&mut clock, ClockChannel::PreRoll);
        armed.disarm(&mut clock, ClockChannel::PreRoll);
        armed.disarm(&mut clock, ClockChannel::PreRoll);

        assert_eq!(clock.disarm_count(ClockChannel::PreRoll), 1);
        assert!(!armed.is_armed(ClockChannel::PreRoll));
    }

    #[test]
    fn channels_are_independent() {
        let mut clock = ManualClock::new();
        let mut armed = ArmedClocks::default();

        armed.arm(&mut clock, ClockChannel::PreRoll);
        armed.arm(&mut clock, ClockChannel::Main);
        armed.disarm(&mut clock, ClockChannel::PreRoll);

        assert!(armed.is_armed(ClockChannel::Main));
        assert!(!armed.is_armed(ClockChannel::PreRoll));
    }
}
