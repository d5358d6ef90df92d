//! Deterministic clock for tests and simulations
//!
//! Nothing fires on its own. A driver asks for the tick the armed handle
//! would produce and feeds it to the engine, one call per simulated second.

use std::collections::HashMap;

use super::{ClockChannel, ClockSource, Tick};

#[derive(Debug, Default)]
struct ChannelStats {
    armed: Option<u64>,
    concurrent: u32,
    max_concurrent: u32,
    arm_count: u32,
    disarm_count: u32,
}

/// Hand-driven clock source.
///
/// Also keeps enough bookkeeping to catch duplicate arming: if the engine
/// ever armed a channel twice without disarming, `max_concurrent` would
/// exceed one.
#[derive(Debug, Default)]
pub struct ManualClock {
    channels: HashMap<ClockChannel, ChannelStats>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tick an armed channel would deliver after one second, if armed
    pub fn armed_tick(&self, channel: ClockChannel) -> Option<Tick> {
        self.channels
            .get(&channel)
            .and_then(|stats| stats.armed)
            .map(|generation| Tick { channel, generation })
    }

    pub fn is_armed(&self, channel: ClockChannel) -> bool {
        self.armed_tick(channel).is_some()
    }

    pub fn arm_count(&self, channel: ClockChannel) -> u32 {
        self.channels.get(&channel).map_or(0, |s| s.arm_count)
    }

    pub fn disarm_count(&self, channel: ClockChannel) -> u32 {
        self.channels.get(&channel).map_or(0, |s| s.disarm_count)
    }

    /// Highest number of simultaneously armed handles ever seen on `channel`
    pub fn max_concurrent(&self, channel: ClockChannel) -> u32 {
        self.channels.get(&channel).map_or(0, |s| s.max_concurrent)
    }
}

impl ClockSource for ManualClock {
    fn arm(&mut self, channel: ClockChannel, generation: u64) {
        let stats = self.channels.entry(channel).or_default();
        stats.arm_count += 1;
        stats.concurrent += 1;
        stats.max_concurrent = stats.max_concurrent.max(stats.concurrent);
        stats.armed = Some(generation);
    }

    fn disarm(&mut self, channel: ClockChannel) {
        let stats = self.channels.entry(channel).or_default();
        if stats.armed.take().is_some() {
            stats.concurrent -= 1;
            stats.disarm_count += 1;
        }
    }
}
