//! Wall-clock tick source backed by tokio intervals
//!
//! Each armed channel is one spawned task sending a [`Tick`] per period into
//! an unbounded channel. The host loop receives them and hands them to the
//! engine, which keeps tick processing strictly serialized.
//!
//! `arm` spawns onto the current tokio runtime and must be called from
//! within one.

use std::collections::HashMap;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{ClockChannel, ClockSource, Tick};

pub struct IntervalClock {
    tx: mpsc::UnboundedSender<Tick>,
    period: Duration,
    tasks: HashMap<ClockChannel, JoinHandle<()>>,
}

impl IntervalClock {
    /// One tick per second
    pub fn new(tx: mpsc::UnboundedSender<Tick>) -> Self {
        Self::with_period(tx, Duration::from_secs(1))
    }

    pub fn with_period(tx: mpsc::UnboundedSender<Tick>, period: Duration) -> Self {
        Self {
            tx,
            period,
            tasks: HashMap::new(),
        }
    }

    /// Convenience constructor returning the clock and its tick receiver
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<Tick>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self::new(tx), rx)
    }

    pub fn is_armed(&self, channel: ClockChannel) -> bool {
        self.tasks.contains_key(&channel)
    }
}

impl ClockSource for IntervalClock {
    fn arm(&mut self, channel: ClockChannel, generation: u64) {
        if let Some(previous) = self.tasks.remove(&channel) {
            previous.abort();
        }

        let tx = self.tx.clone();
        let period = self.period;
        let handle = tokio::spawn(async move {
            // First tick lands one full period after arming
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if tx.send(Tick { channel, generation }).is_err() {
                    break;
                }
            }
        });

        tracing::debug!(?channel, generation, "Interval clock armed");
        self.tasks.insert(channel, handle);
    }

    fn disarm(&mut self, channel: ClockChannel) {
        if let Some(handle) = self.tasks.remove(&channel) {
            handle.abort();
            tracing::debug!(?channel, "Interval clock disarmed");
        }
    }
}

impl Drop for IntervalClock {
    fn drop(&mut self) {
        for (_, handle) in self.tasks.drain() {
            handle.abort();
        }
    }
}
