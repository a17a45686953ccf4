//! Fixed-period tick scheduling.
//!
//! Provides [`Scheduler`], a polled interval timer: the host asks it whether a
//! tick is due and how long to wait otherwise.

use crate::TICK_PERIOD_MS;
use crate::time::{TimeDuration, TimeInstant};

/// Result of polling the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickTiming<D> {
    /// Not running. No ticks until the next `start`.
    Stopped,

    /// A tick is due now. The next period has already been armed.
    Due,

    /// Running, next tick due after this delay.
    Wait(D),
}

/// Interval tick source with idempotent start and stop.
///
/// At most one tick stream exists at a time. A due tick moves the period start
/// forward by one period. Whole periods missed by a late poll are dropped
/// rather than replayed, so a stalled host gets one tick and then waits again.
#[derive(Debug, Clone, Copy)]
pub struct Scheduler<I: TimeInstant> {
    period: I::Duration,
    period_start: Option<I>,
}

impl<I: TimeInstant> Scheduler<I> {
    /// Creates a stopped scheduler ticking every [`TICK_PERIOD_MS`].
    pub fn new() -> Self {
        Self {
            period: I::Duration::from_millis(TICK_PERIOD_MS),
            period_start: None,
        }
    }

    #[cfg(test)]
    fn with_period(period: I::Duration) -> Self {
        Self {
            period,
            period_start: None,
        }
    }

    /// Starts ticking, with the first tick due one period after `now`.
    ///
    /// Returns `false` and leaves the running stream untouched if already
    /// running.
    pub fn start(&mut self, now: I) -> bool {
        if self.period_start.is_some() {
            return false;
        }

        self.period_start = Some(now);
        true
    }

    /// Stops ticking. Returns `false` if not running.
    pub fn stop(&mut self) -> bool {
        self.period_start.take().is_some()
    }

    /// Checks whether a tick is due at `now`.
    pub fn poll(&mut self, now: I) -> TickTiming<I::Duration> {
        let Some(period_start) = self.period_start else {
            return TickTiming::Stopped;
        };

        let elapsed = now.duration_since(period_start);
        if elapsed.as_millis() < self.period.as_millis() {
            return TickTiming::Wait(self.period.saturating_sub(elapsed));
        }

        // More than one period behind: restart the grid at `now`. Also covers
        // an instant type that cannot represent the next period start.
        let behind = elapsed.as_millis() >= self.period.as_millis().saturating_mul(2);
        let next_start = match period_start.checked_add(self.period) {
            Some(next) if !behind => next,
            _ => now,
        };

        self.period_start = Some(next_start);
        TickTiming::Due
    }

    /// Returns the delay until the next tick, or `None` when stopped.
    pub fn remaining(&self, now: I) -> Option<I::Duration> {
        self.period_start
            .map(|start| self.period.saturating_sub(now.duration_since(start)))
    }

    /// Returns true while a tick stream is active.
    pub fn is_running(&self) -> bool {
        self.period_start.is_some()
    }

    /// Returns the tick period.
    pub fn period(&self) -> I::Duration {
        self.period
    }
}

impl<I: TimeInstant> Default for Scheduler<I> {
    fn default() -> Self {
        Self::new()
    }
}
