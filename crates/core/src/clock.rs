//! Time sources and the play-time gates that pace enemy moves and hatch polls.
//! The session never reads a clock itself; callers pass `now` into every tick.

use std::time::{Duration, Instant};

pub trait Clock {
    /// Monotonic time since the clock's origin.
    fn now(&self) -> Duration;
}

/// Synthetic time for tests and journal replay.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ManualClock {
    now: Duration,
}

impl ManualClock {
    pub fn new(now: Duration) -> Self {
        Self { now }
    }

    pub fn advance(&mut self, dt: Duration) {
        self.now = self.now.saturating_add(dt);
    }

    /// Never moves backwards.
    pub fn set(&mut self, now: Duration) {
        self.now = self.now.max(now);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now
    }
}

#[derive(Clone, Copy, Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn start() -> Self {
        Self { origin: Instant::now() }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

/// Fires at most once per `interval`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntervalGate {
    interval: Duration,
    last: Duration,
}

impl IntervalGate {
    pub fn new(interval: Duration, start: Duration) -> Self {
        Self { interval, last: start }
    }

    pub fn since_last(&self, now: Duration) -> Duration {
        now.saturating_sub(self.last)
    }

    pub fn ready(&self, now: Duration) -> bool {
        self.since_last(now) >= self.interval
    }

    /// Returns whether the gate was ready, restarting it if so.
    pub fn fire(&mut self, now: Duration) -> bool {
        if !self.ready(now) {
            return false;
        }
        self.last = now;
        true
    }

    pub fn reset(&mut self, now: Duration) {
        self.last = now;
    }
}

/// Wall-clock time since `origin` with paused intervals subtracted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayClock {
    origin: Duration,
    paused_total: Duration,
    paused_since: Option<Duration>,
}

impl PlayClock {
    pub fn new(origin: Duration) -> Self {
        Self { origin, paused_total: Duration::ZERO, paused_since: None }
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    pub fn pause(&mut self, now: Duration) {
        if self.paused_since.is_none() {
            self.paused_since = Some(now);
        }
    }

    pub fn resume(&mut self, now: Duration) {
        if let Some(since) = self.paused_since.take() {
            self.paused_total = self.paused_total.saturating_add(now.saturating_sub(since));
        }
    }

    pub fn play_time(&self, now: Duration) -> Duration {
        let pending = self.paused_since.map_or(Duration::ZERO, |since| now.saturating_sub(since));
        now.saturating_sub(self.origin).saturating_sub(self.paused_total).saturating_sub(pending)
    }
}
