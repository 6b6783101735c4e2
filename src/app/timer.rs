use std::time::{Duration, Instant};

/// Fixed-rate timer. Ticks missed while the loop was busy collapse into one.
#[derive(Clone, Debug)]
pub struct RefreshTimer {
    period: Duration,
    next_due: Instant,
}

impl RefreshTimer {
    pub fn new(period: Duration, now: Instant) -> Self {
        let period = period.max(Duration::from_millis(1));
        Self {
            period,
            next_due: now + period,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn next_due(&self) -> Instant {
        self.next_due
    }

    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Moves the deadline to the first period boundary after `now`.
    pub fn fire(&mut self, now: Instant) {
        while self.next_due <= now {
            self.next_due += self.period;
        }
    }
}
