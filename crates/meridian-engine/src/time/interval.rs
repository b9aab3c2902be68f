use std::time::{Duration, Instant};

/// Fixed-period timer driven by explicit polling.
///
/// The first tick is due one full `interval` after `start`. Each `poll` that
/// finds the timer due reports a single tick, no matter how many periods
/// elapsed; missed periods are coalesced and the next deadline is moved
/// forward from `now` so a stalled loop never fires a burst.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IntervalTimer {
    interval: Duration,
    next_due: Instant,
}

impl IntervalTimer {
    /// `interval` is clamped to at least one millisecond.
    pub fn new(interval: Duration, start: Instant) -> Self {
        let interval = interval.max(Duration::from_millis(1));
        Self { interval, next_due: start + interval }
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Instant at which the next tick becomes due.
    #[inline]
    pub fn deadline(&self) -> Instant {
        self.next_due
    }

    #[inline]
    pub fn is_due(&self, now: Instant) -> bool {
        now >= self.next_due
    }

    /// Returns `true` at most once per due period and advances the deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.is_due(now) {
            return false;
        }

        self.next_due += self.interval;
        if self.next_due <= now {
            let behind = now.duration_since(self.next_due);
            log::trace!("interval timer {:?} behind, coalescing", behind);
            self.next_due = now + self.interval;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn not_due_before_first_interval() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(SEC, t0);
        assert!(!timer.poll(t0));
        assert!(!timer.poll(t0 + Duration::from_millis(999)));
        assert_eq!(timer.deadline(), t0 + SEC);
    }

    #[test]
    fn fires_once_per_period() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(SEC, t0);

        assert!(timer.poll(t0 + SEC));
        assert!(!timer.poll(t0 + SEC));
        assert_eq!(timer.deadline(), t0 + 2 * SEC);

        assert!(timer.poll(t0 + 2 * SEC + Duration::from_millis(10)));
        assert_eq!(timer.deadline(), t0 + 3 * SEC);
    }

    #[test]
    fn keeps_phase_when_polled_late_within_period() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(SEC, t0);
        assert!(timer.poll(t0 + Duration::from_millis(1400)));
        assert_eq!(timer.deadline(), t0 + 2 * SEC);
    }

    #[test]
    fn coalesces_missed_periods() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new(SEC, t0);

        let late = t0 + Duration::from_millis(5300);
        assert!(timer.poll(late));
        assert!(!timer.poll(late));
        assert_eq!(timer.deadline(), late + SEC);
    }

    #[test]
    fn zero_interval_is_clamped() {
        let t0 = Instant::now();
        let timer = IntervalTimer::new(Duration::ZERO, t0);
        assert_eq!(timer.interval(), Duration::from_millis(1));
    }
}
