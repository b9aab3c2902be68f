use chrono::{DateTime, Utc};

/// Supplies the current instant to a clock.
///
/// Widgets hold a boxed source so the paint routine can be driven from a
/// fixed instant in tests.
pub trait TimeSource {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl TimeSource for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn system_clock_is_after_the_epoch() {
        assert!(SystemClock.now().timestamp() > 0);
    }

    #[test]
    fn fixed_clock_repeats_its_instant() {
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap();
        let clock = FixedClock(at);
        assert_eq!(clock.now(), at);
        assert_eq!(clock.now(), at);
    }
}
