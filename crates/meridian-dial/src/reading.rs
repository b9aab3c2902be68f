use std::fmt;

use chrono::{DateTime, NaiveDateTime, Offset, TimeZone, Timelike};

/// `M/d/yyyy HH:mm:ss`; the zone abbreviation is appended separately.
const DIGITAL_FORMAT: &str = "%-m/%-d/%Y %H:%M:%S";

/// Wall-clock time in one zone, sampled once per paint.
///
/// Holds only what the dial needs: the local date-time, the zone's
/// abbreviation at that instant (`JST`, `PDT`, …) and its UTC offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZonedTime {
    local: NaiveDateTime,
    abbreviation: String,
    utc_offset_secs: i32,
}

impl ZonedTime {
    pub fn new<Z>(dt: DateTime<Z>) -> Self
    where
        Z: TimeZone,
        Z::Offset: fmt::Display,
    {
        Self {
            local: dt.naive_local(),
            abbreviation: dt.offset().to_string(),
            utc_offset_secs: dt.offset().fix().local_minus_utc(),
        }
    }

    /// Hour on a 12-hour dial, `0..=11` (noon and midnight are `0`).
    #[inline]
    pub fn hour12(&self) -> u32 {
        self.local.hour() % 12
    }

    #[inline]
    pub fn hour24(&self) -> u32 {
        self.local.hour()
    }

    #[inline]
    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    #[inline]
    pub fn second(&self) -> u32 {
        self.local.second()
    }

    #[inline]
    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn abbreviation(&self) -> &str {
        &self.abbreviation
    }

    /// Offset from UTC in seconds, positive east of Greenwich.
    #[inline]
    pub fn utc_offset_secs(&self) -> i32 {
        self.utc_offset_secs
    }

    /// Digital readout, e.g. `10/18/2026 09:05:07 JST`.
    pub fn digital(&self) -> String {
        format!("{} {}", self.local.format(DIGITAL_FORMAT), self.abbreviation)
    }
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digital())
    }
}
