//! Meridian dial: the math behind a multi-zone wall clock.
//!
//! This crate is intentionally headless: it resolves time zones, samples the
//! current time in a zone, and lays out the ticks and hands of a 12-hour dial
//! as plain numbers. Drawing is left to `meridian-ui`.
//!
//! ```
//! use meridian_dial::{DialGeometry, FixedClock, TimeSource, Zone};
//! use chrono::{TimeZone, Utc};
//!
//! let clock = FixedClock(Utc.with_ymd_and_hms(2026, 1, 1, 3, 0, 0).unwrap());
//! let tokyo = Zone::resolve("JST").localize(clock.now());
//! assert_eq!(tokyo.hour12(), 0);
//!
//! let [hour, ..] = DialGeometry::STANDARD.hands(&tokyo);
//! assert!(hour.tip().1 < 0.0); // noon: straight up
//! ```

pub mod angles;
mod geometry;
mod reading;
mod source;
mod zone;

pub use angles::HandAngles;
pub use geometry::{DialGeometry, Hand, HandKind, Tick, TICK_COUNT};
pub use reading::ZonedTime;
pub use source::{FixedClock, SystemClock, TimeSource};
pub use zone::{UnknownZone, Zone, FALLBACK_ZONE};
