//! Wall-clock scheduling helpers for the event loop.
//!
//! The runtime sleeps until the earliest deadline reported by the app, so
//! anything periodic is expressed as an [`IntervalTimer`] polled against
//! `Instant::now()`.

mod interval;

pub use interval::IntervalTimer;
