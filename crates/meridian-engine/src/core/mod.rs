//! Core engine-facing contracts.
//!
//! This module defines the stable interface between the runtime (platform loop)
//! and higher layers (UI, binaries). It keeps runtime internals out of user
//! code and provides a consistent per-frame context.

mod app;
mod ctx;

pub use app::{App, AppControl, TimerPoll};
pub use ctx::{FrameCtx, WindowCtx};
