use std::time::Instant;

use winit::event::WindowEvent;
use winit::window::WindowId;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Result of [`App::poll_timers`].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TimerPoll {
    /// Earliest instant the app needs to be polled again. `None` sleeps until
    /// the next OS event.
    pub wake_at: Option<Instant>,
    /// Request a redraw of every window.
    pub redraw: bool,
}

impl TimerPoll {
    #[inline]
    pub fn idle() -> Self {
        Self::default()
    }
}

/// Application contract implemented by higher layers.
pub trait App {
    /// Called for window events.
    fn on_window_event(&mut self, window_id: WindowId, event: &WindowEvent) -> AppControl {
        let _ = (window_id, event);
        AppControl::Continue
    }

    /// Called whenever the event loop is about to sleep.
    ///
    /// The runtime sleeps until `wake_at` (or the next OS event) and redraws
    /// every window when `redraw` is set. The default never wakes.
    fn poll_timers(&mut self, now: Instant) -> TimerPoll {
        let _ = now;
        TimerPoll::idle()
    }

    /// Called once per rendered frame per window.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
