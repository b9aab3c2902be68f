use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::Result;
use winit::dpi::LogicalSize;

use meridian_engine::coords::Vec2;
use meridian_engine::core::{App as EngineApp, AppControl, FrameCtx, TimerPoll};
use meridian_engine::device::GpuInit;
use meridian_engine::paint::Color;
use meridian_engine::render::shapes::{CircleRenderer, LineRenderer, TextRenderer};
use meridian_engine::text::FontId;
use meridian_engine::time::IntervalTimer;
use meridian_engine::window::{Runtime, RuntimeConfig};

use crate::scene::UiScene;
use crate::sync;
use crate::widget::Element;
use crate::widgets::clock::ClockTheme;

/// Period of the shared repaint tick.
pub const TICK_INTERVAL: Duration = Duration::from_secs(1);

// ── FontMap ───────────────────────────────────────────────────────────────

/// Name-keyed handles of the fonts that loaded successfully.
///
/// Passed to the builder closure in [`Application::run_widget`].
#[derive(Debug, Default, Clone)]
pub struct FontMap(pub(crate) HashMap<String, FontId>);

impl FontMap {
    /// `None` if `name` was never registered or its bytes failed to load.
    pub fn get(&self, name: &str) -> Option<FontId> {
        self.0.get(name).copied()
    }
}

// ── Application ───────────────────────────────────────────────────────────

/// Top-level UI application builder.
///
/// ```rust,ignore
/// Application::new()
///     .title("International Clock")
///     .font("body", bytes)
///     .run_widget(|fonts: &FontMap| Clock::new("JST").font(fonts.get("body")).into())?;
/// ```
pub struct Application {
    title: String,
    width: f64,
    height: f64,
    fonts: Vec<(String, Vec<u8>)>,
}

impl Application {
    pub fn new() -> Self {
        Self {
            title: "meridian".to_string(),
            width: 1800.0,
            height: 700.0,
            fonts: Vec::new(),
        }
    }

    pub fn title(mut self, t: impl Into<String>) -> Self {
        self.title = t.into();
        self
    }

    /// Initial window size in logical pixels.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Registers font bytes under `name`. Bytes that fail to parse are
    /// logged and left out of the [`FontMap`].
    pub fn font(mut self, name: impl Into<String>, data: Vec<u8>) -> Self {
        self.fonts.push((name.into(), data));
        self
    }

    /// Builds the root widget once fonts are loaded and runs the event loop
    /// until the window closes.
    ///
    /// The root persists across frames. A one-second tick marks every
    /// registered widget for repaint and redraws the window.
    pub fn run_widget<F>(self, build: F) -> Result<()>
    where
        F: FnOnce(&FontMap) -> Element,
    {
        let config = RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(self.width, self.height),
        };
        let state = UiAppState::new(self, build, Instant::now());
        Runtime::run(config, GpuInit::default(), state)
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

// ── UiAppState ────────────────────────────────────────────────────────────

/// Implements the engine's `App`; user code never sees this type.
struct UiAppState {
    /// Surface clear color; matches the clock background.
    clear: Color,

    ui_scene: UiScene,
    line_renderer: LineRenderer,
    circle_renderer: CircleRenderer,
    text_renderer: TextRenderer,

    root: Element,
    tick: IntervalTimer,
}

impl UiAppState {
    fn new<F>(app: Application, build: F, start: Instant) -> Self
    where
        F: FnOnce(&FontMap) -> Element,
    {
        let mut ui_scene = UiScene::new();
        let mut fonts = FontMap::default();
        for (name, bytes) in &app.fonts {
            match ui_scene.load_font(bytes) {
                Ok(id) => {
                    fonts.0.insert(name.clone(), id);
                }
                Err(e) => log::warn!("failed to load font '{name}': {e}"),
            }
        }

        let root = build(&fonts);
        log::info!("widget tree built; {} widget(s) on the repaint tick", sync::registered());

        Self {
            clear: ClockTheme::default().background,
            ui_scene,
            line_renderer: LineRenderer::new(),
            circle_renderer: CircleRenderer::new(),
            text_renderer: TextRenderer::new(),
            root,
            tick: IntervalTimer::new(TICK_INTERVAL, start),
        }
    }
}

impl EngineApp for UiAppState {
    fn poll_timers(&mut self, now: Instant) -> TimerPoll {
        let mut redraw = false;
        if self.tick.poll(now) {
            let notified = sync::request_repaint_all();
            log::debug!("tick: {notified} widget(s) marked for repaint");
            redraw = notified > 0;
        }
        TimerPoll { wake_at: Some(self.tick.deadline()), redraw }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let (w, h) = ctx.window.logical_size();
        let scale = ctx.window.scale_factor();

        self.ui_scene.frame(&self.root, Vec2::new(w, h), scale);
        let dl = &mut self.ui_scene.draw_list;
        let fs = &self.ui_scene.font_system;
        let lines = &mut self.line_renderer;
        let circles = &mut self.circle_renderer;
        let text = &mut self.text_renderer;

        ctx.render(self.clear, |rctx, target| {
            lines.render(rctx, target, dl);
            circles.render(rctx, target, dl);
            text.render(rctx, target, dl, fs);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::clock::Clock;
    use crate::widgets::grid::Grid;

    fn three_clocks(_: &FontMap) -> Element {
        Grid::new(1, 3)
            .child(Clock::new("EST"))
            .child(Clock::new("PST"))
            .child(Clock::new("JST"))
            .into()
    }

    // ── FontMap ───────────────────────────────────────────────────────────

    #[test]
    fn unloadable_fonts_are_left_out() {
        let app = Application::new().font("body", vec![0u8; 32]);
        let mut seen = None;
        let _state = UiAppState::new(
            app,
            |fonts| {
                seen = Some(fonts.clone());
                three_clocks(fonts)
            },
            Instant::now(),
        );

        let fonts = seen.unwrap();
        assert!(fonts.0.is_empty());
        assert_eq!(fonts.get("body"), None);
    }

    // ── repaint tick ──────────────────────────────────────────────────────

    #[test]
    fn first_tick_fires_after_one_second() {
        let t0 = Instant::now();
        let mut state = UiAppState::new(Application::new(), three_clocks, t0);

        let early = state.poll_timers(t0 + Duration::from_millis(500));
        assert!(!early.redraw);
        assert_eq!(early.wake_at, Some(t0 + TICK_INTERVAL));
        assert_eq!(sync::pending(), 0);

        let due = state.poll_timers(t0 + TICK_INTERVAL);
        assert!(due.redraw);
        assert_eq!(due.wake_at, Some(t0 + 2 * TICK_INTERVAL));
        assert_eq!(sync::pending(), 3);
    }

    #[test]
    fn stalled_loop_gets_a_single_tick() {
        let t0 = Instant::now();
        let mut state = UiAppState::new(Application::new(), three_clocks, t0);

        let late = t0 + Duration::from_millis(5_500);
        assert!(state.poll_timers(late).redraw);
        assert!(!state.poll_timers(late).redraw);
    }

    #[test]
    fn painting_the_tree_clears_every_clock() {
        let t0 = Instant::now();
        let mut state = UiAppState::new(Application::new(), three_clocks, t0);
        state.poll_timers(t0 + TICK_INTERVAL);
        assert_eq!(sync::pending(), 3);

        let dl = state.ui_scene.frame(&state.root, Vec2::new(1800.0, 700.0), 1.0);
        assert!(!dl.is_empty());
        assert_eq!(sync::pending(), 0);
    }

    #[test]
    fn empty_tree_never_requests_redraw() {
        let t0 = Instant::now();
        let mut state = UiAppState::new(Application::new(), |_| Grid::new(1, 1).into(), t0);
        assert!(!state.poll_timers(t0 + TICK_INTERVAL).redraw);
    }
}
