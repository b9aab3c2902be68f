use meridian_dial::{DialGeometry, HandKind, SystemClock, TimeSource, Zone, ZonedTime};
use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::scene::LineCap;
use meridian_engine::text::FontId;

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::sync::{self, RepaintHandle};
use crate::widget::Widget;

// ── ClockTheme ────────────────────────────────────────────────────────────

/// Colors of a clock face.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ClockTheme {
    pub background: Color,
    /// Ticks, outline ring and second hand.
    pub accent: Color,
    /// Hour hand.
    pub alert: Color,
    /// Labels, minute hand and digital readout.
    pub foreground: Color,
}

impl ClockTheme {
    pub fn hand(&self, kind: HandKind) -> Color {
        match kind {
            HandKind::Hour => self.alert,
            HandKind::Minute => self.foreground,
            HandKind::Second => self.accent,
        }
    }
}

impl Default for ClockTheme {
    fn default() -> Self {
        Self {
            background: Color::from_hex(0x212739),
            accent: Color::from_hex(0x1bce7c),
            alert: Color::from_hex(0xce3c1b),
            foreground: Color::from_hex(0xffffff),
        }
    }
}

// ── Clock ─────────────────────────────────────────────────────────────────

/// Analog dial plus digital readout for one time zone.
///
/// The clock samples its time source on every paint; it keeps no time of its
/// own. Construction registers it with [`sync`] so the application's tick
/// repaints it once a second.
pub struct Clock {
    zone_id: String,
    zone: Zone,
    source: Box<dyn TimeSource>,
    geometry: DialGeometry,
    theme: ClockTheme,
    font: Option<FontId>,
    repaint: RepaintHandle,
}

impl Clock {
    /// A clock for `zone_id` (IANA name or legacy alias such as `"JST"`).
    ///
    /// Unknown ids fall back to UTC with a warning.
    pub fn new(zone_id: impl Into<String>) -> Self {
        let zone_id = zone_id.into();
        let zone = Zone::resolve(&zone_id);
        Self::with_zone(zone_id, zone)
    }

    /// A clock following the host's configured time zone.
    pub fn local() -> Self {
        Self::with_zone("local".to_string(), Zone::Local)
    }

    fn with_zone(zone_id: String, zone: Zone) -> Self {
        log::info!("clock '{zone_id}' shows {zone}");
        Self {
            zone_id,
            zone,
            source: Box::new(SystemClock),
            geometry: DialGeometry::STANDARD,
            theme: ClockTheme::default(),
            font: None,
            repaint: sync::register(),
        }
    }

    /// Font for the hour labels and the readout. Without one only the dial
    /// shapes are drawn.
    pub fn font(mut self, font: Option<FontId>) -> Self {
        if font.is_none() {
            log::debug!("clock '{}' has no font; labels and readout are skipped", self.zone_id);
        }
        self.font = font;
        self
    }

    pub fn theme(mut self, theme: ClockTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn time_source(mut self, source: impl TimeSource + 'static) -> Self {
        self.source = Box::new(source);
        self
    }

    /// The id this clock was created with, before resolution.
    #[inline]
    pub fn zone_id(&self) -> &str {
        &self.zone_id
    }

    #[inline]
    pub fn zone(&self) -> Zone {
        self.zone
    }

    /// Current time in this clock's zone.
    pub fn reading(&self) -> ZonedTime {
        self.zone.localize(self.source.now())
    }

    /// Where the design box lands inside `rect`.
    ///
    /// The box keeps its aspect ratio, shrinks to fit a smaller cell and is
    /// centered; it never grows past its design size.
    fn face(&self, rect: Rect) -> Face {
        let (w, h) = self.geometry.size;
        let scale = (rect.size.x / w).min(rect.size.y / h).clamp(0.0, 1.0);
        let frame = rect.centered(Vec2::new(w * scale, h * scale));
        let (cx, cy) = self.geometry.center();
        Face { origin: frame.origin, center: frame.origin + Vec2::new(cx, cy) * scale, scale }
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::local()
    }
}

/// Design-to-cell mapping for one paint.
#[derive(Debug, Copy, Clone)]
struct Face {
    origin: Vec2,
    center: Vec2,
    scale: f32,
}

impl Face {
    /// Dial-relative design offset to cell coordinates.
    #[inline]
    fn at(&self, offset: (f32, f32)) -> Vec2 {
        self.center + Vec2::from(offset) * self.scale
    }

    #[inline]
    fn scaled(&self, design: f32) -> f32 {
        design * self.scale
    }
}

impl Widget for Clock {
    fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
        constraints.constrain(self.geometry.size.into())
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        if !self.repaint.mark_painted() {
            log::trace!("clock '{}' repainted between ticks", self.zone_id);
        }

        let g = &self.geometry;
        let theme = &self.theme;
        let face = self.face(rect);
        let font_size = face.scaled(g.font_size());

        painter.fill_rect(rect, theme.background);
        if face.scale <= 0.0 {
            return;
        }

        for tick in g.ticks() {
            let (inner, outer) = tick.segment();
            painter.stroke_line(face.at(inner), face.at(outer), face.scaled(tick.width), theme.accent, LineCap::Round);
            if let Some(font) = self.font {
                painter.text_centered(
                    tick.label.as_str(),
                    font,
                    font_size,
                    theme.foreground,
                    face.at(tick.label_anchor()),
                );
            }
        }

        let (radius, width) = g.outline();
        painter.stroke_circle(face.center, face.scaled(radius), face.scaled(width), theme.accent);

        let reading = self.reading();
        for hand in g.hands(&reading) {
            painter.stroke_line(
                face.center,
                face.at(hand.tip()),
                face.scaled(hand.width),
                theme.hand(hand.kind),
                LineCap::Round,
            );
        }

        if let Some(font) = self.font {
            // Half a line above the design baseline.
            let text = reading.digital();
            let line_height = painter.measure_text(&text, font, font_size).y;
            let baseline = Vec2::new(
                face.center.x,
                face.origin.y + face.scaled(g.digital_baseline) - line_height * 0.5,
            );
            painter.text_on_baseline(text, font, font_size, theme.foreground, baseline);
        }
    }
}
