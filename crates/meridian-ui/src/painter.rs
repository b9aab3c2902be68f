use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::paint::Color;
use meridian_engine::scene::{DrawList, LineCap, Stroke, ZIndex};
use meridian_engine::text::{FontId, FontSystem};

/// Drawing surface passed to [`Widget::paint`](crate::widget::Widget::paint).
///
/// Wraps the engine's `DrawList` with a higher-level API. Every call gets the
/// next z-index, so within one renderer later calls draw on top.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    /// Physical-to-logical pixel ratio for this frame.
    pub scale: f32,
    z: i32,
}

impl<'a> Painter<'a> {
    pub fn new(draw_list: &'a mut DrawList, font_system: &'a FontSystem, scale: f32) -> Self {
        Self { draw_list, font_system, scale, z: 0 }
    }

    // ── text measurement ──────────────────────────────────────────────────

    /// Measures `text` at the renderer's current physical scale.
    pub fn measure_text(&self, text: &str, font: FontId, size: f32) -> Vec2 {
        self.font_system.measure_text_scaled(text, font, size, self.scale)
    }

    // ── shapes ────────────────────────────────────────────────────────────

    /// Solid axis-aligned rectangle.
    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_fill_rect(z, rect, color);
    }

    pub fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Color, cap: LineCap) {
        let z = self.next_z();
        self.draw_list.push_line(z, from, to, width, color, cap);
    }

    /// Unfilled circle; the stroke is centered on `radius`.
    pub fn stroke_circle(&mut self, center: Vec2, radius: f32, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_ring(z, center, radius, Stroke::new(width, color));
    }

    // ── text ──────────────────────────────────────────────────────────────

    /// Single-line text with its top-left at `origin`.
    pub fn text(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, size, color, origin);
    }

    /// Text whose bounding box is centered on `center`.
    pub fn text_centered(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        center: Vec2,
    ) {
        let text = text.into();
        let extent = self.measure_text(&text, font, size);
        let origin = Vec2::new(center.x - extent.x * 0.5, center.y - extent.y * 0.5);
        self.text(text, font, size, color, origin);
    }

    /// Text horizontally centered on `anchor.x` with its baseline at `anchor.y`.
    pub fn text_on_baseline(
        &mut self,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        anchor: Vec2,
    ) {
        let text = text.into();
        let width = self.measure_text(&text, font, size).x;
        let ascent = self.font_system.ascent(font, size);
        let origin = Vec2::new(anchor.x - width * 0.5, anchor.y - ascent);
        self.text(text, font, size, color, origin);
    }

    // ── internal ──────────────────────────────────────────────────────────

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(self.z);
        self.z += 1;
        z
    }
}

#[cfg(test)]
mod tests {
    use meridian_engine::scene::DrawCmd;

    use super::*;

    #[test]
    fn each_call_gets_a_higher_z() {
        let fonts = FontSystem::new();
        let mut dl = DrawList::new();
        {
            let mut p = Painter::new(&mut dl, &fonts, 1.0);
            p.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());
            p.stroke_circle(Vec2::new(5.0, 5.0), 4.0, 1.0, Color::white());
        }
        let zs: Vec<i32> = dl.items().iter().map(|i| i.key.z.0).collect();
        assert_eq!(zs, vec![0, 1]);
    }

    #[test]
    fn baseline_text_sits_above_its_baseline() {
        let fonts = FontSystem::new();
        let mut dl = DrawList::new();
        {
            let mut p = Painter::new(&mut dl, &fonts, 1.0);
            p.text_on_baseline("x", FontId::from_index(0), 30.0, Color::white(), Vec2::new(300.0, 650.0));
        }
        let DrawCmd::Text(t) = &dl.items()[0].cmd else { panic!("expected text") };
        // No font loaded: zero width, ascent falls back to 0.8 * size.
        assert_eq!(t.origin, Vec2::new(300.0, 626.0));
    }
}
