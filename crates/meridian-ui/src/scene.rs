use meridian_engine::coords::{Rect, Vec2};
use meridian_engine::scene::DrawList;
use meridian_engine::text::{FontId, FontLoadError, FontSystem};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::Element;

/// Top-level coordinator that owns shared resources across frames.
///
/// Owns the `FontSystem` and the `DrawList` that [`frame`](Self::frame)
/// fills. GPU renderers live in the application and consume the returned
/// list.
pub struct UiScene {
    /// Public so the application can pass `&ui.font_system` to the engine's
    /// `TextRenderer::render` alongside the draw list.
    pub font_system: FontSystem,
    pub draw_list: DrawList,
}

impl UiScene {
    pub fn new() -> Self {
        Self { font_system: FontSystem::new(), draw_list: DrawList::new() }
    }

    /// Load a TrueType / OpenType font from raw bytes.
    pub fn load_font(&mut self, data: &[u8]) -> Result<FontId, FontLoadError> {
        self.font_system.load_font(data)
    }

    /// Lays out and paints `root` over the whole viewport.
    ///
    /// The root is borrowed so it keeps its state (and its registry entries)
    /// across frames. The returned list is valid until the next call.
    pub fn frame(&mut self, root: &Element, viewport: Vec2, scale: f32) -> &mut DrawList {
        self.draw_list.clear();

        let ctx = LayoutCtx::new(&self.font_system, scale);
        // The root always occupies the full viewport; measuring still lets
        // containers validate their children.
        let _ = root.measure(Constraints::tight(viewport), &ctx);
        let rect = Rect::new(0.0, 0.0, viewport.x, viewport.y);

        {
            let mut painter = Painter::new(&mut self.draw_list, &self.font_system, scale);
            root.paint(&mut painter, rect);
        }

        &mut self.draw_list
    }
}

impl Default for UiScene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use meridian_engine::paint::Color;

    use super::*;
    use crate::widget::Widget;

    struct Fill;

    impl Widget for Fill {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.max
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, Color::white());
        }
    }

    #[test]
    fn frame_replaces_previous_draw_list() {
        let mut ui = UiScene::new();
        let root: Element = Fill.into();

        assert_eq!(ui.frame(&root, Vec2::new(100.0, 50.0), 1.0).len(), 1);
        assert_eq!(ui.frame(&root, Vec2::new(100.0, 50.0), 2.0).len(), 1);
    }

    #[test]
    fn garbage_font_is_rejected() {
        let mut ui = UiScene::new();
        assert!(ui.load_font(&[0u8; 16]).is_err());
    }
}
