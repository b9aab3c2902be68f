use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// One line of text. Layout beyond a single line is the caller's job; the
/// renderer advances the pen horizontally only.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block in logical pixels.
    pub origin: Vec2,
}

impl DrawList {
    /// Records a text line. Empty strings are dropped.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let text = text.into();
        if text.is_empty() || size <= 0.0 {
            return;
        }
        self.push(z, DrawCmd::Text(TextCmd { text, font, size, color, origin }));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_or_sizeless_text_is_dropped() {
        let mut dl = DrawList::new();
        let font = FontId::from_index(0);
        dl.push_text(ZIndex::new(0), "", font, 30.0, Color::white(), Vec2::zero());
        dl.push_text(ZIndex::new(1), "12", font, 0.0, Color::white(), Vec2::zero());
        assert!(dl.is_empty());

        dl.push_text(ZIndex::new(2), "12", font, 30.0, Color::white(), Vec2::new(285.0, 65.0));
        assert_eq!(dl.len(), 1);
    }
}
