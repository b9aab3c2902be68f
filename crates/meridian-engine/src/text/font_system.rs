use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Opaque handle to a font loaded into a [`FontSystem`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FontId(pub(crate) usize);

impl FontId {
    /// Handle for the `index`-th font loaded into a [`FontSystem`].
    ///
    /// Ids that no system knows measure as empty and are skipped by the
    /// text renderer.
    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self(index)
    }
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and passed to the text renderer each frame so new glyphs can be rasterized
/// on demand.
#[derive(Default)]
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        log::debug!("loaded font {:?} ({} glyphs)", id, font.glyph_count());
        self.fonts.push(font);
        Ok(id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    pub(crate) fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Distance from the top of a laid-out line to its baseline, in logical
    /// pixels. Falls back to `0.8 * size` when the font has no horizontal
    /// metrics or `id` is unknown.
    #[must_use]
    pub fn ascent(&self, id: FontId, size: f32) -> f32 {
        self.get(id)
            .and_then(|f| f.horizontal_line_metrics(size))
            .map_or(size * 0.8, |m| m.ascent)
    }

    /// Single-line bounding box of `text`, in logical pixels.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        self.measure_text_scaled(text, id, size, 1.0)
    }

    /// Like [`measure_text`](Self::measure_text) but lays out at
    /// `size * scale` and divides the result back to logical pixels, so the
    /// width matches the renderer's physical-pixel glyph positions.
    #[must_use]
    pub fn measure_text_scaled(&self, text: &str, id: FontId, size: f32, scale: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let scale = scale.max(0.01);
        let phys_size = size * scale;

        let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
        layout.reset(&LayoutSettings::default());
        layout.append(&[font], &TextStyle::new(text, phys_size, 0));

        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after the last glyph, not its bitmap edge, so trailing
        // side bearings count toward the width.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, phys_size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max)
            / scale;
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(phys_size, f32::max) / scale;
        Vec2::new(w, h)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_font_measures_empty_line() {
        let fonts = FontSystem::new();
        let size = fonts.measure_text("12", FontId(3), 30.0);
        assert_eq!(size.x, 0.0);
        assert!((size.y - 36.0).abs() < 1e-4);
    }

    #[test]
    fn unknown_font_ascent_fallback() {
        let fonts = FontSystem::new();
        assert!((fonts.ascent(FontId(0), 30.0) - 24.0).abs() < 1e-4);
    }

    #[test]
    fn garbage_bytes_fail_to_load() {
        let mut fonts = FontSystem::new();
        assert!(fonts.load_font(b"not a font").is_err());
        assert!(fonts.is_empty());
    }
}
