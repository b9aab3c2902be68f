use meridian_engine::coords::Vec2;
use meridian_engine::text::FontSystem;

// ── Constraints ───────────────────────────────────────────────────────────

/// Layout constraints passed down from parent to child during measure.
///
/// A child may return any size in `[min, max]`. Parents enforce their own
/// policy by calling [`Constraints::constrain`] on the returned size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min: Vec2,
    pub max: Vec2,
}

impl Constraints {
    /// Tight: child must be exactly `size`.
    #[inline]
    pub fn tight(size: Vec2) -> Self {
        Self { min: size, max: size }
    }

    /// Loose: child can be anywhere from zero up to `max`.
    #[inline]
    pub fn loose(max: Vec2) -> Self {
        Self { min: Vec2::zero(), max }
    }

    /// Clamp a size into `[min, max]`.
    #[inline]
    #[must_use]
    pub fn constrain(self, size: Vec2) -> Vec2 {
        Vec2::new(
            size.x.max(self.min.x).min(self.max.x),
            size.y.max(self.min.y).min(self.max.y),
        )
    }

    /// Divides `max` into a `cols × rows` grid and loosens the result.
    #[inline]
    #[must_use]
    pub fn split(self, cols: usize, rows: usize) -> Self {
        let cols = cols.max(1) as f32;
        let rows = rows.max(1) as f32;
        Self::loose(Vec2::new(self.max.x / cols, self.max.y / rows))
    }
}

// ── LayoutCtx ────────────────────────────────────────────────────────────

/// Resources made available to [`Widget::measure`](crate::widget::Widget::measure).
pub struct LayoutCtx<'a> {
    pub fonts: &'a FontSystem,
    /// Physical-to-logical pixel ratio, matching the text renderer's raster
    /// scale so measured widths equal drawn widths.
    pub scale: f32,
}

impl<'a> LayoutCtx<'a> {
    #[inline]
    pub fn new(fonts: &'a FontSystem, scale: f32) -> Self {
        Self { fonts, scale }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Constraints::constrain ────────────────────────────────────────────

    #[test]
    fn constrain_clamps_below_min() {
        let c = Constraints { min: Vec2::new(10.0, 10.0), max: Vec2::new(100.0, 100.0) };
        assert_eq!(c.constrain(Vec2::new(5.0, 3.0)), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn constrain_clamps_above_max() {
        let c = Constraints::loose(Vec2::new(50.0, 50.0));
        assert_eq!(c.constrain(Vec2::new(200.0, 200.0)), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn tight_forces_size() {
        let size = Vec2::new(600.0, 700.0);
        assert_eq!(Constraints::tight(size).constrain(Vec2::zero()), size);
    }

    // ── Constraints::split ────────────────────────────────────────────────

    #[test]
    fn split_divides_max_per_cell() {
        let c = Constraints::tight(Vec2::new(1800.0, 700.0)).split(3, 1);
        assert_eq!(c.min, Vec2::zero());
        assert_eq!(c.max, Vec2::new(600.0, 700.0));
    }

    #[test]
    fn split_guards_zero_tracks() {
        let c = Constraints::loose(Vec2::new(100.0, 100.0)).split(0, 0);
        assert_eq!(c.max, Vec2::new(100.0, 100.0));
    }
}
