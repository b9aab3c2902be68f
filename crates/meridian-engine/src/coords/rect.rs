use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub const fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x, self.origin.y + self.size.y)
    }

    #[inline]
    pub fn center(self) -> Vec2 {
        Vec2::new(self.origin.x + self.size.x * 0.5, self.origin.y + self.size.y * 0.5)
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.size.x <= 0.0 || self.size.y <= 0.0
    }

    /// A `size` rect sharing this rect's center.
    ///
    /// `size` may exceed this rect; the result then overhangs on every side.
    #[inline]
    pub fn centered(self, size: Vec2) -> Rect {
        let c = self.center();
        Rect::new(c.x - size.x * 0.5, c.y - size.y * 0.5, size.x, size.y)
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        let max = self.max();
        p.x >= self.origin.x && p.y >= self.origin.y && p.x < max.x && p.y < max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn r(x: f32, y: f32, w: f32, h: f32) -> Rect { Rect::new(x, y, w, h) }

    // ── center / centered ─────────────────────────────────────────────────

    #[test]
    fn center_of_offset_rect() {
        assert_eq!(r(600.0, 0.0, 600.0, 700.0).center(), Vec2::new(900.0, 350.0));
    }

    #[test]
    fn centered_smaller_box() {
        let cell = r(0.0, 0.0, 800.0, 900.0);
        assert_eq!(cell.centered(Vec2::new(600.0, 700.0)), r(100.0, 100.0, 600.0, 700.0));
    }

    #[test]
    fn centered_same_size_is_identity() {
        let cell = r(1200.0, 0.0, 600.0, 700.0);
        assert_eq!(cell.centered(cell.size), cell);
    }

    #[test]
    fn centered_larger_box_overhangs() {
        let cell = r(0.0, 0.0, 400.0, 500.0);
        let boxed = cell.centered(Vec2::new(600.0, 700.0));
        assert_eq!(boxed.origin, Vec2::new(-100.0, -100.0));
    }

    // ── contains ──────────────────────────────────────────────────────────

    #[test]
    fn contains_top_left_inclusive() {
        assert!(r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(0.0, 0.0)));
    }

    #[test]
    fn contains_bottom_right_exclusive() {
        assert!(!r(0.0, 0.0, 10.0, 10.0).contains(Vec2::new(10.0, 10.0)));
    }

    // ── is_empty ──────────────────────────────────────────────────────────

    #[test]
    fn is_empty_zero_size() {
        assert!(r(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(!r(0.0, 0.0, 1.0, 1.0).is_empty());
    }
}
