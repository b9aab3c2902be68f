/// Viewport size in logical pixels.
///
/// Renderers upload this to their viewport uniform and convert logical px
/// positions to NDC in the vertex shader.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// `false` while the window is minimized (zero-sized); renderers skip the frame.
    #[inline]
    pub fn is_valid(self) -> bool {
        self.width > 0.0 && self.height > 0.0 && self.width.is_finite() && self.height.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimized_window_is_invalid() {
        assert!(!Viewport::new(0.0, 0.0).is_valid());
        assert!(!Viewport::new(1800.0, 0.0).is_valid());
        assert!(!Viewport::new(f32::INFINITY, 700.0).is_valid());
        assert!(Viewport::new(1800.0, 700.0).is_valid());
    }
}
