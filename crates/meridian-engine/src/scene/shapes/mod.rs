pub(crate) mod circle;
pub(crate) mod line;
pub(crate) mod text;

pub use circle::CircleCmd;
pub use line::LineCmd;
pub use text::TextCmd;

use crate::paint::Color;

/// Outline drawn around a shape, centered on its edge.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}

/// End-cap style for line segments.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum LineCap {
    /// Flat end flush with the endpoint.
    Butt,
    /// Semicircular end of radius `width / 2` centered on the endpoint.
    #[default]
    Round,
}
