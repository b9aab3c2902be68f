use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::Stroke;

/// Circle draw payload.
///
/// The stroke is centered on `radius`: half its width falls inside the
/// circle and half outside.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleCmd {
    pub center: Vec2,
    pub radius: f32,
    pub fill: Color,
    pub stroke: Option<Stroke>,
}

impl CircleCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, fill: Color, stroke: Option<Stroke>) -> Self {
        Self { center, radius, fill, stroke }
    }

    /// Outermost extent including the stroke.
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.stroke.map_or(0.0, |s| s.width.max(0.0) * 0.5)
    }
}

impl DrawList {
    /// Records a circle draw command.
    #[inline]
    pub fn push_circle(
        &mut self,
        z: ZIndex,
        center: Vec2,
        radius: f32,
        fill: Color,
        stroke: Option<Stroke>,
    ) {
        self.push(z, DrawCmd::Circle(CircleCmd::new(center, radius, fill, stroke)));
    }

    /// Records an unfilled ring.
    #[inline]
    pub fn push_ring(&mut self, z: ZIndex, center: Vec2, radius: f32, stroke: Stroke) {
        self.push_circle(z, center, radius, Color::transparent(), Some(stroke));
    }
}
