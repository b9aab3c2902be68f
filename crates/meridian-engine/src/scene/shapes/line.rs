use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

use super::LineCap;

/// Line segment draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f32,
    pub color: Color,
    pub cap: LineCap,
}

impl LineCmd {
    #[inline]
    pub fn length(&self) -> f32 {
        (self.to - self.from).length()
    }
}

impl DrawList {
    /// Records a line segment.
    #[inline]
    pub fn push_line(
        &mut self,
        z: ZIndex,
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Color,
        cap: LineCap,
    ) {
        self.push(z, DrawCmd::Line(LineCmd { from, to, width, color, cap }));
    }

    /// Records a solid axis-aligned rectangle as a butt-capped segment
    /// running through its vertical middle.
    pub fn push_fill_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        let mid_y = rect.origin.y + rect.size.y * 0.5;
        self.push_line(
            z,
            Vec2::new(rect.origin.x, mid_y),
            Vec2::new(rect.origin.x + rect.size.x, mid_y),
            rect.size.y,
            color,
            LineCap::Butt,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_rect_becomes_butt_segment() {
        let mut dl = DrawList::new();
        dl.push_fill_rect(ZIndex(0), Rect::new(600.0, 0.0, 600.0, 700.0), Color::white());

        let DrawCmd::Line(l) = &dl.items()[0].cmd else { panic!("expected line") };
        assert_eq!(l.from, Vec2::new(600.0, 350.0));
        assert_eq!(l.to, Vec2::new(1200.0, 350.0));
        assert_eq!(l.width, 700.0);
        assert_eq!(l.cap, LineCap::Butt);
        assert_eq!(l.length(), 600.0);
    }

    #[test]
    fn empty_rect_records_nothing() {
        let mut dl = DrawList::new();
        dl.push_fill_rect(ZIndex(0), Rect::new(0.0, 0.0, 0.0, 10.0), Color::white());
        assert!(dl.is_empty());
    }
}
