use crate::scene::shapes::circle::CircleCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded primitive.
///
/// Each variant has exactly one renderer in `render::shapes`, and each
/// renderer ignores the other variants. Filled rects are butt-capped lines,
/// rings are circles with a transparent fill.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
    Circle(CircleCmd),
    Text(TextCmd),
}
