use meridian_engine::coords::{Rect, Vec2};

use crate::constraints::{Constraints, LayoutCtx};
use crate::painter::Painter;
use crate::widget::{Element, Widget};

/// Equal-cell grid filled row by row.
///
/// With a non-zero row count the column count follows from the number of
/// children (`ceil(children / rows)`), so `Grid::new(1, 3)` with three
/// children is a single row of three equal cells. With zero rows the column
/// count is fixed and rows grow instead.
pub struct Grid {
    rows: usize,
    cols: usize,
    children: Vec<Element>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 && cols == 0 {
            log::warn!("Grid::new(0, 0): treating as a single row");
        }
        Self { rows, cols, children: Vec::new() }
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Effective `(rows, cols)` for the current children.
    pub fn dims(&self) -> (usize, usize) {
        let n = self.children.len().max(1);
        if self.rows > 0 {
            (self.rows, n.div_ceil(self.rows))
        } else if self.cols > 0 {
            (n.div_ceil(self.cols), self.cols)
        } else {
            (1, n)
        }
    }

    /// Rect of cell `index` (row-major) inside `rect`.
    pub fn cell_rect(&self, rect: Rect, index: usize) -> Rect {
        let (rows, cols) = self.dims();
        let w = rect.size.x / cols as f32;
        let h = rect.size.y / rows as f32;
        let (row, col) = (index / cols, index % cols);
        Rect::new(rect.origin.x + col as f32 * w, rect.origin.y + row as f32 * h, w, h)
    }
}

impl Widget for Grid {
    /// Largest child size times the grid dimensions.
    fn measure(&self, constraints: Constraints, ctx: &LayoutCtx) -> Vec2 {
        let (rows, cols) = self.dims();
        let cell = constraints.split(cols, rows);
        let largest = self
            .children
            .iter()
            .map(|c| c.measure(cell, ctx))
            .fold(Vec2::zero(), |acc, s| Vec2::new(acc.x.max(s.x), acc.y.max(s.y)));
        constraints.constrain(Vec2::new(largest.x * cols as f32, largest.y * rows as f32))
    }

    fn paint(&self, painter: &mut Painter, rect: Rect) {
        for (i, child) in self.children.iter().enumerate() {
            child.paint(painter, self.cell_rect(rect, i));
        }
    }
}

#[cfg(test)]
mod tests {
    use meridian_engine::paint::Color;
    use meridian_engine::scene::{DrawCmd, DrawList};
    use meridian_engine::text::FontSystem;

    use super::*;

    /// Fills its rect; prefers a fixed size.
    struct Block(Vec2);

    impl Widget for Block {
        fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
            constraints.constrain(self.0)
        }
        fn paint(&self, painter: &mut Painter, rect: Rect) {
            painter.fill_rect(rect, Color::white());
        }
    }

    fn three_in_a_row() -> Grid {
        Grid::new(1, 3)
            .child(Block(Vec2::new(600.0, 700.0)))
            .child(Block(Vec2::new(600.0, 700.0)))
            .child(Block(Vec2::new(600.0, 700.0)))
    }

    // ── dims ──────────────────────────────────────────────────────────────

    #[test]
    fn rows_fix_columns_follow_children() {
        assert_eq!(three_in_a_row().dims(), (1, 3));
        let four = three_in_a_row().child(Block(Vec2::zero()));
        assert_eq!(four.dims(), (1, 4));
    }

    #[test]
    fn zero_rows_grow_downwards() {
        let g = Grid::new(0, 2)
            .child(Block(Vec2::zero()))
            .child(Block(Vec2::zero()))
            .child(Block(Vec2::zero()));
        assert_eq!(g.dims(), (2, 2));
    }

    // ── cells ─────────────────────────────────────────────────────────────

    #[test]
    fn cells_share_width_equally() {
        let g = three_in_a_row();
        let rect = Rect::new(0.0, 0.0, 1800.0, 700.0);
        assert_eq!(g.cell_rect(rect, 0), Rect::new(0.0, 0.0, 600.0, 700.0));
        assert_eq!(g.cell_rect(rect, 1), Rect::new(600.0, 0.0, 600.0, 700.0));
        assert_eq!(g.cell_rect(rect, 2), Rect::new(1200.0, 0.0, 600.0, 700.0));
    }

    #[test]
    fn cells_follow_rect_origin() {
        let g = Grid::new(2, 0).child(Block(Vec2::zero())).child(Block(Vec2::zero()));
        let rect = Rect::new(10.0, 20.0, 100.0, 200.0);
        assert_eq!(g.cell_rect(rect, 1), Rect::new(10.0, 120.0, 100.0, 100.0));
    }

    // ── measure / paint ───────────────────────────────────────────────────

    #[test]
    fn measure_multiplies_largest_child() {
        let fonts = FontSystem::new();
        let ctx = LayoutCtx::new(&fonts, 1.0);
        let size = three_in_a_row().measure(Constraints::loose(Vec2::new(4000.0, 4000.0)), &ctx);
        assert_eq!(size, Vec2::new(1800.0, 700.0));
    }

    #[test]
    fn paint_hands_each_child_its_cell() {
        let fonts = FontSystem::new();
        let mut dl = DrawList::new();
        {
            let mut p = Painter::new(&mut dl, &fonts, 1.0);
            three_in_a_row().paint(&mut p, Rect::new(0.0, 0.0, 1800.0, 700.0));
        }

        let starts: Vec<f32> = dl
            .items()
            .iter()
            .map(|item| match &item.cmd {
                DrawCmd::Line(l) => l.from.x,
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(starts, vec![0.0, 600.0, 1200.0]);
    }
}
