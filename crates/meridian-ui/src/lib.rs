//! Meridian UI: retained widget tree on top of `meridian-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use meridian_ui::prelude::*;
//!
//! Application::new()
//!     .title("International Clock")
//!     .size(1800.0, 700.0)
//!     .font("body", font_bytes)
//!     .run_widget(|fonts: &FontMap| {
//!         Grid::new(1, 3)
//!             .child(Clock::new("EST").font(fonts.get("body")))
//!             .child(Clock::new("PST").font(fonts.get("body")))
//!             .child(Clock::new("JST").font(fonts.get("body")))
//!             .into()
//!     })?;
//! ```
//!
//! # Extending with custom widgets
//!
//! Implement [`Widget`](widget::Widget) for any type, then use it anywhere an
//! [`Element`](widget::Element) is accepted:
//!
//! ```rust,ignore
//! use meridian_ui::prelude::*;
//!
//! pub struct Swatch(Color);
//!
//! impl Widget for Swatch {
//!     fn measure(&self, constraints: Constraints, _ctx: &LayoutCtx) -> Vec2 {
//!         constraints.constrain(Vec2::new(40.0, 40.0))
//!     }
//!     fn paint(&self, painter: &mut Painter, rect: Rect) {
//!         painter.fill_rect(rect, self.0);
//!     }
//! }
//! ```

pub mod app;
pub mod constraints;
pub mod painter;
pub mod scene;
pub mod sync;
pub mod widget;
pub mod widgets;

pub use app::Application;

/// Everything needed to build and extend the UI.
pub mod prelude {
    pub use crate::app::{Application, FontMap};
    pub use crate::constraints::{Constraints, LayoutCtx};
    pub use crate::painter::Painter;
    pub use crate::scene::UiScene;
    pub use crate::widget::{Element, Widget};
    pub use crate::widgets::{
        clock::{Clock, ClockTheme},
        grid::Grid,
    };

    pub use meridian_engine::coords::{Rect, Vec2};
    pub use meridian_engine::paint::Color;
    pub use meridian_engine::scene::LineCap;
    pub use meridian_engine::text::FontId;
}
