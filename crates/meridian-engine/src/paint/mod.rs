//! Paint model shared between UI and renderers.
//!
//! Colors are linear and premultiplied; geometry types remain in `coords`.

mod color;

pub use color::Color;
