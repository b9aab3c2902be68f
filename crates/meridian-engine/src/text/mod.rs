//! Font loading and text measurement.
//!
//! Glyph rasterization lives in `render::shapes::text`; this module only owns
//! the parsed fonts so the UI layer can measure strings during layout.

mod font_system;

pub use font_system::{FontId, FontLoadError, FontSystem};
