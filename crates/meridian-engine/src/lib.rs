//! Meridian engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by higher layers:
//! the winit event loop, the wgpu device, the draw list and the shape
//! renderers that consume it.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
