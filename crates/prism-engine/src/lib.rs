//! Prism engine crate.
//!
//! This crate owns the platform + GPU runtime pieces used by the GUI layer and
//! the demo binary: the winit event loop, the wgpu device/surface, input
//! tracking, frame timing and the renderers that consume a [`scene::DrawList`].

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
pub mod paint;
pub mod scene;
pub mod text;
