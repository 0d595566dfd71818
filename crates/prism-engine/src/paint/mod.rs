//! Paint model shared between the GUI and renderers.
//!
//! Colors are premultiplied RGBA. Geometry types remain in `coords`.

pub mod color;

pub use color::Color;
