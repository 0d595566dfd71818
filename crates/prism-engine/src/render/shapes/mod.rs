//! Overlay shape renderers for the GUI draw stream.

mod common;

pub mod rect;
pub mod text;

pub use rect::RectRenderer;
pub use text::TextRenderer;
