use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};
use crate::text::FontId;

/// A single line of text. No wrapping; the renderer stops at the clip rect.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Logical pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left corner of the line box.
    pub origin: Vec2,
}

impl TextCmd {
    /// False for commands that cannot produce a single covered pixel.
    pub fn is_visible(&self) -> bool {
        !self.text.trim().is_empty()
            && self.size > 0.0
            && self.size.is_finite()
            && self.color.a > 0.0
            && self.origin.is_finite()
    }
}

impl DrawList {
    /// Records a line of text. Invisible commands are dropped here.
    pub fn push_text(
        &mut self,
        z: ZIndex,
        text: impl Into<String>,
        font: FontId,
        size: f32,
        color: Color,
        origin: Vec2,
    ) {
        let cmd = TextCmd { text: text.into(), font, size, color, origin };
        if cmd.is_visible() {
            self.push(z, DrawCmd::Text(cmd));
        }
    }
}
