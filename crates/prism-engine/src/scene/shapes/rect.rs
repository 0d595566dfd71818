use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList, ZIndex};

/// Solid rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

impl DrawList {
    /// Records a solid rectangle draw command.
    #[inline]
    pub fn push_rect(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.push(z, DrawCmd::Rect(RectCmd { rect, color }));
    }

    /// Records a `width`-thick outline drawn inside `rect` as four edge rects.
    pub fn push_rect_outline(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        let r = rect.normalized();
        let w = width.min(r.size.x * 0.5).min(r.size.y * 0.5);
        if w <= 0.0 {
            return;
        }
        let (x, y, sw, sh) = (r.origin.x, r.origin.y, r.size.x, r.size.y);
        self.push_rect(z, Rect::new(x, y, sw, w), color);
        self.push_rect(z, Rect::new(x, y + sh - w, sw, w), color);
        self.push_rect(z, Rect::new(x, y + w, w, sh - 2.0 * w), color);
        self.push_rect(z, Rect::new(x + sw - w, y + w, w, sh - 2.0 * w), color);
    }
}
