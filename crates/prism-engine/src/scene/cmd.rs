use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::text::TextCmd;

/// One recorded primitive. Each variant has a push helper in `scene::shapes`
/// and a matching renderer in `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Text(TextCmd),
}

impl DrawCmd {
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self, DrawCmd::Text(_))
    }
}
