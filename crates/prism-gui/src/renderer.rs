use prism_engine::render::shapes::{RectRenderer, TextRenderer};
use prism_engine::render::{RenderCtx, RenderTarget};

use crate::context::Context;

/// Draws a [`Context`]'s frame with the engine's overlay renderers.
///
/// Window contents go first (rectangles, then text), then the popup layer the
/// same way. The popup layer has its own renderers so its instance buffers do
/// not overwrite the window layer's within one submission.
#[derive(Default)]
pub struct GuiRenderer {
    rects: RectRenderer,
    text: TextRenderer,
    overlay_rects: RectRenderer,
    overlay_text: TextRenderer,
}

impl GuiRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, gui: &mut Context) {
        let (draw_list, overlay, fonts) = gui.render_parts();
        self.rects.render(rctx, target, draw_list);
        self.text.render(rctx, target, draw_list, fonts);

        if overlay.is_empty() {
            return;
        }
        self.overlay_rects.render(rctx, target, overlay);
        if overlay.items().iter().any(|item| item.cmd.is_text()) {
            self.overlay_text.render(rctx, target, overlay, fonts);
        }
    }
}
