use prism_engine::coords::Vec2;

use crate::response::Response;
use crate::ui::Ui;

impl Ui<'_> {
    /// Static text line.
    pub fn text(&mut self, text: &str) -> Response {
        let size = Vec2::new(self.ctx.measure_text(text).x, self.ctx.line_height());
        let rect = self.allocate(size);
        let color = self.ctx.style.colors.text;
        self.painter().text(text, rect.origin, color);

        Response {
            rect,
            hovered: self.ctx.input.pointer.is_some_and(|p| rect.contains(p)),
            ..Response::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::coords::{Rect, Viewport};

    use crate::{Context, GuiInput, Window};

    #[test]
    fn text_takes_one_line() {
        let mut ctx = Context::default();
        ctx.begin_frame(GuiInput::default(), Viewport::new(400.0, 400.0));
        let r = Window::new("W").position(0.0, 0.0).show(&mut ctx, |ui| ui.text("abc"));
        let rect = r.map(|r| r.rect).unwrap_or_default();
        // 13px font without a loaded face: 0.5em per char, 1.2em line.
        assert_eq!(rect.size.x, 19.5);
        assert!((rect.size.y - 15.6).abs() < 1e-4);
        assert_ne!(rect, Rect::default());
    }
}
