use prism_engine::coords::{Rect, Vec2};

use crate::id::display_label;
use crate::response::Response;
use crate::ui::Ui;

impl Ui<'_> {
    /// Square toggle followed by its label. Clicking the box or the label flips `checked`.
    pub fn checkbox(&mut self, label: &str, checked: &mut bool) -> Response {
        let id = self.widget_id(label);
        let text = display_label(label);

        let square = self.ctx.frame_height();
        let inner = self.ctx.style.item_inner_spacing;
        let label_w = self.ctx.measure_text(text).x;
        let width = if label_w > 0.0 { square + inner + label_w } else { square };

        let rect = self.allocate(Vec2::new(width, square));
        let it = self.interact(id, rect);

        let changed = it.clicked;
        if changed {
            *checked = !*checked;
        }

        let style = &self.ctx.style;
        let frame_bg = style.frame_bg(it.hovered, it.active);
        let mark = style.colors.check_mark;
        let text_color = style.colors.text;
        let text_y = rect.origin.y + style.frame_padding.y;

        let box_rect = Rect::new(rect.origin.x, rect.origin.y, square, square);
        let mut p = self.painter();
        p.fill_rect(box_rect, frame_bg);
        if *checked {
            let pad = (square / 6.0).floor().max(1.0);
            p.check_mark(box_rect.shrink(pad, pad), mark);
        }
        p.text(text, Vec2::new(box_rect.max().x + inner, text_y), text_color);

        Response { rect, hovered: it.hovered, clicked: it.clicked, changed }
    }
}

#[cfg(test)]
mod tests {
    use prism_engine::coords::{Vec2, Viewport};

    use crate::{Context, GuiInput, Response, Window};

    fn frame(ctx: &mut Context, input: GuiInput, value: &mut bool) -> Response {
        ctx.begin_frame(input, Viewport::new(400.0, 400.0));
        let r = Window::new("W")
            .position(0.0, 0.0)
            .show(ctx, |ui| ui.checkbox("Draw Triangle", value))
            .unwrap_or_default();
        ctx.end_frame();
        r
    }

    fn at(p: Vec2, down: bool, pressed: bool, released: bool) -> GuiInput {
        GuiInput { pointer: Some(p), down, pressed, released }
    }

    #[test]
    fn click_toggles_on_release() {
        let mut ctx = Context::default();
        let mut value = true;
        let rect = frame(&mut ctx, GuiInput::default(), &mut value).rect;
        let c = rect.center();

        frame(&mut ctx, at(c, false, false, false), &mut value);
        let r = frame(&mut ctx, at(c, true, true, false), &mut value);
        assert!(value && !r.changed);

        let r = frame(&mut ctx, at(c, false, false, true), &mut value);
        assert!(!value && r.changed && r.clicked);
    }

    #[test]
    fn release_elsewhere_does_not_toggle() {
        let mut ctx = Context::default();
        let mut value = false;
        let rect = frame(&mut ctx, GuiInput::default(), &mut value).rect;
        let c = rect.center();

        frame(&mut ctx, at(c, false, false, false), &mut value);
        frame(&mut ctx, at(c, true, true, false), &mut value);
        let r = frame(&mut ctx, at(Vec2::new(c.x, c.y + 200.0), false, false, true), &mut value);
        assert!(!value && !r.changed);
    }

    #[test]
    fn hidden_id_suffix_does_not_widen() {
        let mut ctx = Context::default();
        ctx.begin_frame(GuiInput::default(), Viewport::new(400.0, 400.0));
        let (a, b) = Window::new("W")
            .show(&mut ctx, |ui| {
                let a = ui.checkbox("On", &mut false).rect;
                let b = ui.checkbox("On##second", &mut false).rect;
                (a, b)
            })
            .unwrap_or_default();
        assert_eq!(a.size, b.size);
    }
}
