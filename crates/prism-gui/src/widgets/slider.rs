use std::ops::RangeInclusive;

use prism_engine::coords::{Rect, Vec2};

use crate::id::display_label;
use crate::response::Response;
use crate::ui::Ui;

impl Ui<'_> {
    /// Horizontal slider over `range`. Clicking or dragging inside the frame
    /// sets the value from the pointer position. The value is clamped to the
    /// range every frame and shown with three decimals.
    pub fn slider_f32(&mut self, label: &str, value: &mut f32, range: RangeInclusive<f32>) -> Response {
        let id = self.widget_id(label);
        let text = display_label(label);
        let (lo, hi) = ordered(*range.start(), *range.end());

        let frame_h = self.ctx.frame_height();
        let item_w = self.item_width();
        let inner = self.ctx.style.item_inner_spacing;
        let grab_min = self.ctx.style.grab_min_size;
        let grab_pad = self.ctx.style.grab_padding;
        let label_w = self.ctx.measure_text(text).x;
        let width = if label_w > 0.0 { item_w + inner + label_w } else { item_w };

        let rect = self.allocate(Vec2::new(width, frame_h));
        let frame = Rect::new(rect.origin.x, rect.origin.y, item_w, frame_h);
        let it = self.interact(id, frame);

        let before = *value;
        if !value.is_finite() {
            *value = lo;
        }
        if it.active {
            if let Some(p) = self.ctx.input.pointer {
                let t = slider_t_at(p.x, frame, grab_min, grab_pad);
                *value = lo + t * (hi - lo);
            }
        }
        *value = value.clamp(lo, hi);
        let changed = value.to_bits() != before.to_bits();

        let style = &self.ctx.style;
        let frame_bg = style.frame_bg(it.hovered, it.active);
        let grab_color = if it.active { style.colors.slider_grab_active } else { style.colors.slider_grab };
        let text_color = style.colors.text;
        let text_y = rect.origin.y + style.frame_padding.y;

        let t = if hi > lo { (*value - lo) / (hi - lo) } else { 0.0 };
        let grab = slider_grab_rect(t, frame, grab_min, grab_pad);
        let shown = format!("{:.3}", *value);

        let mut p = self.painter();
        p.fill_rect(frame, frame_bg);
        p.fill_rect(grab, grab_color);
        p.text_centered(&shown, frame, text_color);
        p.text(text, Vec2::new(frame.max().x + inner, text_y), text_color);

        Response { rect, hovered: it.hovered, clicked: it.clicked, changed }
    }
}

fn ordered(a: f32, b: f32) -> (f32, f32) {
    if a <= b { (a, b) } else { (b, a) }
}

fn grab_size(frame: Rect, grab_min: f32, grab_pad: f32) -> f32 {
    grab_min.min((frame.size.x - 2.0 * grab_pad).max(0.0))
}

/// Normalized position of pointer `x` along the slider track, in [0, 1].
/// The grab is centred on the pointer.
pub(crate) fn slider_t_at(x: f32, frame: Rect, grab_min: f32, grab_pad: f32) -> f32 {
    let grab = grab_size(frame, grab_min, grab_pad);
    let usable = frame.size.x - 2.0 * grab_pad - grab;
    if usable <= 0.0 {
        return 0.0;
    }
    ((x - (frame.origin.x + grab_pad + grab * 0.5)) / usable).clamp(0.0, 1.0)
}

pub(crate) fn slider_grab_rect(t: f32, frame: Rect, grab_min: f32, grab_pad: f32) -> Rect {
    let grab = grab_size(frame, grab_min, grab_pad);
    let usable = (frame.size.x - 2.0 * grab_pad - grab).max(0.0);
    Rect::new(
        frame.origin.x + grab_pad + t.clamp(0.0, 1.0) * usable,
        frame.origin.y + grab_pad,
        grab,
        (frame.size.y - 2.0 * grab_pad).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::coords::Viewport;

    use crate::{Context, GuiInput, Window};

    // 100px frame, 10px grab, 2px padding: the grab centre travels 7..93.
    const FRAME: Rect = Rect::new(0.0, 0.0, 100.0, 20.0);

    #[test]
    fn pointer_maps_linearly_to_track() {
        assert_eq!(slider_t_at(7.0, FRAME, 10.0, 2.0), 0.0);
        assert_eq!(slider_t_at(93.0, FRAME, 10.0, 2.0), 1.0);
        assert!((slider_t_at(50.0, FRAME, 10.0, 2.0) - 0.5).abs() < 1e-6);
        assert_eq!(slider_t_at(-40.0, FRAME, 10.0, 2.0), 0.0);
        assert_eq!(slider_t_at(400.0, FRAME, 10.0, 2.0), 1.0);
    }

    #[test]
    fn grab_follows_value() {
        assert_eq!(slider_grab_rect(0.0, FRAME, 10.0, 2.0), Rect::new(2.0, 2.0, 10.0, 16.0));
        assert_eq!(slider_grab_rect(1.0, FRAME, 10.0, 2.0), Rect::new(88.0, 2.0, 10.0, 16.0));
    }

    #[test]
    fn tiny_frame_does_not_divide_by_zero() {
        let f = Rect::new(0.0, 0.0, 4.0, 4.0);
        assert_eq!(slider_t_at(3.0, f, 10.0, 2.0), 0.0);
        assert!(slider_grab_rect(0.5, f, 10.0, 2.0).origin.x.is_finite());
    }

    fn frame(ctx: &mut Context, input: GuiInput, value: &mut f32) -> crate::Response {
        ctx.begin_frame(input, Viewport::new(400.0, 400.0));
        let r = Window::new("W")
            .position(0.0, 0.0)
            .show(ctx, |ui| ui.slider_f32("Size", value, 0.5..=2.0))
            .unwrap_or_default();
        ctx.end_frame();
        r
    }

    #[test]
    fn out_of_range_value_is_clamped_without_input() {
        let mut ctx = Context::default();
        let mut v = 5.0;
        let r = frame(&mut ctx, GuiInput::default(), &mut v);
        assert_eq!(v, 2.0);
        assert!(r.changed);

        let mut v = f32::NAN;
        frame(&mut ctx, GuiInput::default(), &mut v);
        assert_eq!(v, 0.5);
    }

    #[test]
    fn drag_sets_value_from_pointer() {
        let mut ctx = Context::default();
        let mut v = 1.0;
        let r = frame(&mut ctx, GuiInput::default(), &mut v);
        let y = r.rect.center().y;
        let left = r.rect.origin.x;

        let at = |x: f32, down, pressed, released| GuiInput {
            pointer: Some(Vec2::new(x, y)),
            down,
            pressed,
            released,
        };

        frame(&mut ctx, at(left + 1.0, false, false, false), &mut v);
        let r = frame(&mut ctx, at(left + 1.0, true, true, false), &mut v);
        assert_eq!(v, 0.5);
        assert!(r.changed);

        // Dragging far past the right edge pins the maximum.
        frame(&mut ctx, at(left + 1000.0, true, false, false), &mut v);
        assert_eq!(v, 2.0);

        frame(&mut ctx, at(left + 1000.0, false, false, true), &mut v);
        let r = frame(&mut ctx, at(left + 1000.0, false, false, false), &mut v);
        assert!(!r.changed);
        assert_eq!(v, 2.0);
    }

    #[test]
    fn reversed_range_is_accepted() {
        assert_eq!(ordered(2.0, 0.5), (0.5, 2.0));
    }
}
