use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;

use crate::id::display_label;
use crate::response::Response;
use crate::ui::Ui;

use super::color_picker::rgb_to_hsv;

const CHANNELS: [&str; 4] = ["R", "G", "B", "A"];

impl Ui<'_> {
    /// RGBA editor: four drag fields showing 0..255 plus a preview swatch.
    ///
    /// Dragging a field horizontally changes that channel by 1/255 per
    /// logical pixel; channels stay within [0, 1]. Clicking the swatch toggles
    /// a picker popup. `color` is straight alpha.
    pub fn color_edit4(&mut self, label: &str, color: &mut [f32; 4]) -> Response {
        let id = self.widget_id(label);
        let text = display_label(label);

        let frame_h = self.ctx.frame_height();
        let item_w = self.item_width();
        let inner = self.ctx.style.item_inner_spacing;
        let label_w = self.ctx.measure_text(text).x;
        let width = if label_w > 0.0 { item_w + inner + label_w } else { item_w };

        let rect = self.allocate(Vec2::new(width, frame_h));
        let fields = field_rects(rect.origin, item_w, frame_h, inner);
        let swatch = Rect::new(fields[3].max().x + inner, rect.origin.y, frame_h, frame_h);

        let dx = self.ctx.pointer_delta().x;
        let mut resp = Response { rect, ..Response::default() };

        for (i, field) in fields.iter().enumerate() {
            let it = self.interact(id.with(i), *field);
            if it.dragging() && dx != 0.0 {
                let v = drag_channel(color[i], dx);
                if v.to_bits() != color[i].to_bits() {
                    color[i] = v;
                    resp.changed = true;
                }
            }
            resp.hovered |= it.hovered;
            resp.clicked |= it.clicked;

            let style = &self.ctx.style;
            let bg = style.frame_bg(it.hovered, it.active);
            let text_color = style.colors.text;
            let shown = format!("{}:{}", CHANNELS[i], channel_to_u8(color[i]));

            let mut p = self.painter();
            p.fill_rect(*field, bg);
            p.push_clip(*field);
            p.text_centered(&shown, *field, text_color);
            p.pop_clip();
        }

        let sw = self.interact(id.with("swatch"), swatch);
        resp.hovered |= sw.hovered;
        resp.clicked |= sw.clicked;
        if sw.clicked {
            if self.ctx.popup_owned_by(id) {
                self.ctx.close_popup();
            } else {
                let [r, g, b, _] = sanitized(*color);
                self.ctx.open_popup(id, rgb_to_hsv([r, g, b])[0]);
            }
        }
        if self.ctx.popup_owned_by(id) && self.color_picker_popup(id, swatch, color) {
            resp.changed = true;
        }

        let style = &self.ctx.style;
        let (light, dark) = (style.colors.checker_light, style.colors.checker_dark);
        let text_color = style.colors.text;
        let text_y = rect.origin.y + style.frame_padding.y;
        let [r, g, b, a] = sanitized(*color);

        // Left half opaque, right half over a checkerboard to preview alpha.
        let half = (swatch.size.x * 0.5).floor();
        let left = Rect::new(swatch.origin.x, swatch.origin.y, half, swatch.size.y);
        let right = Rect::new(swatch.origin.x + half, swatch.origin.y, swatch.size.x - half, swatch.size.y);

        let mut p = self.painter();
        p.fill_rect(left, Color::opaque(r, g, b));
        p.checkerboard(right, (swatch.size.y / 3.0).floor(), light, dark);
        p.fill_rect(right, Color::from_straight(r, g, b, a));
        p.text(text, Vec2::new(swatch.max().x + inner, text_y), text_color);

        resp
    }
}

/// Four equal drag fields sharing `item_w` with the swatch square.
fn field_rects(origin: Vec2, item_w: f32, frame_h: f32, inner: f32) -> [Rect; 4] {
    let fields_w = (item_w - frame_h - inner).max(4.0);
    let w = ((fields_w - 3.0 * inner) / 4.0).floor().max(1.0);
    std::array::from_fn(|i| Rect::new(origin.x + i as f32 * (w + inner), origin.y, w, frame_h))
}

pub(crate) fn drag_channel(value: f32, dx: f32) -> f32 {
    let base = if value.is_finite() { value } else { 0.0 };
    (base + dx / 255.0).clamp(0.0, 1.0)
}

pub(crate) fn channel_to_u8(value: f32) -> u8 {
    let v = if value.is_finite() { value.clamp(0.0, 1.0) } else { 0.0 };
    (v * 255.0 + 0.5) as u8
}

pub(super) fn sanitized(c: [f32; 4]) -> [f32; 4] {
    c.map(|v| if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::coords::Viewport;

    use crate::{Context, GuiInput, Window};

    #[test]
    fn channel_display_rounds_to_byte() {
        assert_eq!(channel_to_u8(0.5), 128);
        assert_eq!(channel_to_u8(0.3), 77);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(-2.0), 0);
        assert_eq!(channel_to_u8(f32::NAN), 0);
    }

    #[test]
    fn drag_is_one_step_per_pixel_and_clamped() {
        assert!((drag_channel(0.5, 2.0) - (0.5 + 2.0 / 255.0)).abs() < 1e-6);
        assert_eq!(drag_channel(0.99, 100.0), 1.0);
        assert_eq!(drag_channel(0.01, -100.0), 0.0);
    }

    #[test]
    fn fields_fit_before_swatch() {
        let f = field_rects(Vec2::zero(), 190.0, 20.0, 4.0);
        assert_eq!(f[0].size.x, 38.0);
        assert_eq!(f[3].origin.x, 126.0);
        assert!(f[3].max().x + 4.0 + 20.0 <= 190.0);
    }

    #[test]
    fn dragging_a_field_edits_only_that_channel() {
        let mut ctx = Context::default();
        let mut color = [0.5, 0.6, 1.0, 0.3];
        let vp = Viewport::new(400.0, 400.0);

        let run = |ctx: &mut Context, input: GuiInput, color: &mut [f32; 4]| {
            ctx.begin_frame(input, vp);
            let r = Window::new("W")
                .position(0.0, 0.0)
                .show(ctx, |ui| ui.color_edit4("Color Picker", color))
                .unwrap_or_default();
            ctx.end_frame();
            r
        };

        let r = run(&mut ctx, GuiInput::default(), &mut color);
        let red = Vec2::new(r.rect.origin.x + 2.0, r.rect.center().y);
        let at = |p: Vec2, down, pressed, released| GuiInput { pointer: Some(p), down, pressed, released };

        run(&mut ctx, at(red, false, false, false), &mut color);
        run(&mut ctx, at(red, true, true, false), &mut color);
        let r = run(&mut ctx, at(red + Vec2::new(10.0, 0.0), true, false, false), &mut color);
        assert!(r.changed);
        assert!((color[0] - (0.5 + 10.0 / 255.0)).abs() < 1e-5);
        assert_eq!(&color[1..], &[0.6, 1.0, 0.3]);

        // Large drag saturates at 1.0.
        run(&mut ctx, at(red + Vec2::new(500.0, 0.0), true, false, false), &mut color);
        assert_eq!(color[0], 1.0);
    }

    #[test]
    fn click_with_motion_in_the_same_frame_keeps_value() {
        let mut ctx = Context::default();
        let mut color = [0.5, 0.6, 1.0, 0.3];
        let vp = Viewport::new(400.0, 400.0);

        let run = |ctx: &mut Context, input: GuiInput, color: &mut [f32; 4]| {
            ctx.begin_frame(input, vp);
            let r = Window::new("W")
                .position(0.0, 0.0)
                .show(ctx, |ui| ui.color_edit4("Color Picker", color))
                .unwrap_or_default();
            ctx.end_frame();
            r
        };

        let r = run(&mut ctx, GuiInput::default(), &mut color);
        let red = Vec2::new(r.rect.origin.x + 2.0, r.rect.center().y);
        let at = |p: Vec2, down, pressed, released| GuiInput { pointer: Some(p), down, pressed, released };

        run(&mut ctx, at(red, false, false, false), &mut color);
        let r = run(&mut ctx, at(red + Vec2::new(20.0, 0.0), false, true, true), &mut color);
        assert!(r.clicked && !r.changed);
        assert_eq!(color, [0.5, 0.6, 1.0, 0.3]);

        // Press-frame motion is dropped even when the button stays down.
        run(&mut ctx, at(red, false, false, false), &mut color);
        run(&mut ctx, at(red + Vec2::new(20.0, 0.0), true, true, false), &mut color);
        assert_eq!(color[0], 0.5);
    }

    #[test]
    fn swatch_opens_a_picker_that_edits_blocks_and_closes() {
        let mut ctx = Context::default();
        let mut color = [0.5, 0.6, 1.0, 0.3];
        let mut under = false;
        let vp = Viewport::new(400.0, 400.0);

        let run = |ctx: &mut Context, input: GuiInput, color: &mut [f32; 4], under: &mut bool| {
            ctx.begin_frame(input, vp);
            let r = Window::new("W")
                .position(0.0, 0.0)
                .width(300.0)
                .show(ctx, |ui| {
                    let edit = ui.color_edit4("Color Picker", color);
                    let check = ui.checkbox("Something long under the popup", under);
                    (edit, check)
                })
                .unwrap_or_default();
            ctx.end_frame();
            r
        };
        let at = |p: Vec2, down, pressed, released| GuiInput { pointer: Some(p), down, pressed, released };
        let click = |p: Vec2| at(p, false, true, true);

        let (edit, check) = run(&mut ctx, GuiInput::default(), &mut color, &mut under);
        let frame_h = edit.rect.size.y;
        let swatch = Vec2::new(edit.rect.origin.x + 160.0 + frame_h * 0.5, edit.rect.center().y);

        run(&mut ctx, at(swatch, false, false, false), &mut color, &mut under);
        let (edit, _) = run(&mut ctx, click(swatch), &mut color, &mut under);
        assert!(edit.clicked && !edit.changed);
        let popup = ctx.popup_rect().unwrap_or_default();
        assert!(popup.size.x > 0.0);
        assert!(!ctx.overlay_list().items().is_empty());

        // Padding of the popup, over the checkbox row.
        let gap = popup.origin + Vec2::new(3.0, 10.0);
        assert!(check.rect.contains(gap));
        run(&mut ctx, at(gap, false, false, false), &mut color, &mut under);
        run(&mut ctx, click(gap), &mut color, &mut under);
        assert!(!under);
        assert!(ctx.popup_rect().is_some());

        // Middle of the saturation/value square.
        let sv = popup.origin + Vec2::new(8.0 + 75.0, 8.0 + 75.0);
        let (edit, _) = run(&mut ctx, at(sv, true, true, false), &mut color, &mut under);
        assert!(edit.changed);
        run(&mut ctx, at(sv, false, false, true), &mut color, &mut under);
        for (got, want) in color.iter().zip([0.25, 0.3, 0.5, 0.3]) {
            assert!((got - want).abs() < 1e-4, "{color:?}");
        }

        run(&mut ctx, click(Vec2::new(390.0, 390.0)), &mut color, &mut under);
        assert!(ctx.popup_rect().is_none());
        run(&mut ctx, at(gap, false, false, false), &mut color, &mut under);
        assert!(ctx.overlay_list().items().is_empty());

        // Closed popup no longer shields the checkbox.
        run(&mut ctx, click(gap), &mut color, &mut under);
        assert!(under);
    }

    #[test]
    fn second_swatch_click_closes_the_picker() {
        let mut ctx = Context::default();
        let mut color = [0.2, 0.2, 0.2, 1.0];
        let vp = Viewport::new(400.0, 400.0);

        let run = |ctx: &mut Context, input: GuiInput, color: &mut [f32; 4]| {
            ctx.begin_frame(input, vp);
            let r = Window::new("W")
                .position(0.0, 0.0)
                .width(300.0)
                .show(ctx, |ui| ui.color_edit4("Color Picker", color))
                .unwrap_or_default();
            ctx.end_frame();
            r
        };

        let r = run(&mut ctx, GuiInput::default(), &mut color);
        let swatch = Vec2::new(r.rect.origin.x + 160.0 + r.rect.size.y * 0.5, r.rect.center().y);
        let idle = GuiInput { pointer: Some(swatch), ..GuiInput::default() };
        let click = GuiInput { pressed: true, released: true, ..idle };

        run(&mut ctx, idle, &mut color);
        run(&mut ctx, click, &mut color);
        assert!(ctx.popup_rect().is_some());
        run(&mut ctx, idle, &mut color);
        run(&mut ctx, click, &mut color);
        assert!(ctx.popup_rect().is_none());
        assert_eq!(color, [0.2, 0.2, 0.2, 1.0]);
    }
}
