use prism_engine::coords::{Rect, Vec2, Viewport};
use prism_engine::paint::Color;

use crate::id::WidgetId;
use crate::ui::Ui;

use super::color_edit::sanitized;

const SV_CELLS: usize = 24;
const HUE_STEPS: usize = 36;
const ALPHA_STEPS: usize = 24;

/// Geometry of the picker popup.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PickerLayout {
    pub popup: Rect,
    /// Saturation grows to the right, value upwards.
    pub sv: Rect,
    /// Hue from 0 at the top to 1 at the bottom.
    pub hue: Rect,
    /// Opaque at the top.
    pub alpha: Rect,
}

impl PickerLayout {
    /// Places the popup under `anchor`, or above it if it would run off the
    /// bottom of the viewport, shifted left to stay on screen.
    pub fn new(anchor: Rect, side: f32, bar_w: f32, pad: f32, gap: f32, viewport: Viewport) -> Self {
        let w = 2.0 * pad + side + 2.0 * (gap + bar_w);
        let h = 2.0 * pad + side;

        let below = anchor.max().y + gap;
        let y = if below + h <= viewport.height {
            below
        } else {
            (anchor.origin.y - gap - h).max(0.0)
        };
        let x = anchor.origin.x.min(viewport.width - w).max(0.0);

        let sv = Rect::new(x + pad, y + pad, side, side);
        let hue = Rect::new(sv.max().x + gap, sv.origin.y, bar_w, side);
        let alpha = Rect::new(hue.max().x + gap, sv.origin.y, bar_w, side);
        Self { popup: Rect::new(x, y, w, h), sv, hue, alpha }
    }
}

impl Ui<'_> {
    /// Saturation/value square with hue and alpha bars, painted in the popup
    /// layer beside `swatch`. A press outside both closes it.
    ///
    /// Returns true when `color` was modified.
    pub(crate) fn color_picker_popup(&mut self, id: WidgetId, swatch: Rect, color: &mut [f32; 4]) -> bool {
        let style = &self.ctx.style;
        let layout = PickerLayout::new(
            swatch,
            style.picker_size,
            self.ctx.frame_height(),
            style.window_padding.x,
            style.item_inner_spacing,
            self.ctx.viewport,
        );

        let input = self.ctx.input;
        let outside = input
            .pointer
            .is_some_and(|p| !layout.popup.contains(p) && !swatch.contains(p));
        if input.pressed && outside {
            self.ctx.close_popup();
            return false;
        }
        self.ctx.declare_popup(layout.popup);

        let before = *color;
        let [r, g, b, mut alpha] = sanitized(*color);
        let mut hsv = rgb_to_hsv([r, g, b]);

        // Grays lose their hue and 1.0 wraps to 0.0; keep the remembered one
        // while it still describes the same color.
        if let Some(kept) = self.ctx.popup().map(|p| p.hue) {
            if same_rgb(hsv_to_rgb([kept, hsv[1], hsv[2]]), [r, g, b]) {
                hsv[0] = kept;
            }
        }

        let sv_it = self.ctx.interact_popup(id.with("#sv"), layout.sv);
        let hue_it = self.ctx.interact_popup(id.with("#hue"), layout.hue);
        let alpha_it = self.ctx.interact_popup(id.with("#alpha"), layout.alpha);

        let mut edited = false;
        if let Some(p) = input.pointer {
            if sv_it.active {
                hsv[1] = unit(p.x, layout.sv.origin.x, layout.sv.size.x);
                hsv[2] = 1.0 - unit(p.y, layout.sv.origin.y, layout.sv.size.y);
                edited = true;
            }
            if hue_it.active {
                hsv[0] = unit(p.y, layout.hue.origin.y, layout.hue.size.y);
                edited = true;
            }
            if alpha_it.active {
                alpha = 1.0 - unit(p.y, layout.alpha.origin.y, layout.alpha.size.y);
                edited = true;
            }
        }
        if edited {
            let [r, g, b] = hsv_to_rgb(hsv);
            *color = [r, g, b, alpha];
        }
        self.ctx.set_popup_hue(hsv[0]);

        self.paint_picker(&layout, hsv, alpha);

        color.iter().zip(before).any(|(now, was)| now.to_bits() != was.to_bits())
    }

    fn paint_picker(&mut self, layout: &PickerLayout, hsv: [f32; 3], alpha: f32) {
        let style = &self.ctx.style;
        let colors = &style.colors;
        let (bg, border, marker) = (colors.popup_bg, colors.border, colors.picker_marker);
        let (light, dark) = (colors.checker_light, colors.checker_dark);
        let border_w = style.window_border;
        let [r, g, b] = hsv_to_rgb(hsv);

        let mut p = self.ctx.overlay_painter();
        p.push_clip(layout.popup);
        p.fill_rect(layout.popup, bg);
        p.stroke_rect(layout.popup, border_w, border);

        for j in 0..SV_CELLS {
            for i in 0..SV_CELLS {
                let (x, w) = span(layout.sv.origin.x, layout.sv.size.x, SV_CELLS, i);
                let (y, h) = span(layout.sv.origin.y, layout.sv.size.y, SV_CELLS, j);
                let s = (i as f32 + 0.5) / SV_CELLS as f32;
                let v = 1.0 - (j as f32 + 0.5) / SV_CELLS as f32;
                let [cr, cg, cb] = hsv_to_rgb([hsv[0], s, v]);
                p.fill_rect(Rect::new(x, y, w, h), Color::opaque(cr, cg, cb));
            }
        }

        for k in 0..HUE_STEPS {
            let (y, h) = span(layout.hue.origin.y, layout.hue.size.y, HUE_STEPS, k);
            let [cr, cg, cb] = hsv_to_rgb([(k as f32 + 0.5) / HUE_STEPS as f32, 1.0, 1.0]);
            p.fill_rect(Rect::new(layout.hue.origin.x, y, layout.hue.size.x, h), Color::opaque(cr, cg, cb));
        }

        p.checkerboard(layout.alpha, (layout.alpha.size.x / 3.0).floor(), light, dark);
        for k in 0..ALPHA_STEPS {
            let (y, h) = span(layout.alpha.origin.y, layout.alpha.size.y, ALPHA_STEPS, k);
            let a = 1.0 - (k as f32 + 0.5) / ALPHA_STEPS as f32;
            p.fill_rect(Rect::new(layout.alpha.origin.x, y, layout.alpha.size.x, h), Color::from_straight(r, g, b, a));
        }

        let sv_at = Vec2::new(
            layout.sv.origin.x + hsv[1] * layout.sv.size.x,
            layout.sv.origin.y + (1.0 - hsv[2]) * layout.sv.size.y,
        );
        p.stroke_rect(Rect::new(sv_at.x - 3.5, sv_at.y - 3.5, 7.0, 7.0), 1.0, marker);
        p.fill_rect(bar_marker(layout.hue, hsv[0]), marker);
        p.fill_rect(bar_marker(layout.alpha, 1.0 - alpha), marker);
        p.pop_clip();
    }
}

/// Two-pixel line across a vertical bar at fraction `t` of its height.
fn bar_marker(bar: Rect, t: f32) -> Rect {
    let y = bar.origin.y + t.clamp(0.0, 1.0) * bar.size.y;
    Rect::new(bar.origin.x - 2.0, y - 1.0, bar.size.x + 4.0, 2.0)
}

/// Start and length of part `k` of `n` equal parts of `[lo, lo + len)`.
fn span(lo: f32, len: f32, n: usize, k: usize) -> (f32, f32) {
    let a = lo + len * k as f32 / n as f32;
    let b = lo + len * (k + 1) as f32 / n as f32;
    (a, b - a)
}

/// Position of `v` along `[lo, lo + len]`, clamped to [0, 1].
fn unit(v: f32, lo: f32, len: f32) -> f32 {
    if len <= 0.0 {
        return 0.0;
    }
    ((v - lo) / len).clamp(0.0, 1.0)
}

fn same_rgb(a: [f32; 3], b: [f32; 3]) -> bool {
    a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
}

/// `[h, s, v]` in [0, 1] to RGB. Hue wraps.
pub(crate) fn hsv_to_rgb([h, s, v]: [f32; 3]) -> [f32; 3] {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));
    match sector as u32 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// RGB to `[h, s, v]` in [0, 1]. Grays report hue 0.
pub(crate) fn rgb_to_hsv([r, g, b]: [f32; 3]) -> [f32; 3] {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let d = max - min;
    let s = if max > 0.0 { d / max } else { 0.0 };
    let h = if d <= 0.0 {
        0.0
    } else if max == r {
        ((g - b) / d).rem_euclid(6.0) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };
    [h, s, max]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-5)
    }

    #[test]
    fn primaries_sit_at_thirds_of_the_hue_circle() {
        assert!(close(rgb_to_hsv([1.0, 0.0, 0.0]), [0.0, 1.0, 1.0]));
        assert!(close(rgb_to_hsv([0.0, 1.0, 0.0]), [1.0 / 3.0, 1.0, 1.0]));
        assert!(close(rgb_to_hsv([0.0, 0.0, 1.0]), [2.0 / 3.0, 1.0, 1.0]));
        assert!(close(hsv_to_rgb([1.0, 1.0, 1.0]), [1.0, 0.0, 0.0]));
    }

    #[test]
    fn triangle_tint_converts_back() {
        let hsv = rgb_to_hsv([0.5, 0.6, 1.0]);
        assert!(close(hsv, [3.8 / 6.0, 0.5, 1.0]));
        assert!(close(hsv_to_rgb(hsv), [0.5, 0.6, 1.0]));
    }

    #[test]
    fn gray_has_no_saturation() {
        let hsv = rgb_to_hsv([0.4, 0.4, 0.4]);
        assert_eq!(hsv[1], 0.0);
        assert!(close(hsv_to_rgb([0.7, 0.0, 0.4]), [0.4, 0.4, 0.4]));
    }

    const VP: Viewport = Viewport::new(400.0, 400.0);

    #[test]
    fn popup_opens_below_the_swatch() {
        let anchor = Rect::new(100.0, 30.0, 20.0, 20.0);
        let l = PickerLayout::new(anchor, 150.0, 20.0, 8.0, 4.0, VP);
        assert_eq!(l.popup, Rect::new(100.0, 54.0, 214.0, 166.0));
        assert_eq!(l.sv, Rect::new(108.0, 62.0, 150.0, 150.0));
        assert_eq!(l.hue.origin.x, 262.0);
        assert_eq!(l.alpha.max().x, 306.0);
    }

    #[test]
    fn popup_flips_above_and_stays_on_screen() {
        let anchor = Rect::new(380.0, 300.0, 20.0, 20.0);
        let l = PickerLayout::new(anchor, 150.0, 20.0, 8.0, 4.0, VP);
        assert_eq!(l.popup.origin, Vec2::new(186.0, 130.0));
        assert!(l.popup.max().x <= 400.0);
    }

    #[test]
    fn spans_tile_without_gaps() {
        let (a, w) = span(10.0, 100.0, 3, 1);
        let (b, _) = span(10.0, 100.0, 3, 2);
        assert!((a + w - b).abs() < 1e-5);
        assert_eq!(unit(-5.0, 0.0, 10.0), 0.0);
        assert_eq!(unit(5.0, 0.0, 0.0), 0.0);
    }
}
