use prism_engine::coords::{Rect, Vec2};
use prism_engine::paint::Color;
use prism_engine::scene::{DrawList, ZIndex};
use prism_engine::text::{FontId, FontSystem};

/// Widget drawing surface.
///
/// Wraps the context's `DrawList` and assigns increasing z-indices so shapes
/// stack in the order they are drawn.
pub struct Painter<'a> {
    pub(crate) draw_list: &'a mut DrawList,
    pub(crate) font_system: &'a FontSystem,
    pub(crate) font: Option<FontId>,
    pub(crate) font_size: f32,
    z: &'a mut i32,
}

impl<'a> Painter<'a> {
    pub(crate) fn new(
        draw_list: &'a mut DrawList,
        font_system: &'a FontSystem,
        font: Option<FontId>,
        font_size: f32,
        z: &'a mut i32,
    ) -> Self {
        Self { draw_list, font_system, font, font_size, z }
    }

    /// Reserves a z-index now for a shape that will be pushed later, so it
    /// ends up beneath everything drawn in between.
    pub fn reserve_z(&mut self) -> ZIndex {
        self.next_z()
    }

    /// Width/height of `text` at the style font size.
    pub fn measure_text(&self, text: &str) -> Vec2 {
        measure(self.font_system, self.font, text, self.font_size)
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect(z, rect, color);
    }

    /// Solid rect at a previously reserved z-index.
    pub fn fill_rect_at(&mut self, z: ZIndex, rect: Rect, color: Color) {
        self.draw_list.push_rect(z, rect, color);
    }

    /// Outline drawn inside `rect`, above everything painted so far.
    pub fn stroke_rect(&mut self, rect: Rect, width: f32, color: Color) {
        let z = self.next_z();
        self.draw_list.push_rect_outline(z, rect, width, color);
    }

    pub fn stroke_rect_at(&mut self, z: ZIndex, rect: Rect, width: f32, color: Color) {
        self.draw_list.push_rect_outline(z, rect, width, color);
    }

    /// Single line of text with its top-left at `origin`. No-op without a font.
    pub fn text(&mut self, text: &str, origin: Vec2, color: Color) {
        let Some(font) = self.font else { return };
        if text.is_empty() {
            return;
        }
        let z = self.next_z();
        self.draw_list.push_text(z, text, font, self.font_size, color, origin);
    }

    /// Text centred inside `rect`.
    pub fn text_centered(&mut self, text: &str, rect: Rect, color: Color) {
        let size = self.measure_text(text);
        let c = rect.center();
        self.text(text, Vec2::new(c.x - size.x * 0.5, c.y - size.y * 0.5), color);
    }

    /// Filled triangle made of one-pixel strips, pointing right or down.
    pub fn arrow(&mut self, center: Vec2, half: f32, down: bool, color: Color) {
        let z = self.next_z();
        let steps = half.max(1.0).ceil() as usize;
        for i in 0..steps {
            let t = i as f32;
            let len = 2.0 * (half - t).max(0.0);
            let r = if down {
                Rect::new(center.x - (half - t), center.y - half * 0.5 + t, len, 1.0)
            } else {
                Rect::new(center.x - half * 0.5 + t, center.y - (half - t), 1.0, len)
            };
            if !r.is_empty() {
                self.draw_list.push_rect(z, r, color);
            }
        }
    }

    /// Check mark fitted into `rect`, stamped as small squares along two strokes.
    pub fn check_mark(&mut self, rect: Rect, color: Color) {
        let z = self.next_z();
        let thickness = (rect.size.x / 5.0).max(1.0);
        let sz = rect.size.x - thickness * 0.5;
        let x0 = rect.origin.x + thickness * 0.25;
        let y0 = rect.origin.y + thickness * 0.25;
        let third = sz / 3.0;
        let bx = x0 + third;
        let by = y0 + sz - third * 0.5;

        let points = [
            Vec2::new(bx - third, by - third),
            Vec2::new(bx, by),
            Vec2::new(bx + third * 2.0, by - third * 2.0),
        ];
        for seg in points.windows(2) {
            let (a, b) = (seg[0], seg[1]);
            let d = b - a;
            let steps = d.x.abs().max(d.y.abs()).ceil().max(1.0) as usize;
            for i in 0..=steps {
                let c = a + d * (i as f32 / steps as f32);
                let dot = Rect::new(c.x - thickness * 0.5, c.y - thickness * 0.5, thickness, thickness);
                if let Some(dot) = dot.intersect(rect) {
                    self.draw_list.push_rect(z, dot, color);
                }
            }
        }
    }

    /// Two-tone checkerboard used behind translucent color previews.
    pub fn checkerboard(&mut self, rect: Rect, cell: f32, light: Color, dark: Color) {
        self.fill_rect(rect, light);
        let z = self.next_z();
        let cell = cell.max(1.0);
        let cols = (rect.size.x / cell).ceil() as usize;
        let rows = (rect.size.y / cell).ceil() as usize;
        for row in 0..rows {
            for col in (row % 2..cols).step_by(2) {
                let c = Rect::new(
                    rect.origin.x + col as f32 * cell,
                    rect.origin.y + row as f32 * cell,
                    cell,
                    cell,
                );
                if let Some(c) = c.intersect(rect) {
                    self.draw_list.push_rect(z, c, dark);
                }
            }
        }
    }

    pub fn push_clip(&mut self, rect: Rect) {
        self.draw_list.push_clip(rect);
    }

    pub fn pop_clip(&mut self) {
        self.draw_list.pop_clip();
    }

    #[inline]
    fn next_z(&mut self) -> ZIndex {
        let z = ZIndex::new(*self.z);
        *self.z += 1;
        z
    }
}

/// Measures a line of text. Without a loaded font the width is estimated
/// at half an em per character so layout stays usable.
pub(crate) fn measure(fonts: &FontSystem, font: Option<FontId>, text: &str, size: f32) -> Vec2 {
    match font {
        Some(id) => fonts.measure_text(text, id, size),
        None => Vec2::new(text.chars().count() as f32 * size * 0.5, size * 1.2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::scene::DrawCmd;

    fn rects(dl: &DrawList) -> Vec<Rect> {
        dl.items()
            .iter()
            .filter_map(|i| match &i.cmd {
                DrawCmd::Rect(r) => Some(r.rect),
                DrawCmd::Text(_) => None,
            })
            .collect()
    }

    #[test]
    fn reserved_z_paints_below_later_shapes() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut z = 0;
        let mut p = Painter::new(&mut dl, &fonts, None, 13.0, &mut z);
        let bg = p.reserve_z();
        p.fill_rect(Rect::new(1.0, 0.0, 1.0, 1.0), Color::white());
        p.fill_rect_at(bg, Rect::new(0.0, 0.0, 10.0, 10.0), Color::white());

        let first = dl.iter_in_paint_order().next().map(|i| i.key.z);
        assert_eq!(first, Some(ZIndex(0)));
        assert_eq!(z, 2);
    }

    #[test]
    fn text_without_font_is_skipped_but_measured() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut z = 0;
        let mut p = Painter::new(&mut dl, &fonts, None, 10.0, &mut z);
        assert_eq!(p.measure_text("abcd").x, 20.0);
        p.text("abcd", Vec2::zero(), Color::white());
        assert!(dl.is_empty());
    }

    #[test]
    fn checkerboard_stays_inside_rect() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut z = 0;
        let area = Rect::new(0.0, 0.0, 10.0, 7.0);
        Painter::new(&mut dl, &fonts, None, 13.0, &mut z)
            .checkerboard(area, 4.0, Color::white(), Color::transparent());
        let all = rects(&dl);
        assert!(all.len() > 2);
        assert!(all.iter().all(|r| area.intersect(*r) == Some(*r)));
    }

    #[test]
    fn check_mark_is_clipped_to_box() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut z = 0;
        let area = Rect::new(3.0, 3.0, 12.0, 12.0);
        Painter::new(&mut dl, &fonts, None, 13.0, &mut z).check_mark(area, Color::white());
        let all = rects(&dl);
        assert!(!all.is_empty());
        let eps = 1e-4;
        assert!(all.iter().all(|r| {
            r.origin.x >= area.origin.x - eps
                && r.origin.y >= area.origin.y - eps
                && r.max().x <= area.max().x + eps
                && r.max().y <= area.max().y + eps
        }));
    }

    #[test]
    fn arrow_fits_its_box() {
        let mut dl = DrawList::new();
        let fonts = FontSystem::new();
        let mut z = 0;
        Painter::new(&mut dl, &fonts, None, 13.0, &mut z)
            .arrow(Vec2::new(10.0, 10.0), 4.0, true, Color::white());
        let bounds = Rect::new(6.0, 8.0, 8.0, 4.0);
        let all = rects(&dl);
        assert_eq!(all.len(), 4);
        assert!(all.iter().all(|r| bounds.intersect(*r) == Some(*r)));
    }
}
