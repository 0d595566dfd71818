use prism_engine::coords::{Rect, Vec2, Viewport};

use crate::context::{Context, WindowState};
use crate::id::{display_label, WidgetId};
use crate::ui::Ui;

/// A movable, collapsible panel with a title bar.
///
/// The height always fits the content declared in [`show`](Self::show).
///
/// ```rust,ignore
/// Window::new("Settings").position(20.0, 20.0).show(&mut ctx, |ui| {
///     ui.checkbox("Enabled", &mut enabled);
/// });
/// ```
#[derive(Debug, Clone)]
pub struct Window {
    title: String,
    default_pos: Vec2,
    width: f32,
}

impl Window {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            default_pos: Vec2::new(60.0, 60.0),
            width: 300.0,
        }
    }

    /// Position used the first time this window is shown. Later frames keep
    /// wherever the user dragged it.
    pub fn position(mut self, x: f32, y: f32) -> Self {
        self.default_pos = Vec2::new(x, y);
        self
    }

    pub fn width(mut self, w: f32) -> Self {
        self.width = w.max(1.0);
        self
    }

    /// Declares the window and its contents for this frame.
    ///
    /// Returns `None` without calling `add_contents` while collapsed.
    pub fn show<R>(self, ctx: &mut Context, add_contents: impl FnOnce(&mut Ui<'_>) -> R) -> Option<R> {
        let id = WidgetId::new(&self.title);
        let style = ctx.style.clone();
        let title_h = ctx.frame_height();
        let width = self.width;

        let mut state = *ctx.windows.entry(id).or_insert(WindowState {
            pos: self.default_pos,
            collapsed: false,
        });

        let enabled = ctx.is_hovered_window(id);

        // ── title bar ──────────────────────────────────────────────────────
        let arrow_rect = Rect::new(state.pos.x, state.pos.y, title_h, title_h);
        if ctx.interact(id.with("#collapse"), arrow_rect, None, enabled).clicked {
            state.collapsed = !state.collapsed;
        }

        let title_rect = Rect::new(state.pos.x, state.pos.y, width, title_h);
        if ctx.interact(id.with("#title"), title_rect, None, enabled).dragging() {
            state.pos = state.pos + ctx.pointer_delta();
        }
        state.pos = clamp_window_pos(state.pos, width, title_h, style.window_min_visible, ctx.viewport);

        let focused = enabled || ctx.is_active(id.with("#title")) || ctx.is_active(id.with("#body"));
        let title_rect = Rect::new(state.pos.x, state.pos.y, width, title_h);

        let bg_z = {
            let mut p = ctx.painter();
            let bg_z = p.reserve_z();
            let title_bg = if focused { style.colors.title_bg_active } else { style.colors.title_bg };
            p.fill_rect(title_rect, title_bg);
            p.arrow(
                Vec2::new(state.pos.x + title_h * 0.5, state.pos.y + title_h * 0.5),
                (style.font_size * 0.3).round(),
                !state.collapsed,
                style.colors.text,
            );
            p.push_clip(title_rect.shrink(style.frame_padding.x, 0.0));
            p.text(
                display_label(&self.title),
                Vec2::new(state.pos.x + title_h + style.item_inner_spacing, state.pos.y + style.frame_padding.y),
                style.colors.text,
            );
            p.pop_clip();
            bg_z
        };

        if state.collapsed {
            ctx.painter().stroke_rect_at(bg_z, title_rect, style.window_border, style.colors.border);
            ctx.windows.insert(id, state);
            ctx.record_window(id, title_rect);
            return None;
        }

        // ── contents ───────────────────────────────────────────────────────
        let body_top = state.pos.y + title_h;
        let content = Rect::new(
            state.pos.x + style.window_padding.x,
            body_top + style.window_padding.y,
            (width - 2.0 * style.window_padding.x).max(1.0),
            0.0,
        );
        let clip = Rect::new(
            state.pos.x + style.window_padding.x * 0.5,
            body_top,
            (width - style.window_padding.x).max(0.0),
            (ctx.viewport.height - body_top).max(0.0),
        );

        ctx.painter().push_clip(clip);
        let (result, content_h) = {
            let mut ui = Ui::new(ctx, id, content, clip, enabled);
            let result = add_contents(&mut ui);
            (result, ui.content_height())
        };
        ctx.painter().pop_clip();

        let body_h = content_h + 2.0 * style.window_padding.y;
        let body_rect = Rect::new(state.pos.x, body_top, width, body_h);
        let window_rect = Rect::new(state.pos.x, state.pos.y, width, title_h + body_h);

        {
            let mut p = ctx.painter();
            p.fill_rect_at(bg_z, body_rect, style.colors.window_bg);
            p.stroke_rect_at(bg_z, window_rect, style.window_border, style.colors.border);
        }

        // Dragging from empty space moves the window too; widgets claimed the
        // pointer first if it was over one of them.
        if ctx.interact(id.with("#body"), body_rect, None, enabled).dragging() {
            state.pos = state.pos + ctx.pointer_delta();
        }

        ctx.windows.insert(id, state);
        ctx.record_window(id, window_rect);
        Some(result)
    }
}

/// Keeps at least `min_visible` of the title bar inside the viewport.
pub(crate) fn clamp_window_pos(pos: Vec2, width: f32, title_h: f32, min_visible: f32, viewport: Viewport) -> Vec2 {
    let min_x = min_visible.min(width) - width;
    let max_x = (viewport.width - min_visible.min(width)).max(min_x);
    let max_y = (viewport.height - title_h).max(0.0);
    Vec2::new(pos.x.clamp(min_x, max_x), pos.y.clamp(0.0, max_y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::GuiInput;
    use prism_engine::scene::DrawCmd;

    const VP: Viewport = Viewport::new(400.0, 400.0);

    fn pointer(x: f32, y: f32, down: bool, pressed: bool, released: bool) -> GuiInput {
        GuiInput { pointer: Some(Vec2::new(x, y)), down, pressed, released }
    }

    fn frame(ctx: &mut Context, input: GuiInput) -> Option<f32> {
        ctx.begin_frame(input, VP);
        let r = Window::new("Panel").position(50.0, 50.0).width(200.0).show(ctx, |ui| {
            ui.text("line");
            ui.available_width()
        });
        ctx.end_frame();
        r
    }

    fn window_pos(ctx: &Context) -> Vec2 {
        ctx.windows.get(&WidgetId::new("Panel")).map(|s| s.pos).unwrap_or_default()
    }

    #[test]
    fn content_width_excludes_padding() {
        let mut ctx = Context::default();
        assert_eq!(frame(&mut ctx, GuiInput::default()), Some(184.0));
    }

    #[test]
    fn title_drag_moves_window() {
        let mut ctx = Context::default();
        // First frame registers the window rect used for hover tests.
        frame(&mut ctx, pointer(150.0, 55.0, false, false, false));
        frame(&mut ctx, pointer(150.0, 55.0, true, true, false));
        frame(&mut ctx, pointer(170.0, 65.0, true, false, false));
        assert_eq!(window_pos(&ctx), Vec2::new(70.0, 60.0));
        frame(&mut ctx, pointer(170.0, 65.0, false, false, true));
        assert_eq!(window_pos(&ctx), Vec2::new(70.0, 60.0));
    }

    #[test]
    fn motion_in_the_press_frame_does_not_move_window() {
        let mut ctx = Context::default();
        frame(&mut ctx, pointer(150.0, 55.0, false, false, false));
        // Pointer travels 40px and the button goes down in the same frame.
        frame(&mut ctx, pointer(190.0, 55.0, true, true, false));
        assert_eq!(window_pos(&ctx), Vec2::new(50.0, 50.0));

        frame(&mut ctx, pointer(200.0, 55.0, true, false, false));
        assert_eq!(window_pos(&ctx), Vec2::new(60.0, 50.0));
    }

    #[test]
    fn click_with_motion_leaves_window_in_place() {
        let mut ctx = Context::default();
        frame(&mut ctx, pointer(150.0, 55.0, false, false, false));
        frame(&mut ctx, pointer(190.0, 55.0, false, true, true));
        assert_eq!(window_pos(&ctx), Vec2::new(50.0, 50.0));
    }

    #[test]
    fn arrow_click_collapses_and_expands() {
        let mut ctx = Context::default();
        frame(&mut ctx, pointer(55.0, 55.0, false, false, false));
        assert_eq!(frame(&mut ctx, pointer(55.0, 55.0, false, true, true)), None);
        assert!(frame(&mut ctx, pointer(55.0, 55.0, false, false, false)).is_none());
        assert!(frame(&mut ctx, pointer(55.0, 55.0, false, true, true)).is_some());
    }

    #[test]
    fn window_grows_with_content() {
        let mut ctx = Context::default();
        ctx.begin_frame(GuiInput::default(), VP);
        Window::new("A").show(&mut ctx, |ui| ui.text("one"));
        ctx.end_frame();
        let one = ctx.window_rect("A").unwrap_or_default();

        ctx.begin_frame(GuiInput::default(), VP);
        Window::new("A").show(&mut ctx, |ui| {
            ui.text("one");
            ui.text("two");
        });
        ctx.end_frame();
        let two = ctx.window_rect("A").unwrap_or_default();
        assert!(two.size.y > one.size.y);
    }

    #[test]
    fn background_paints_below_contents() {
        let mut ctx = Context::default();
        ctx.begin_frame(GuiInput::default(), VP);
        Window::new("A").show(&mut ctx, |ui| ui.checkbox("c", &mut false));
        let first = ctx.draw_list().iter_in_paint_order().next().map(|i| match &i.cmd {
            DrawCmd::Rect(r) => r.color,
            DrawCmd::Text(t) => t.color,
        });
        assert_eq!(first, Some(ctx.style().colors.window_bg));
    }

    #[test]
    fn clamp_keeps_title_reachable() {
        let p = clamp_window_pos(Vec2::new(-500.0, -10.0), 300.0, 19.0, 20.0, VP);
        assert_eq!(p, Vec2::new(-280.0, 0.0));
        let p = clamp_window_pos(Vec2::new(900.0, 900.0), 300.0, 19.0, 20.0, VP);
        assert_eq!(p, Vec2::new(380.0, 381.0));
        let p = clamp_window_pos(Vec2::new(10.0, 10.0), 300.0, 19.0, 20.0, VP);
        assert_eq!(p, Vec2::new(10.0, 10.0));
    }
}
