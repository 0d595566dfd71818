use std::collections::HashMap;

use prism_engine::coords::{Rect, Vec2, Viewport};
use prism_engine::scene::DrawList;
use prism_engine::text::{FontId, FontLoadError, FontSystem};

use crate::id::WidgetId;
use crate::input::GuiInput;
use crate::painter::{self, Painter};
use crate::style::Style;

/// Persistent per-window state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct WindowState {
    pub pos: Vec2,
    pub collapsed: bool,
}

/// Result of hit-testing a widget against the current pointer state.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub(crate) struct Interaction {
    pub hovered: bool,
    /// The widget owns the pointer (pressed on it and not yet released).
    pub active: bool,
    /// Released over the widget while it was active.
    pub clicked: bool,
    /// Captured the pointer this frame. Pointer motion from before the press
    /// is not a drag.
    pub just_pressed: bool,
}

impl Interaction {
    /// Active and past the press frame.
    pub fn dragging(&self) -> bool {
        self.active && !self.just_pressed
    }
}

/// The one open popup and the widget that owns it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub(crate) struct PopupState {
    pub owner: WidgetId,
    /// Hue kept across frames; grays and black carry none of their own.
    pub hue: f32,
}

/// Immediate-mode GUI state.
///
/// Widgets are re-declared every frame between [`begin_frame`](Self::begin_frame)
/// and [`end_frame`](Self::end_frame). Only interaction state survives across
/// frames: the active widget, window positions and collapse flags, and the
/// previous pointer position.
pub struct Context {
    pub(crate) style: Style,
    fonts: FontSystem,
    font: Option<FontId>,
    draw_list: DrawList,
    next_z: i32,
    /// Popups; rendered after `draw_list` and free of window clips.
    overlay: DrawList,
    overlay_z: i32,

    pub(crate) input: GuiInput,
    prev_pointer: Option<Vec2>,
    pub(crate) viewport: Viewport,

    active: Option<WidgetId>,
    pub(crate) windows: HashMap<WidgetId, WindowState>,

    /// Window rects from the previous frame, in draw order.
    prev_window_rects: Vec<(WidgetId, Rect)>,
    window_rects: Vec<(WidgetId, Rect)>,
    hovered_window: Option<WidgetId>,

    popup: Option<PopupState>,
    /// Popup area declared this frame, and the one from last frame used to
    /// block widgets underneath it.
    popup_rect: Option<Rect>,
    prev_popup_rect: Option<Rect>,

    wants_pointer: bool,
}

impl Context {
    pub fn new(style: Style) -> Self {
        Self {
            style,
            fonts: FontSystem::new(),
            font: None,
            draw_list: DrawList::new(),
            next_z: 0,
            overlay: DrawList::new(),
            overlay_z: 0,
            input: GuiInput::default(),
            prev_pointer: None,
            viewport: Viewport::new(0.0, 0.0),
            active: None,
            windows: HashMap::new(),
            prev_window_rects: Vec::new(),
            window_rects: Vec::new(),
            hovered_window: None,
            popup: None,
            popup_rect: None,
            prev_popup_rect: None,
            wants_pointer: false,
        }
    }

    /// Loads a font. The first font loaded becomes the GUI font.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let id = self.fonts.load_font(bytes)?;
        if self.font.is_none() {
            log::debug!("gui font set to {id:?}");
            self.font = Some(id);
        }
        Ok(id)
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut Style {
        &mut self.style
    }

    /// Starts a frame: clears last frame's geometry and latches `input`.
    pub fn begin_frame(&mut self, input: GuiInput, viewport: Viewport) {
        self.draw_list.clear();
        self.next_z = 0;
        self.overlay.clear();
        self.overlay_z = 0;
        self.input = input;
        self.viewport = viewport;
        self.prev_popup_rect = self.popup_rect.take();

        // Topmost window under the pointer, by last frame's layout.
        self.prev_window_rects = std::mem::take(&mut self.window_rects);
        self.hovered_window = input.pointer.and_then(|p| {
            self.prev_window_rects
                .iter()
                .rev()
                .find(|(_, r)| r.contains(p))
                .map(|(id, _)| *id)
        });

        // Lost the release (e.g. focus change): drop the capture.
        if !input.down && !input.released {
            self.active = None;
        }
    }

    /// Ends a frame. The draw list stays valid until the next `begin_frame`.
    pub fn end_frame(&mut self) {
        if !self.input.down {
            self.active = None;
        }
        self.prev_pointer = self.input.pointer;

        // The owner was not declared this frame.
        if self.popup.is_some() && self.popup_rect.is_none() {
            self.popup = None;
        }

        let over_window = self.input.pointer.is_some_and(|p| {
            self.window_rects.iter().any(|(_, r)| r.contains(p))
                || self.popup_rect.is_some_and(|r| r.contains(p))
        });
        self.wants_pointer = self.active.is_some() || over_window;
    }

    /// True when the pointer is over GUI or a GUI widget is being dragged.
    /// Applications should ignore pointer input for their own purposes then.
    pub fn wants_pointer(&self) -> bool {
        self.wants_pointer
    }

    pub fn draw_list(&mut self) -> &mut DrawList {
        &mut self.draw_list
    }

    /// Popup layer, painted above [`draw_list`](Self::draw_list).
    pub fn overlay_list(&mut self) -> &mut DrawList {
        &mut self.overlay
    }

    pub fn font_system(&self) -> &FontSystem {
        &self.fonts
    }

    /// Screen rect of the window titled `title`, as declared this frame.
    pub fn window_rect(&self, title: &str) -> Option<Rect> {
        let id = WidgetId::new(title);
        self.window_rects.iter().rev().find(|(w, _)| *w == id).map(|(_, r)| *r)
    }

    /// Split borrow for renderers: window layer, overlay layer, fonts.
    pub fn render_parts(&mut self) -> (&mut DrawList, &mut DrawList, &FontSystem) {
        (&mut self.draw_list, &mut self.overlay, &self.fonts)
    }

    // ── crate-internal helpers ─────────────────────────────────────────────

    pub(crate) fn painter(&mut self) -> Painter<'_> {
        Painter::new(
            &mut self.draw_list,
            &self.fonts,
            self.font,
            self.style.font_size,
            &mut self.next_z,
        )
    }

    pub(crate) fn overlay_painter(&mut self) -> Painter<'_> {
        Painter::new(
            &mut self.overlay,
            &self.fonts,
            self.font,
            self.style.font_size,
            &mut self.overlay_z,
        )
    }

    pub(crate) fn measure_text(&self, text: &str) -> Vec2 {
        painter::measure(&self.fonts, self.font, text, self.style.font_size)
    }

    pub(crate) fn line_height(&self) -> f32 {
        match self.font {
            Some(id) => self.fonts.line_height(id, self.style.font_size),
            None => self.style.font_size * 1.2,
        }
    }

    pub(crate) fn frame_height(&self) -> f32 {
        self.line_height() + 2.0 * self.style.frame_padding.y
    }

    /// Pointer movement since the previous frame.
    pub(crate) fn pointer_delta(&self) -> Vec2 {
        match (self.input.pointer, self.prev_pointer) {
            (Some(now), Some(prev)) => now - prev,
            _ => Vec2::zero(),
        }
    }

    pub(crate) fn is_active(&self, id: WidgetId) -> bool {
        self.active == Some(id)
    }

    pub(crate) fn is_hovered_window(&self, window: WidgetId) -> bool {
        self.hovered_window == Some(window)
    }

    pub(crate) fn record_window(&mut self, id: WidgetId, rect: Rect) {
        self.window_rects.push((id, rect));
    }

    pub(crate) fn popup(&self) -> Option<PopupState> {
        self.popup
    }

    pub(crate) fn popup_owned_by(&self, owner: WidgetId) -> bool {
        self.popup.is_some_and(|p| p.owner == owner)
    }

    /// Opens `owner`'s popup, replacing any other.
    pub(crate) fn open_popup(&mut self, owner: WidgetId, hue: f32) {
        log::trace!("popup opened by {owner:?}");
        self.popup = Some(PopupState { owner, hue });
    }

    pub(crate) fn close_popup(&mut self) {
        self.popup = None;
    }

    pub(crate) fn set_popup_hue(&mut self, hue: f32) {
        if let Some(p) = self.popup.as_mut() {
            p.hue = hue;
        }
    }

    /// Marks `rect` as this frame's popup area. Keeps the popup open and
    /// blocks widgets under it next frame.
    pub(crate) fn declare_popup(&mut self, rect: Rect) {
        self.popup_rect = Some(rect);
    }

    pub(crate) fn popup_rect(&self) -> Option<Rect> {
        self.popup_rect
    }

    /// Hit-tests `rect` and updates pointer capture.
    ///
    /// `enabled` is false when another window covers the pointer. `clip` limits
    /// the hoverable area to the visible part of the widget.
    pub(crate) fn interact(
        &mut self,
        id: WidgetId,
        rect: Rect,
        clip: Option<Rect>,
        enabled: bool,
    ) -> Interaction {
        let over = enabled
            && self.input.pointer.is_some_and(|p| {
                rect.contains(p)
                    && clip.is_none_or(|c| c.contains(p))
                    && !self.prev_popup_rect.is_some_and(|r| r.contains(p))
            });
        self.capture(id, over)
    }

    /// Hit-test for widgets inside the open popup: no window or clip checks.
    pub(crate) fn interact_popup(&mut self, id: WidgetId, rect: Rect) -> Interaction {
        let over = self.input.pointer.is_some_and(|p| rect.contains(p));
        self.capture(id, over)
    }

    fn capture(&mut self, id: WidgetId, over: bool) -> Interaction {
        let just_pressed = over && self.input.pressed && self.active.is_none();
        if just_pressed {
            self.active = Some(id);
        }

        let active = self.active == Some(id);
        let hovered = over && (self.active.is_none() || active);

        Interaction {
            hovered,
            active,
            clicked: active && self.input.released && over,
            just_pressed,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(Style::dark())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(x: f32, y: f32, down: bool, pressed: bool, released: bool) -> GuiInput {
        GuiInput { pointer: Some(Vec2::new(x, y)), down, pressed, released }
    }

    const VP: Viewport = Viewport::new(400.0, 400.0);

    #[test]
    fn press_captures_until_release() {
        let mut ctx = Context::default();
        let a = WidgetId::new("a");
        let b = WidgetId::new("b");
        let ra = Rect::new(0.0, 0.0, 10.0, 10.0);
        let rb = Rect::new(20.0, 0.0, 10.0, 10.0);

        ctx.begin_frame(input(5.0, 5.0, true, true, false), VP);
        let ia = ctx.interact(a, ra, None, true);
        assert!(ia.active && ia.just_pressed && !ia.dragging());
        ctx.end_frame();

        // Dragging over `b` keeps `a` captured and does not hover `b`.
        ctx.begin_frame(input(25.0, 5.0, true, false, false), VP);
        assert!(ctx.interact(a, ra, None, true).dragging());
        let ib = ctx.interact(b, rb, None, true);
        assert!(!ib.hovered && !ib.active);
        ctx.end_frame();
        assert!(ctx.wants_pointer());

        // Released outside `a`: no click, capture dropped.
        ctx.begin_frame(input(25.0, 5.0, false, false, true), VP);
        let ia = ctx.interact(a, ra, None, true);
        assert!(ia.active && !ia.clicked);
        ctx.end_frame();
        assert!(!ctx.is_active(a));
    }

    #[test]
    fn press_and_release_in_one_frame_clicks() {
        let mut ctx = Context::default();
        let a = WidgetId::new("a");
        ctx.begin_frame(input(1.0, 1.0, false, true, true), VP);
        assert!(ctx.interact(a, Rect::new(0.0, 0.0, 4.0, 4.0), None, true).clicked);
        ctx.end_frame();
        assert!(!ctx.is_active(a));
    }

    #[test]
    fn clip_and_disabled_block_hover() {
        let mut ctx = Context::default();
        let a = WidgetId::new("a");
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        ctx.begin_frame(input(5.0, 5.0, true, true, false), VP);
        assert!(!ctx.interact(a, r, Some(Rect::new(6.0, 0.0, 4.0, 10.0)), true).hovered);
        assert!(!ctx.interact(a, r, None, false).hovered);
        assert!(!ctx.is_active(a));
    }

    #[test]
    fn pointer_delta_tracks_previous_frame() {
        let mut ctx = Context::default();
        ctx.begin_frame(input(10.0, 10.0, false, false, false), VP);
        assert_eq!(ctx.pointer_delta(), Vec2::zero());
        ctx.end_frame();
        ctx.begin_frame(input(13.0, 8.0, false, false, false), VP);
        assert_eq!(ctx.pointer_delta(), Vec2::new(3.0, -2.0));
        ctx.end_frame();
        ctx.begin_frame(GuiInput::default(), VP);
        assert_eq!(ctx.pointer_delta(), Vec2::zero());
    }

    #[test]
    fn lost_release_drops_capture() {
        let mut ctx = Context::default();
        let a = WidgetId::new("a");
        ctx.begin_frame(input(1.0, 1.0, true, true, false), VP);
        ctx.interact(a, Rect::new(0.0, 0.0, 4.0, 4.0), None, true);
        ctx.end_frame();
        ctx.begin_frame(input(1.0, 1.0, false, false, false), VP);
        assert!(!ctx.is_active(a));
    }

    #[test]
    fn begin_frame_clears_geometry() {
        let mut ctx = Context::default();
        ctx.begin_frame(GuiInput::default(), VP);
        ctx.painter().fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), prism_engine::paint::Color::white());
        assert!(!ctx.draw_list().is_empty());
        ctx.end_frame();
        ctx.begin_frame(GuiInput::default(), VP);
        assert!(ctx.draw_list().is_empty());
    }
}
