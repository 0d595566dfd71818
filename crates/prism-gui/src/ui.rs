use std::hash::Hash;

use prism_engine::coords::{Rect, Vec2};

use crate::context::{Context, Interaction};
use crate::id::WidgetId;
use crate::painter::Painter;
use crate::style::Style;

/// Layout cursor for the contents of one window.
///
/// Widgets are stacked top to bottom, separated by `item_spacing.y`. Widget
/// methods live in `crate::widgets`.
pub struct Ui<'c> {
    pub(crate) ctx: &'c mut Context,
    id: WidgetId,
    content: Rect,
    cursor: Vec2,
    max_y: f32,
    clip: Rect,
    enabled: bool,
}

impl<'c> Ui<'c> {
    pub(crate) fn new(ctx: &'c mut Context, id: WidgetId, content: Rect, clip: Rect, enabled: bool) -> Self {
        Self {
            ctx,
            id,
            content,
            cursor: content.origin,
            max_y: content.origin.y,
            clip,
            enabled,
        }
    }

    pub fn style(&self) -> &Style {
        &self.ctx.style
    }

    /// Width available to widgets in this window.
    pub fn available_width(&self) -> f32 {
        self.content.size.x
    }

    /// Height used by the widgets declared so far.
    pub(crate) fn content_height(&self) -> f32 {
        self.max_y - self.content.origin.y
    }

    /// Width of a widget frame; the label goes to its right.
    pub(crate) fn item_width(&self) -> f32 {
        (self.content.size.x * self.ctx.style.item_width_fraction).floor().max(1.0)
    }

    pub(crate) fn widget_id(&self, label: impl Hash) -> WidgetId {
        self.id.with(label)
    }

    /// Reserves the next `size` slot in the layout.
    pub(crate) fn allocate(&mut self, size: Vec2) -> Rect {
        let rect = Rect::from_origin_size(self.cursor, size);
        self.max_y = self.max_y.max(rect.max().y);
        self.cursor.y = rect.max().y + self.ctx.style.item_spacing.y;
        rect
    }

    pub(crate) fn interact(&mut self, id: WidgetId, rect: Rect) -> Interaction {
        self.ctx.interact(id, rect, Some(self.clip), self.enabled)
    }

    pub(crate) fn painter(&mut self) -> Painter<'_> {
        self.ctx.painter()
    }
}
