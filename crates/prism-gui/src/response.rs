use prism_engine::coords::Rect;

/// Outcome of declaring a widget this frame.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Response {
    /// Screen rect occupied by the widget, in logical pixels.
    pub rect: Rect,
    pub hovered: bool,
    /// Pressed and released over the widget.
    pub clicked: bool,
    /// The bound value was modified.
    pub changed: bool,
}
