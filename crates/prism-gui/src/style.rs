use prism_engine::coords::Vec2;
use prism_engine::paint::Color;

/// Colors used by the built-in widgets.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    pub text: Color,
    pub window_bg: Color,
    pub popup_bg: Color,
    pub border: Color,
    pub title_bg: Color,
    pub title_bg_active: Color,
    pub frame_bg: Color,
    pub frame_bg_hovered: Color,
    pub frame_bg_active: Color,
    pub check_mark: Color,
    /// Markers on the color picker's square and bars.
    pub picker_marker: Color,
    pub slider_grab: Color,
    pub slider_grab_active: Color,
    pub checker_light: Color,
    pub checker_dark: Color,
}

/// Metrics and colors for a GUI [`Context`](crate::Context).
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Font size in logical pixels.
    pub font_size: f32,
    pub window_padding: Vec2,
    pub frame_padding: Vec2,
    pub item_spacing: Vec2,
    /// Gap between a widget's frame and its label.
    pub item_inner_spacing: f32,
    /// Widget frame width as a fraction of the window content width.
    pub item_width_fraction: f32,
    pub grab_min_size: f32,
    /// Inset of the slider grab inside its frame.
    pub grab_padding: f32,
    pub window_border: f32,
    /// Part of a window that must stay inside the viewport.
    pub window_min_visible: f32,
    /// Side of the color picker's saturation/value square.
    pub picker_size: f32,
    pub colors: Palette,
}

impl Style {
    /// Dark theme.
    pub fn dark() -> Self {
        let rgba = Color::from_straight;
        Self {
            font_size: 13.0,
            window_padding: Vec2::new(8.0, 8.0),
            frame_padding: Vec2::new(4.0, 3.0),
            item_spacing: Vec2::new(8.0, 4.0),
            item_inner_spacing: 4.0,
            item_width_fraction: 0.65,
            grab_min_size: 10.0,
            grab_padding: 2.0,
            window_border: 1.0,
            window_min_visible: 20.0,
            picker_size: 150.0,
            colors: Palette {
                text: rgba(1.0, 1.0, 1.0, 1.0),
                window_bg: rgba(0.06, 0.06, 0.06, 0.94),
                popup_bg: rgba(0.08, 0.08, 0.08, 0.94),
                border: rgba(0.43, 0.43, 0.50, 0.50),
                title_bg: rgba(0.04, 0.04, 0.04, 1.0),
                title_bg_active: rgba(0.16, 0.29, 0.48, 1.0),
                frame_bg: rgba(0.16, 0.29, 0.48, 0.54),
                frame_bg_hovered: rgba(0.26, 0.59, 0.98, 0.40),
                frame_bg_active: rgba(0.26, 0.59, 0.98, 0.67),
                check_mark: rgba(0.26, 0.59, 0.98, 1.0),
                picker_marker: rgba(1.0, 1.0, 1.0, 1.0),
                slider_grab: rgba(0.24, 0.52, 0.88, 1.0),
                slider_grab_active: rgba(0.26, 0.59, 0.98, 1.0),
                checker_light: rgba(0.80, 0.80, 0.80, 1.0),
                checker_dark: rgba(0.50, 0.50, 0.50, 1.0),
            },
        }
    }

    pub(crate) fn frame_bg(&self, hovered: bool, active: bool) -> Color {
        if active {
            self.colors.frame_bg_active
        } else if hovered {
            self.colors.frame_bg_hovered
        } else {
            self.colors.frame_bg
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::dark()
    }
}
