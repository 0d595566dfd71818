use prism_engine::coords::Vec2;
use prism_engine::input::{InputFrame, InputState, MouseButton};

/// Pointer input for one GUI frame, in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct GuiInput {
    /// `None` while the pointer is outside the window.
    pub pointer: Option<Vec2>,
    /// Primary button is held.
    pub down: bool,
    /// Primary button went down this frame.
    pub pressed: bool,
    /// Primary button went up this frame.
    pub released: bool,
}

impl GuiInput {
    pub fn from_engine(state: &InputState, frame: &InputFrame) -> Self {
        Self {
            pointer: state.pointer_pos.map(|(x, y)| Vec2::new(x, y)),
            down: state.button_down(MouseButton::Left),
            pressed: frame.pressed(MouseButton::Left),
            released: frame.released(MouseButton::Left),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prism_engine::input::{InputEvent, MouseButtonState, PointerButtonEvent};

    #[test]
    fn press_is_visible_for_one_frame() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Left,
            state: MouseButtonState::Pressed,
            x: 3.0,
            y: 4.0,
        }));

        let gi = GuiInput::from_engine(&st, &fr);
        assert_eq!(gi.pointer, Some(Vec2::new(3.0, 4.0)));
        assert!(gi.down && gi.pressed && !gi.released);

        fr.clear();
        let gi = GuiInput::from_engine(&st, &fr);
        assert!(gi.down && !gi.pressed);
    }

    #[test]
    fn other_buttons_are_ignored() {
        let mut st = InputState::default();
        let mut fr = InputFrame::default();
        st.apply_event(&mut fr, InputEvent::PointerButton(PointerButtonEvent {
            button: MouseButton::Right,
            state: MouseButtonState::Pressed,
            x: 0.0,
            y: 0.0,
        }));
        let gi = GuiInput::from_engine(&st, &fr);
        assert!(!gi.down && !gi.pressed);
    }
}
