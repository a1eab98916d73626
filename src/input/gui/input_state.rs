use winit::event::ElementState;
use winit::keyboard::KeyCode;

use crate::controllers::explorer::ports::input::{InputPort, Key, MouseButton};

/// Accumulates winit events into the snapshot the controller polls once per
/// display frame.
///
/// Key state is level-triggered (held keys stay down across frames); button
/// presses and `any_key_pressed` are edges, cleared by [`end_frame`] after
/// each poll.
///
/// [`end_frame`]: InputState::end_frame
#[derive(Debug, Default)]
pub struct InputState {
    pan_left: bool,
    pan_right: bool,
    pan_up: bool,
    pan_down: bool,
    primary_pressed: bool,
    secondary_pressed: bool,
    mouse_x: i32,
    mouse_y: i32,
    key_pressed_this_frame: bool,
}

impl InputState {
    pub fn handle_key(&mut self, code: KeyCode, state: ElementState) {
        let pressed = state.is_pressed();

        match code {
            KeyCode::KeyA | KeyCode::ArrowLeft => self.pan_left = pressed,
            KeyCode::KeyD | KeyCode::ArrowRight => self.pan_right = pressed,
            KeyCode::KeyW | KeyCode::ArrowUp => self.pan_up = pressed,
            KeyCode::KeyS | KeyCode::ArrowDown => self.pan_down = pressed,
            _ => return,
        }

        if pressed {
            self.key_pressed_this_frame = true;
        }
    }

    pub fn handle_button(&mut self, button: winit::event::MouseButton, state: ElementState) {
        if !state.is_pressed() {
            return;
        }

        match button {
            winit::event::MouseButton::Left => self.primary_pressed = true,
            winit::event::MouseButton::Right => self.secondary_pressed = true,
            _ => {}
        }
    }

    /// Pointer position already converted to frame-buffer pixel coordinates.
    pub fn set_mouse_position(&mut self, x: i32, y: i32) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Clears the edge-triggered state once the controller has seen it.
    pub fn end_frame(&mut self) {
        self.primary_pressed = false;
        self.secondary_pressed = false;
        self.key_pressed_this_frame = false;
    }
}

impl InputPort for InputState {
    fn is_key_down(&self, key: Key) -> bool {
        match key {
            Key::PanLeft => self.pan_left,
            Key::PanRight => self.pan_right,
            Key::PanUp => self.pan_up,
            Key::PanDown => self.pan_down,
        }
    }

    fn is_button_pressed(&self, button: MouseButton) -> bool {
        match button {
            MouseButton::Primary => self.primary_pressed,
            MouseButton::Secondary => self.secondary_pressed,
        }
    }

    fn mouse_position(&self) -> (i32, i32) {
        (self.mouse_x, self.mouse_y)
    }

    fn any_key_pressed(&self) -> bool {
        self.key_pressed_this_frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_held_key_survives_end_frame() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::KeyW, ElementState::Pressed);

        assert!(input.is_key_down(Key::PanUp));
        assert!(input.any_key_pressed());

        input.end_frame();

        assert!(input.is_key_down(Key::PanUp));
        assert!(!input.any_key_pressed());

        input.handle_key(KeyCode::KeyW, ElementState::Released);
        assert!(!input.is_key_down(Key::PanUp));
    }

    #[test]
    fn test_button_press_is_an_edge() {
        let mut input = InputState::default();
        input.handle_button(winit::event::MouseButton::Left, ElementState::Pressed);

        assert!(input.is_button_pressed(MouseButton::Primary));

        input.end_frame();

        assert!(!input.is_button_pressed(MouseButton::Primary));
    }

    #[test]
    fn test_arrow_keys_alias_wasd() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowDown, ElementState::Pressed);

        assert!(input.is_key_down(Key::PanDown));
    }

    #[test]
    fn test_release_does_not_count_as_key_press() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::KeyA, ElementState::Pressed);
        input.end_frame();

        input.handle_key(KeyCode::KeyA, ElementState::Released);

        assert!(!input.any_key_pressed());
    }
}
