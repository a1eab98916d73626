use crate::controllers::explorer::ports::input::{InputPort, Key, MouseButton};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Gesture {
    Pan { fraction_x: f64, fraction_y: f64 },
    ZoomIn { screen_x: i32, screen_y: i32 },
    Reset,
}

/// Reads one gesture out of an input snapshot, or nothing if the user is
/// idle.
///
/// Priority: reset, then zoom, then pan, one gesture per poll. Pan direction
/// is a single axis at a time; `fraction_y` is positive for an upward pan
/// (towards `max_y`, the top of the screen under the row flip).
pub fn decode_gesture(input: &dyn InputPort, pan_fraction: f64) -> Option<Gesture> {
    if input.is_button_pressed(MouseButton::Secondary) {
        return Some(Gesture::Reset);
    }

    if input.is_button_pressed(MouseButton::Primary) {
        let (screen_x, screen_y) = input.mouse_position();
        return Some(Gesture::ZoomIn { screen_x, screen_y });
    }

    if input.any_key_pressed() {
        if input.is_key_down(Key::PanRight) {
            return Some(Gesture::Pan {
                fraction_x: pan_fraction,
                fraction_y: 0.0,
            });
        }
        if input.is_key_down(Key::PanLeft) {
            return Some(Gesture::Pan {
                fraction_x: -pan_fraction,
                fraction_y: 0.0,
            });
        }
        if input.is_key_down(Key::PanUp) {
            return Some(Gesture::Pan {
                fraction_x: 0.0,
                fraction_y: pan_fraction,
            });
        }
        if input.is_key_down(Key::PanDown) {
            return Some(Gesture::Pan {
                fraction_x: 0.0,
                fraction_y: -pan_fraction,
            });
        }
    }

    None
}
