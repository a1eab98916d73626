/// Pan keys, named by effect rather than keycap so shells can bind whatever
/// layout they like (the GUI shell binds WASD plus the arrow keys).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum MouseButton {
    Primary,
    Secondary,
}

/// One-per-display-frame snapshot of the user's input state, supplied by the
/// windowing collaborator.
///
/// These are instantaneous queries, not events with guaranteed delivery: a
/// press that begins and ends between two polls is allowed to go unseen.
pub trait InputPort {
    fn is_key_down(&self, key: Key) -> bool;

    /// Whether `button` was pressed since the previous poll (edge, not level).
    fn is_button_pressed(&self, button: MouseButton) -> bool;

    /// Pointer position in screen pixel coordinates (row 0 = top of screen).
    fn mouse_position(&self) -> (i32, i32);

    fn any_key_pressed(&self) -> bool;
}
