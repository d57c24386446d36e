use crate::camera::MoveDirection;

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    KeyR,
    KeyL,
    Escape,
    MouseLeft,
    MouseRight,
}

impl Button {
    /// Movement direction bound to this button, if any.
    pub fn move_direction(self) -> Option<MoveDirection> {
        match self {
            Button::KeyW => Some(MoveDirection::Forward),
            Button::KeyS => Some(MoveDirection::Backward),
            Button::KeyA => Some(MoveDirection::Left),
            Button::KeyD => Some(MoveDirection::Right),
            Button::Space => Some(MoveDirection::WorldUp),
            _ => None,
        }
    }
}

/// Controller - handles button input states
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Get all currently pressed buttons
    fn down_buttons(&self) -> &[Button];
}
