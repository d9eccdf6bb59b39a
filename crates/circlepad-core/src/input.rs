//! Input events consumed by the surface.

use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Key names that clear the selected element's text when no text area is
/// being edited.
pub const DELETE_KEYS: [&str; 2] = ["Delete", "Backspace"];

/// Pointer event in client coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

impl PointerEvent {
    pub fn position(&self) -> Point {
        match *self {
            PointerEvent::Down { position }
            | PointerEvent::Move { position }
            | PointerEvent::Up { position } => position,
        }
    }
}

/// Keyboard event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "key", rename_all = "snake_case")]
pub enum KeyEvent {
    Pressed(String),
    Released(String),
}

impl KeyEvent {
    /// Whether this is a press of a delete-class key.
    pub fn is_delete_press(&self) -> bool {
        matches!(self, KeyEvent::Pressed(key) if DELETE_KEYS.contains(&key.as_str()))
    }
}
