//! Winit to scene event conversion
//!
//! Only the inputs the scene reacts to are translated; everything else maps
//! to `None` and is dropped by the caller.

use winit::event::{ElementState, MouseButton};
use winit::keyboard::{Key, NamedKey};

use crate::sim::{KeyPress, PointerPress};

/// Map a logical key to a scene key press.
///
/// Character keys keep their case, so `s` and `S` both reach the scene.
pub fn map_key(key: &Key) -> Option<KeyPress> {
    match key {
        Key::Named(NamedKey::Enter) => Some(KeyPress::Enter),
        Key::Character(text) => match text.chars().next()? {
            '\r' | '\n' => Some(KeyPress::Enter),
            c => Some(KeyPress::Char(c)),
        },
        _ => None,
    }
}

/// Map a mouse button change at the last known cursor column
pub fn map_mouse(
    state: ElementState,
    button: MouseButton,
    cursor_x: f64,
    window_width: u32,
) -> PointerPress {
    PointerPress {
        primary: button == MouseButton::Left,
        pressed: state == ElementState::Pressed,
        screen_x: cursor_x as f32,
        window_width: window_width as f32,
    }
}
