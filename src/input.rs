//! Key presses as delivered by an input capture layer

use crate::keys::{Keycode, Modifiers};

/// Direction of a key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInputEvent {
    Down,
    Up,
}

/// A single captured key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    /// Press or release
    pub event: KeyInputEvent,
    /// Physical key
    pub key: Keycode,
    /// Modifiers held at the time of the event
    pub modifiers: Modifiers,
    /// Number of rapid repeated presses, 1 for a single press
    pub multi_tap_count: u8,
    /// Character produced by the press, if any
    pub unicode_char: Option<char>,
}

impl KeyInput {
    /// Single key press with no associated character
    pub fn down(key: Keycode, modifiers: Modifiers) -> Self {
        Self {
            event: KeyInputEvent::Down,
            key,
            modifiers,
            multi_tap_count: 1,
            unicode_char: None,
        }
    }

    /// Key release with no associated character
    pub fn up(key: Keycode, modifiers: Modifiers) -> Self {
        Self {
            event: KeyInputEvent::Up,
            ..Self::down(key, modifiers)
        }
    }

    /// Check if this is a key press rather than a release
    pub fn is_down(&self) -> bool {
        self.event == KeyInputEvent::Down
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_down_and_up() {
        let down = KeyInput::down(Keycode::A, Modifiers::CTRL);
        let up = KeyInput::up(Keycode::A, Modifiers::CTRL);
        assert!(down.is_down());
        assert!(!up.is_down());
        assert_eq!(up.key, down.key);
        assert_eq!(up.multi_tap_count, 1);
    }
}
