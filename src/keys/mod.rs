//! Key codes, modifier flags and the hotkey value built from them

mod hotkey;
mod keycode;
mod modifiers;

pub use hotkey::{Hotkey, ParseHotkeyError};
pub use keycode::Keycode;
pub use modifiers::Modifiers;
