//! hotkey-bindings: keyboard hotkeys as plain values
//!
//! A [`Hotkey`] is a physical key plus the modifier keys held with it.
//! This crate provides:
//! - Parsing of the canonical `"<Key> <Mod>, <Mod>"` form and of legacy
//!   single key labels
//! - Canonical serialization and platform-aware display labels
//! - A keymap and dispatcher resolving captured key presses to actions
//! - The logic behind the `hotkey` command line tool

pub mod commands;
pub mod config;
pub mod events;
pub mod input;
pub mod keymap;
pub mod keys;
pub mod platform;

pub use config::Config;
pub use events::BindingEvent;
pub use input::{KeyInput, KeyInputEvent};
pub use keymap::{Binding, Dispatcher, Keymap};
pub use keys::{Hotkey, Keycode, Modifiers, ParseHotkeyError};
pub use platform::Platform;
