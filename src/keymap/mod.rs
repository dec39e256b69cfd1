//! Keymap module for resolving key presses to actions
//!
//! Provides an ordered binding table and a dispatcher that consumes
//! captured key events and broadcasts what they triggered.

mod dispatcher;
mod map;

pub use dispatcher::Dispatcher;
pub use map::{Binding, Keymap};
