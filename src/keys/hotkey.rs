//! Hotkey value type: a key plus the modifiers held with it
//!
//! Textual forms:
//! - canonical: `"<KeyName> <Mod>, <Mod>"`, e.g. `"A Shift, Ctrl"` or `"F1 None"`
//! - legacy (read only): a single key display label, e.g. `"Escape"` or `"1"`
//! - display: `"Shift + Ctrl + F1"`, for showing to users
//!
//! A hotkey whose key is [`Keycode::Unknown`] is invalid and never equals
//! any hotkey, itself included.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use super::keycode::Keycode;
use super::modifiers::Modifiers;
use crate::input::KeyInput;
use crate::platform::Platform;

/// A key combined with a set of modifiers
#[derive(Debug, Clone, Copy)]
pub struct Hotkey {
    pub key: Keycode,
    pub modifiers: Modifiers,
}

/// Text that could not be interpreted as a hotkey
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not interpret '{0}' as a hotkey")]
pub struct ParseHotkeyError(String);

impl Hotkey {
    /// The "no binding" value returned when parsing fails
    pub const INVALID: Hotkey = Hotkey::new(Keycode::Unknown, Modifiers::empty());

    /// Create a hotkey from a key and modifiers, without validation
    pub const fn new(key: Keycode, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// Build a hotkey from a captured key event
    pub fn from_key_input(input: &KeyInput) -> Self {
        Self::new(input.key, input.modifiers)
    }

    /// Parse the canonical form, falling back to a legacy key label
    ///
    /// Two or more space separated tokens: the first must be a key
    /// identifier and everything after the first space a comma separated
    /// list of modifier names. A single token is looked up as a key
    /// display label and gets no modifiers.
    pub fn try_parse(text: &str) -> Option<Hotkey> {
        let mut tokens = text.split(' ');
        let first = tokens.next()?;

        if tokens.next().is_some() {
            let key = Keycode::from_name(first)?;
            let modifiers = Modifiers::from_flag_list(&text[first.len()..])?;
            return Some(Hotkey::new(key, modifiers));
        }

        let key = Keycode::from_display_name(first)?;
        debug!(label = first, key = %key, "parsed legacy key label");
        Some(Hotkey::new(key, Modifiers::empty()))
    }

    /// Like [`Hotkey::try_parse`], returning [`Hotkey::INVALID`] on failure
    pub fn parse_or_invalid(text: &str) -> Hotkey {
        Self::try_parse(text).unwrap_or(Self::INVALID)
    }

    /// Whether the key is a real key rather than `Unknown`
    pub fn is_valid(&self) -> bool {
        self.key != Keycode::Unknown
    }

    /// Equality predicate: an invalid left-hand side never matches
    pub fn matches(&self, other: &Hotkey) -> bool {
        if !self.is_valid() {
            return false;
        }

        self.key == other.key && self.modifiers == other.modifiers
    }

    /// Hash value: key code xor modifier bits
    pub fn hash_code(&self) -> u32 {
        u32::from(self.key.code()) ^ u32::from(self.modifiers.bits())
    }

    /// Serialized form accepted by [`Hotkey::try_parse`]
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Label for showing to users on the current platform
    pub fn display_string(&self) -> String {
        self.display_string_for(Platform::current())
    }

    /// Label for showing to users, e.g. `"Shift + Ctrl + F1"`
    ///
    /// Modifiers always come in the order Shift, Alt, Ctrl, Meta; Meta is
    /// labelled `Cmd` on macOS.
    pub fn display_string_for(&self, platform: Platform) -> String {
        let mut label = String::new();

        if self.modifiers.has_modifier(Modifiers::SHIFT) {
            label.push_str("Shift + ");
        }
        if self.modifiers.has_modifier(Modifiers::ALT) {
            label.push_str("Alt + ");
        }
        if self.modifiers.has_modifier(Modifiers::CTRL) {
            label.push_str("Ctrl + ");
        }
        if self.modifiers.has_modifier(Modifiers::META) {
            label.push_str(if platform.is_apple_desktop() {
                "Cmd + "
            } else {
                "Meta + "
            });
        }

        label.push_str(&self.key.display_name().to_uppercase());
        label
    }
}

impl Default for Hotkey {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<&KeyInput> for Hotkey {
    fn from(input: &KeyInput) -> Self {
        Self::from_key_input(input)
    }
}

impl PartialEq for Hotkey {
    fn eq(&self, other: &Self) -> bool {
        self.matches(other)
    }
}

impl Hash for Hotkey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash_code().hash(state);
    }
}

impl fmt::Display for Hotkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.key, self.modifiers)
    }
}

impl FromStr for Hotkey {
    type Err = ParseHotkeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse(s).ok_or_else(|| ParseHotkeyError(s.to_string()))
    }
}

impl Serialize for Hotkey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Hotkey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse::<Hotkey>().map_err(serde::de::Error::custom)
    }
}
