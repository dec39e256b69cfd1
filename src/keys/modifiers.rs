//! Modifier key flags
//!
//! Provides the flag set held alongside a key press and its textual
//! form: member names joined by `", "`, or `None` when empty.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Set of modifier keys held during a key press
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key
        const SHIFT = 1 << 0;
        /// Alt/Option key
        const ALT = 1 << 1;
        /// Control key
        const CTRL = 1 << 2;
        /// Meta key (Command on macOS)
        const META = 1 << 3;
    }
}

/// Flag names in ascending bit order
const FLAG_NAMES: [(Modifiers, &str); 4] = [
    (Modifiers::SHIFT, "Shift"),
    (Modifiers::ALT, "Alt"),
    (Modifiers::CTRL, "Ctrl"),
    (Modifiers::META, "Meta"),
];

/// Name of the empty set
const NONE_NAME: &str = "None";

impl Modifiers {
    /// Look up a single member by name (`None`, `Shift`, `Alt`, `Ctrl`, `Meta`)
    pub fn from_flag_name(name: &str) -> Option<Self> {
        if name == NONE_NAME {
            return Some(Self::empty());
        }

        FLAG_NAMES
            .iter()
            .find(|(_, flag_name)| *flag_name == name)
            .map(|(flag, _)| *flag)
    }

    /// Parse a comma separated list of member names
    ///
    /// Pieces are trimmed; any piece that is not a member name rejects
    /// the whole list.
    pub fn from_flag_list(list: &str) -> Option<Self> {
        list.split(',')
            .map(str::trim)
            .try_fold(Self::empty(), |acc, piece| {
                Self::from_flag_name(piece).map(|flag| acc | flag)
            })
    }

    /// Check whether every flag in `flag` is held
    pub fn has_modifier(&self, flag: Modifiers) -> bool {
        self.contains(flag)
    }
}

impl fmt::Display for Modifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str(NONE_NAME);
        }

        let mut first = true;
        for (flag, name) in FLAG_NAMES {
            if self.contains(flag) {
                if !first {
                    f.write_str(", ")?;
                }
                f.write_str(name)?;
                first = false;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_names() {
        assert_eq!(Modifiers::from_flag_name("None"), Some(Modifiers::empty()));
        assert_eq!(Modifiers::from_flag_name("Ctrl"), Some(Modifiers::CTRL));
        assert_eq!(Modifiers::from_flag_name("Meta"), Some(Modifiers::META));
        assert_eq!(Modifiers::from_flag_name("ctrl"), None);
        assert_eq!(Modifiers::from_flag_name("Control"), None);
        assert_eq!(Modifiers::from_flag_name(""), None);
    }

    #[test]
    fn test_flag_list_union() {
        assert_eq!(
            Modifiers::from_flag_list(" Ctrl, Shift"),
            Some(Modifiers::CTRL | Modifiers::SHIFT)
        );
        assert_eq!(
            Modifiers::from_flag_list("Alt,Alt ,None"),
            Some(Modifiers::ALT)
        );
    }

    #[test]
    fn test_flag_list_rejects_bad_pieces() {
        assert_eq!(Modifiers::from_flag_list("Ctrl, Hyper"), None);
        assert_eq!(Modifiers::from_flag_list("Ctrl,"), None);
        assert_eq!(Modifiers::from_flag_list(""), None);
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(Modifiers::empty().to_string(), "None");
    }

    #[test]
    fn test_display_uses_bit_order() {
        let mods = Modifiers::META | Modifiers::SHIFT | Modifiers::CTRL;
        assert_eq!(mods.to_string(), "Shift, Ctrl, Meta");
        assert_eq!(Modifiers::all().to_string(), "Shift, Alt, Ctrl, Meta");
    }

    #[test]
    fn test_display_parses_back() {
        for bits in 0..=Modifiers::all().bits() {
            let mods = Modifiers::from_bits_truncate(bits);
            assert_eq!(Modifiers::from_flag_list(&mods.to_string()), Some(mods));
        }
    }

    #[test]
    fn test_has_modifier() {
        let mods = Modifiers::ALT | Modifiers::META;
        assert!(mods.has_modifier(Modifiers::ALT));
        assert!(!mods.has_modifier(Modifiers::SHIFT));
    }
}
