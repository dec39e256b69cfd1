//! Physical key codes and their names
//!
//! Every key has two textual forms: its identifier (`name`, used by the
//! canonical hotkey format) and a human label (`display_name`, used for
//! display and by the legacy single-word format).

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

macro_rules! keycodes {
    ($($variant:ident => $label:expr,)*) => {
        /// Closed set of physical keys, ordered by discriminant
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        #[repr(u16)]
        pub enum Keycode {
            $($variant,)*
        }

        impl Keycode {
            /// Every member in declaration order, `Unknown` first and `Last` at the end
            pub const ALL: &'static [Keycode] = &[$(Keycode::$variant,)*];

            /// Declared identifier of the key
            pub fn name(self) -> &'static str {
                match self {
                    $(Keycode::$variant => stringify!($variant),)*
                }
            }

            /// Human readable label of the key
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Keycode::$variant => $label,)*
                }
            }
        }
    };
}

keycodes! {
    Unknown => "Unknown",
    Backspace => "Backspace",
    Tab => "Tab",
    Clear => "Clear",
    Return => "Return",
    Pause => "Pause",
    Escape => "Escape",
    Space => "Space",
    Exclaim => "!",
    QuoteDbl => "\"",
    Hash => "#",
    Dollar => "$",
    Percent => "%",
    Ampersand => "&",
    Quote => "'",
    LeftParen => "(",
    RightParen => ")",
    Asterisk => "*",
    Plus => "+",
    Comma => ",",
    Minus => "-",
    Period => ".",
    Slash => "/",
    Number0 => "0",
    Number1 => "1",
    Number2 => "2",
    Number3 => "3",
    Number4 => "4",
    Number5 => "5",
    Number6 => "6",
    Number7 => "7",
    Number8 => "8",
    Number9 => "9",
    Colon => ":",
    Semicolon => ";",
    Less => "<",
    Equals => "=",
    Greater => ">",
    Question => "?",
    At => "@",
    LeftBracket => "[",
    Backslash => "\\",
    RightBracket => "]",
    Caret => "^",
    Underscore => "_",
    Backquote => "`",
    A => "A",
    B => "B",
    C => "C",
    D => "D",
    E => "E",
    F => "F",
    G => "G",
    H => "H",
    I => "I",
    J => "J",
    K => "K",
    L => "L",
    M => "M",
    N => "N",
    O => "O",
    P => "P",
    Q => "Q",
    R => "R",
    S => "S",
    T => "T",
    U => "U",
    V => "V",
    W => "W",
    X => "X",
    Y => "Y",
    Z => "Z",
    Delete => "Delete",
    CapsLock => "CapsLock",
    F1 => "F1",
    F2 => "F2",
    F3 => "F3",
    F4 => "F4",
    F5 => "F5",
    F6 => "F6",
    F7 => "F7",
    F8 => "F8",
    F9 => "F9",
    F10 => "F10",
    F11 => "F11",
    F12 => "F12",
    F13 => "F13",
    F14 => "F14",
    F15 => "F15",
    PrintScreen => "PrintScreen",
    ScrollLock => "ScrollLock",
    Insert => "Insert",
    Home => "Home",
    PageUp => "PageUp",
    End => "End",
    PageDown => "PageDown",
    Right => "Right",
    Left => "Left",
    Down => "Down",
    Up => "Up",
    NumLockClear => "Numlock",
    KpDivide => "Keypad /",
    KpMultiply => "Keypad *",
    KpMinus => "Keypad -",
    KpPlus => "Keypad +",
    KpEnter => "Keypad Enter",
    Kp1 => "Keypad 1",
    Kp2 => "Keypad 2",
    Kp3 => "Keypad 3",
    Kp4 => "Keypad 4",
    Kp5 => "Keypad 5",
    Kp6 => "Keypad 6",
    Kp7 => "Keypad 7",
    Kp8 => "Keypad 8",
    Kp9 => "Keypad 9",
    Kp0 => "Keypad 0",
    KpPeriod => "Keypad .",
    Menu => "Menu",
    LCtrl => "Left Ctrl",
    LShift => "Left Shift",
    LAlt => "Left Alt",
    LGui => "Left GUI",
    RCtrl => "Right Ctrl",
    RShift => "Right Shift",
    RAlt => "Right Alt",
    RGui => "Right GUI",
    Last => "Last",
}

impl Keycode {
    /// Numeric code of the key
    pub fn code(self) -> u16 {
        self as u16
    }

    /// Look up a key by its declared identifier (exact, case-sensitive)
    pub fn from_name(name: &str) -> Option<Keycode> {
        static BY_NAME: OnceLock<HashMap<&'static str, Keycode>> = OnceLock::new();

        BY_NAME
            .get_or_init(|| Keycode::ALL.iter().map(|&k| (k.name(), k)).collect())
            .get(name)
            .copied()
    }

    /// Look up a key by its display label
    ///
    /// Candidates run from `Unknown` up to, but not including, `Last`.
    /// When two keys share a label the one declared first wins.
    pub fn from_display_name(label: &str) -> Option<Keycode> {
        static BY_LABEL: OnceLock<HashMap<&'static str, Keycode>> = OnceLock::new();

        BY_LABEL
            .get_or_init(|| {
                let mut table = HashMap::new();
                for &key in Keycode::ALL.iter().take_while(|&&k| k != Keycode::Last) {
                    table.entry(key.display_name()).or_insert(key);
                }
                table
            })
            .get(label)
            .copied()
    }
}

impl Default for Keycode {
    fn default() -> Self {
        Self::Unknown
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
