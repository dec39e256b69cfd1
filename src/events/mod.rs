//! Events emitted by the dispatcher for each handled key press

use serde::{Deserialize, Serialize};

use crate::keys::Hotkey;

/// Outcome of dispatching a key press
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BindingEvent {
    /// A bound action was triggered
    Triggered {
        /// Action the hotkey is bound to
        action: String,
        /// Hotkey that was pressed
        hotkey: Hotkey,
    },

    /// The pressed hotkey is not bound to anything
    Unmatched {
        hotkey: Hotkey,
    },
}

impl std::fmt::Display for BindingEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BindingEvent::Triggered { action, hotkey } => {
                write!(f, "TRIGGERED {} ({})", action, hotkey)
            }
            BindingEvent::Unmatched { hotkey } => write!(f, "UNMATCHED ({})", hotkey),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Keycode, Modifiers};

    #[test]
    fn test_event_serialization() {
        let event = BindingEvent::Triggered {
            action: "save".to_string(),
            hotkey: Hotkey::new(Keycode::S, Modifiers::CTRL),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains(r#""type":"triggered""#));
        assert!(json.contains(r#""hotkey":"S Ctrl""#));
    }

    #[test]
    fn test_event_deserialization() {
        let json = r#"{"type":"unmatched","hotkey":"F2 Shift, Alt"}"#;
        let event: BindingEvent = serde_json::from_str(json).unwrap();
        match event {
            BindingEvent::Unmatched { hotkey } => {
                assert_eq!(hotkey, Hotkey::new(Keycode::F2, Modifiers::SHIFT | Modifiers::ALT));
            }
            other => panic!("unexpected event {other}"),
        }
    }

    #[test]
    fn test_event_display() {
        let event = BindingEvent::Unmatched {
            hotkey: Hotkey::new(Keycode::Tab, Modifiers::empty()),
        };
        assert_eq!(event.to_string(), "UNMATCHED (Tab None)");
    }
}
