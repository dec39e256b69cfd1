//! Turns captured key presses into binding events
//!
//! Only key-down events are considered. Each press is converted to a
//! hotkey and looked up in the keymap; the outcome is broadcast.

use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info};

use crate::events::BindingEvent;
use crate::input::KeyInput;
use crate::keys::Hotkey;

use super::map::Keymap;

/// Matches key presses against a keymap
pub struct Dispatcher {
    keymap: Keymap,
    /// Channel for emitting binding events
    event_tx: broadcast::Sender<BindingEvent>,
}

impl Dispatcher {
    /// Create a dispatcher emitting events on `event_tx`
    pub fn new(keymap: Keymap, event_tx: broadcast::Sender<BindingEvent>) -> Self {
        Self { keymap, event_tx }
    }

    /// Bindings currently in effect
    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    /// Mutable access for rebinding while dispatching
    pub fn keymap_mut(&mut self) -> &mut Keymap {
        &mut self.keymap
    }

    /// Process key presses until the input channel closes
    pub async fn run(&mut self, mut input_rx: mpsc::Receiver<KeyInput>) {
        info!(bindings = self.keymap.len(), "dispatcher started");

        while let Some(input) = input_rx.recv().await {
            self.handle_input(&input);
        }

        info!("dispatcher stopped");
    }

    /// Handle one key event, returning the triggered action if any
    pub fn handle_input(&self, input: &KeyInput) -> Option<String> {
        if !input.is_down() {
            return None;
        }

        let hotkey = Hotkey::from_key_input(input);
        let action = self.keymap.action_for(&hotkey).map(str::to_string);

        let event = match &action {
            Some(action) => BindingEvent::Triggered {
                action: action.clone(),
                hotkey,
            },
            None => BindingEvent::Unmatched { hotkey },
        };

        debug!(%event, "dispatching");
        // No subscribers is not an error
        let _ = self.event_tx.send(event);

        action
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{Keycode, Modifiers};

    fn create_dispatcher() -> (Dispatcher, broadcast::Receiver<BindingEvent>) {
        let keymap = Keymap::from_pairs([("save", "S Ctrl"), ("help", "F1 None")]);
        let (tx, rx) = broadcast::channel(16);
        (Dispatcher::new(keymap, tx), rx)
    }

    #[test]
    fn test_bound_press_triggers() {
        let (dispatcher, mut rx) = create_dispatcher();

        let action = dispatcher.handle_input(&KeyInput::down(Keycode::S, Modifiers::CTRL));
        assert_eq!(action.as_deref(), Some("save"));

        match rx.try_recv().unwrap() {
            BindingEvent::Triggered { action, hotkey } => {
                assert_eq!(action, "save");
                assert_eq!(hotkey, Hotkey::new(Keycode::S, Modifiers::CTRL));
            }
            other => panic!("unexpected event {other}"),
        }
    }

    #[test]
    fn test_modifiers_must_match_exactly() {
        let (dispatcher, mut rx) = create_dispatcher();

        let input = KeyInput::down(Keycode::S, Modifiers::CTRL | Modifiers::SHIFT);
        assert_eq!(dispatcher.handle_input(&input), None);
        assert!(matches!(rx.try_recv().unwrap(), BindingEvent::Unmatched { .. }));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let (dispatcher, mut rx) = create_dispatcher();

        assert_eq!(dispatcher.handle_input(&KeyInput::up(Keycode::F1, Modifiers::empty())), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_unknown_key_never_triggers() {
        let mut keymap = Keymap::new();
        keymap.bind("unbound", Hotkey::INVALID);
        let (tx, _rx) = broadcast::channel(16);
        let dispatcher = Dispatcher::new(keymap, tx);

        let input = KeyInput::down(Keycode::Unknown, Modifiers::empty());
        assert_eq!(dispatcher.handle_input(&input), None);
    }

    #[test]
    fn test_rebinding_through_dispatcher() {
        let (mut dispatcher, _rx) = create_dispatcher();
        dispatcher
            .keymap_mut()
            .bind("save", Hotkey::new(Keycode::S, Modifiers::META));

        let old = KeyInput::down(Keycode::S, Modifiers::CTRL);
        let new = KeyInput::down(Keycode::S, Modifiers::META);
        assert_eq!(dispatcher.handle_input(&old), None);
        assert_eq!(dispatcher.handle_input(&new).as_deref(), Some("save"));
    }

    #[tokio::test]
    async fn test_run_until_channel_closes() {
        let (mut dispatcher, mut rx) = create_dispatcher();
        let (input_tx, input_rx) = mpsc::channel(8);

        input_tx.send(KeyInput::down(Keycode::F1, Modifiers::empty())).await.unwrap();
        input_tx.send(KeyInput::up(Keycode::F1, Modifiers::empty())).await.unwrap();
        input_tx.send(KeyInput::down(Keycode::Q, Modifiers::CTRL)).await.unwrap();
        drop(input_tx);

        dispatcher.run(input_rx).await;

        assert!(matches!(
            rx.recv().await.unwrap(),
            BindingEvent::Triggered { ref action, .. } if action == "help"
        ));
        assert!(matches!(rx.recv().await.unwrap(), BindingEvent::Unmatched { .. }));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_run_blocking() {
        let (mut dispatcher, mut rx) = create_dispatcher();
        let (input_tx, input_rx) = mpsc::channel(1);
        drop(input_tx);

        tokio_test::block_on(dispatcher.run(input_rx));
        assert!(rx.try_recv().is_err());
        assert_eq!(dispatcher.keymap().len(), 2);
    }
}
