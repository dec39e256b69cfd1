//! Ordered action to hotkey bindings

use tracing::{debug, warn};

use crate::keys::Hotkey;

/// A single action bound to a hotkey
#[derive(Debug, Clone)]
pub struct Binding {
    pub action: String,
    pub hotkey: Hotkey,
}

/// Bindings kept in insertion order
///
/// Lookups compare with hotkey equality, so an invalid hotkey never
/// resolves to an action even if one is bound to it.
#[derive(Debug, Clone, Default)]
pub struct Keymap {
    bindings: Vec<Binding>,
}

impl Keymap {
    /// Create an empty keymap
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(action, text)` pairs
    ///
    /// Text that does not parse binds the action to [`Hotkey::INVALID`].
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut keymap = Self::new();
        for (action, text) in pairs {
            let hotkey = Hotkey::try_parse(text).unwrap_or_else(|| {
                warn!(action, text, "unparseable hotkey, action left unbound");
                Hotkey::INVALID
            });
            keymap.bind(action, hotkey);
        }
        keymap
    }

    /// Bind `action`, replacing its previous hotkey if it had one
    pub fn bind(&mut self, action: impl Into<String>, hotkey: Hotkey) {
        let action = action.into();

        match self.bindings.iter_mut().find(|b| b.action == action) {
            Some(existing) => {
                debug!(action = %action, from = %existing.hotkey, to = %hotkey, "rebinding");
                existing.hotkey = hotkey;
            }
            None => {
                debug!(action = %action, hotkey = %hotkey, "binding");
                self.bindings.push(Binding { action, hotkey });
            }
        }
    }

    /// Remove the binding for `action`, returning its hotkey
    pub fn unbind(&mut self, action: &str) -> Option<Hotkey> {
        let index = self.bindings.iter().position(|b| b.action == action)?;
        Some(self.bindings.remove(index).hotkey)
    }

    /// Hotkey currently bound to `action`
    pub fn hotkey_for(&self, action: &str) -> Option<Hotkey> {
        self.bindings
            .iter()
            .find(|b| b.action == action)
            .map(|b| b.hotkey)
    }

    /// First action bound to `hotkey`
    pub fn action_for(&self, hotkey: &Hotkey) -> Option<&str> {
        self.bindings
            .iter()
            .find(|b| b.hotkey == *hotkey)
            .map(|b| b.action.as_str())
    }

    /// Every action bound to `hotkey`, in binding order
    pub fn conflicts(&self, hotkey: &Hotkey) -> Vec<&str> {
        self.bindings
            .iter()
            .filter(|b| b.hotkey == *hotkey)
            .map(|b| b.action.as_str())
            .collect()
    }

    /// All bindings in the order they were added
    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// Number of bound actions
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no action is bound
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
