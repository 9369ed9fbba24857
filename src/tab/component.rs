//! Contract shared by the key action tabs of the key editor popover.
//!
//! Each tab edits one kind of key action (keystroke, layer switch, macro,
//! ...). The popover asks the active tab whether its state can be committed
//! and, if so, for the resulting key action.

use crate::models::KeyAction;
use crate::services::BindingError;

/// A tab that converts between its own selection state and a key action.
pub trait Tab {
    /// Returns true if the tab's state can be turned into a key action.
    fn key_action_valid(&self) -> bool;

    /// Loads the tab's state from `action`.
    ///
    /// Returns `false` if the action is not of the kind this tab edits.
    fn from_key_action(&mut self, action: &KeyAction) -> bool;

    /// Builds the key action for the current state.
    ///
    /// # Errors
    ///
    /// Fails when [`Tab::key_action_valid`] is false.
    fn to_key_action(&self) -> Result<KeyAction, BindingError>;
}

/// Events emitted by a tab to the popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabEvent {
    /// Derived state was recomputed; carries whether the tab can commit
    ValidAction(bool),
    /// User asked to create a new macro and bind it to the key
    AssignNewMacro,
}
