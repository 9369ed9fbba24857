//! Conversion between play-macro key actions and the macro selection.
//!
//! The selection is a position in the current macro snapshot. It is never
//! clamped when the snapshot changes; validity is always evaluated against
//! the snapshot passed in by the caller.

use crate::models::{KeyAction, Macro, PlayMacroAction, RgbColor};
use thiserror::Error;
use tracing::{debug, warn};

/// Selection value meaning "no macro selected".
///
/// Used when the bound macro no longer exists or the option id could not
/// be parsed.
pub const NO_SELECTION: isize = -1;

/// Errors raised when committing a macro binding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindingError {
    /// The selection does not point at a macro of the current snapshot
    #[error("invalid selection: no macro at index {index} ({macro_count} macros available)")]
    InvalidSelection {
        /// Selection at commit time
        index: isize,
        /// Length of the snapshot at commit time
        macro_count: usize,
    },
}

/// Holds the macro selection and the color inherited by new bindings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindingMapper {
    selected_index: isize,
    inherited_color: Option<RgbColor>,
}

impl Default for BindingMapper {
    fn default() -> Self {
        Self::new()
    }
}

impl BindingMapper {
    /// Creates a mapper selecting the first macro.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            selected_index: 0,
            inherited_color: None,
        }
    }

    /// Current selection (may be out of range).
    #[must_use]
    pub const fn selected_index(&self) -> isize {
        self.selected_index
    }

    /// Color that the next binding will carry.
    #[must_use]
    pub const fn inherited_color(&self) -> Option<RgbColor> {
        self.inherited_color
    }

    /// Records the default key action whose color new bindings inherit.
    pub fn set_default_action(&mut self, action: Option<&KeyAction>) {
        self.inherited_color = action.and_then(KeyAction::color);
    }

    /// Restores the selection from a key action.
    ///
    /// Returns `false` and leaves the selection untouched when `action` is
    /// not a play-macro action. Otherwise selects the macro referenced by the
    /// action, or [`NO_SELECTION`] if it is missing from `macros`, and
    /// returns `true`.
    pub fn rehydrate(&mut self, action: &KeyAction, macros: &[Macro]) -> bool {
        let KeyAction::PlayMacro(play_macro) = action else {
            return false;
        };

        self.selected_index = macros
            .iter()
            .position(|m| m.id == play_macro.macro_id)
            .map_or(NO_SELECTION, |pos| pos as isize);

        if self.selected_index == NO_SELECTION {
            warn!(macro_id = %play_macro.macro_id, "Bound macro not found in snapshot");
        } else {
            debug!(
                macro_id = %play_macro.macro_id,
                index = self.selected_index,
                "Selection restored from key action"
            );
        }

        true
    }

    /// Selects the option with the given id.
    ///
    /// The id is not range checked here. An id that is not an integer
    /// selects [`NO_SELECTION`].
    pub fn select_by_option_id(&mut self, id: &str) {
        self.selected_index = match id.trim().parse::<isize>() {
            Ok(index) => index,
            Err(_) => {
                warn!(option_id = id, "Ignoring malformed macro option id");
                NO_SELECTION
            }
        };
    }

    /// Returns the selected macro, if the selection is in range.
    #[must_use]
    pub fn selected_macro<'a>(&self, macros: &'a [Macro]) -> Option<&'a Macro> {
        usize::try_from(self.selected_index)
            .ok()
            .and_then(|index| macros.get(index))
    }

    /// True iff the selection points at a macro of `macros`.
    #[must_use]
    pub fn is_valid(&self, macros: &[Macro]) -> bool {
        self.selected_macro(macros).is_some()
    }

    /// Builds the play-macro key action for the current selection.
    ///
    /// The action carries the color of the last default key action.
    ///
    /// # Errors
    ///
    /// Returns [`BindingError::InvalidSelection`] if no macro is selected.
    pub fn to_binding(&self, macros: &[Macro]) -> Result<KeyAction, BindingError> {
        let selected = self
            .selected_macro(macros)
            .ok_or(BindingError::InvalidSelection {
                index: self.selected_index,
                macro_count: macros.len(),
            })?;

        Ok(KeyAction::PlayMacro(PlayMacroAction {
            macro_id: selected.id,
            color: self.inherited_color,
        }))
    }
}
