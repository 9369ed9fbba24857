//! Macro definitions as seen by the binding editor.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a macro.
///
/// Opaque to the binding editor: it is only compared for equality and
/// copied into play-macro key actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MacroId(pub u32);

impl fmt::Display for MacroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MacroId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A named macro owned by the macro management subsystem.
///
/// The macro's actions are not needed here, only its identity and the
/// name shown in the selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Macro {
    /// Unique identifier within a snapshot
    pub id: MacroId,
    /// Display name (e.g., "Email signature")
    pub name: String,
}

impl Macro {
    /// Creates a new macro with the given id and display name.
    pub fn new(id: impl Into<MacroId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Returns the first id that appears more than once in `macros`, if any.
#[must_use]
pub fn find_duplicate_id(macros: &[Macro]) -> Option<MacroId> {
    let mut seen = std::collections::HashSet::with_capacity(macros.len());
    macros.iter().map(|m| m.id).find(|id| !seen.insert(*id))
}
