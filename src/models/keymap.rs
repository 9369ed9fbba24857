//! Navigation context of the key being edited.

use serde::{Deserialize, Serialize};

/// Identity of a keymap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keymap {
    /// Short unique identifier used in routes (e.g., "QWR", "default")
    pub abbreviation: String,
    /// Human-readable name (e.g., "QWERTY")
    pub name: String,
}

impl Keymap {
    /// Creates a keymap identity from its abbreviation and display name.
    pub fn new(abbreviation: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            name: name.into(),
        }
    }
}

/// Physical key location being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedKey {
    /// Layer index
    pub layer_id: u8,
    /// Keyboard module (left half, right half, add-on module)
    pub module_id: u8,
    /// Key position within the module
    pub key_id: u8,
}

impl SelectedKey {
    /// Creates a key location.
    #[must_use]
    pub const fn new(layer_id: u8, module_id: u8, key_id: u8) -> Self {
        Self {
            layer_id,
            module_id,
            key_id,
        }
    }
}

/// Scope of a pending remap.
///
/// When present, the reassignment of the edited key propagates to all
/// keymaps and/or all layers, not just the current one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemapInfo {
    /// Apply the remap on every keymap
    pub remap_on_all_keymap: bool,
    /// Apply the remap on every layer
    pub remap_on_all_layer: bool,
}
