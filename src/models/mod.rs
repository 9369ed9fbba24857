//! Data models for macros, key actions and the key editing context.
//!
//! Models are plain data, independent of the binding logic in `services`.

pub mod key_action;
pub mod keymap;
pub mod macros;
pub mod rgb;

// Re-export all model types
pub use key_action::{
    KeyAction, KeystrokeAction, MouseAction, PlayMacroAction, SwitchKeymapAction,
    SwitchLayerAction,
};
pub use keymap::{Keymap, RemapInfo, SelectedKey};
pub use macros::{Macro, MacroId};
pub use rgb::RgbColor;
