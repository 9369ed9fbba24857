//! Application-wide constants.

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "macro-tab";

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "MacroTab";

/// Route of the keymap editor that back links point at.
pub const DEFAULT_KEYMAP_ROUTE: &str = "/keymap";

/// Shown next to the macro selector when the firmware cannot play macros.
pub const MACRO_PLAYBACK_UNSUPPORTED: &str =
    "Macro playback is not supported by the firmware of the connected keyboard. \
     Update the firmware to use macros.";
