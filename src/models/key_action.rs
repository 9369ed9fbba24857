//! Key action variants assignable to a physical key.
//!
//! A key action is the persisted description of what a key does. Every
//! variant carries an optional backlight color so that the color survives
//! when the user switches a key from one action type to another.

use crate::models::{MacroId, RgbColor};
use serde::{Deserialize, Serialize};

/// Sends a keystroke, optionally combined with modifiers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeystrokeAction {
    /// USB HID scancode, `None` for a modifier-only keystroke
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scancode: Option<u16>,
    /// Bit mask of held modifiers
    #[serde(default)]
    pub modifier_mask: u8,
    /// Key backlight color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
}

/// Activates another layer while held, or toggles it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchLayerAction {
    /// Target layer number
    pub layer: u8,
    /// Toggle instead of momentary activation
    #[serde(default)]
    pub toggle: bool,
    /// Key backlight color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
}

/// Switches the active keymap.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchKeymapAction {
    /// Abbreviation of the target keymap
    pub keymap_abbreviation: String,
    /// Key backlight color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
}

/// Mouse button, movement or scroll action.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MouseAction {
    /// Mouse action name (e.g., "leftClick", "scrollUp")
    pub mouse_action: String,
    /// Key backlight color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
}

/// Plays a macro when the key is pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayMacroAction {
    /// Identifier of the macro to play
    pub macro_id: MacroId,
    /// Key backlight color
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<RgbColor>,
}

impl PlayMacroAction {
    /// Creates a play-macro action without a color.
    pub fn new(macro_id: impl Into<MacroId>) -> Self {
        Self {
            macro_id: macro_id.into(),
            color: None,
        }
    }

    /// Sets the backlight color.
    #[must_use]
    pub const fn with_color(mut self, color: RgbColor) -> Self {
        self.color = Some(color);
        self
    }
}

/// What a single physical key does.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum KeyAction {
    /// Key does nothing
    #[default]
    None,
    /// Send a keystroke
    Keystroke(KeystrokeAction),
    /// Switch layer
    SwitchLayer(SwitchLayerAction),
    /// Switch keymap
    SwitchKeymap(SwitchKeymapAction),
    /// Mouse action
    Mouse(MouseAction),
    /// Play a macro
    PlayMacro(PlayMacroAction),
}

impl KeyAction {
    /// Returns the backlight color of this action, if any.
    #[must_use]
    pub const fn color(&self) -> Option<RgbColor> {
        match self {
            Self::None => None,
            Self::Keystroke(action) => action.color,
            Self::SwitchLayer(action) => action.color,
            Self::SwitchKeymap(action) => action.color,
            Self::Mouse(action) => action.color,
            Self::PlayMacro(action) => action.color,
        }
    }

    /// Returns the play-macro payload if this is a play-macro action.
    #[must_use]
    pub const fn as_play_macro(&self) -> Option<&PlayMacroAction> {
        match self {
            Self::PlayMacro(action) => Some(action),
            _ => None,
        }
    }

    /// Short kebab-case name of the variant, used in CLI output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Keystroke(_) => "keystroke",
            Self::SwitchLayer(_) => "switch-layer",
            Self::SwitchKeymap(_) => "switch-keymap",
            Self::Mouse(_) => "mouse",
            Self::PlayMacro(_) => "play-macro",
        }
    }
}

impl From<PlayMacroAction> for KeyAction {
    fn from(action: PlayMacroAction) -> Self {
        Self::PlayMacro(action)
    }
}
