//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use macro_tab::models::{KeyAction, KeystrokeAction, Macro, PlayMacroAction, RgbColor};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Color used by the default key action fixtures.
pub const FIXTURE_COLOR: RgbColor = RgbColor::new(255, 128, 0);

/// Three macros with ids that differ from their positions.
pub fn test_macros() -> Vec<Macro> {
    vec![
        Macro::new(10, "Email signature"),
        Macro::new(20, "Lock screen"),
        Macro::new(30, "Git commit"),
    ]
}

/// Keystroke action carrying [`FIXTURE_COLOR`].
pub fn colored_keystroke() -> KeyAction {
    KeyAction::Keystroke(KeystrokeAction {
        scancode: Some(4),
        modifier_mask: 0,
        color: Some(FIXTURE_COLOR),
    })
}

/// Play-macro action for `macro_id` carrying [`FIXTURE_COLOR`].
pub fn colored_play_macro(macro_id: u32) -> KeyAction {
    PlayMacroAction::new(macro_id)
        .with_color(FIXTURE_COLOR)
        .into()
}

/// Writes a macro list as JSON.
pub fn write_macros_file(macros: &[Macro], path: &Path) {
    let json = serde_json::to_string_pretty(macros).expect("Failed to serialize macros");
    fs::write(path, json).expect("Failed to write macros file");
}

/// Writes a key action as JSON.
pub fn write_key_action_file(action: &KeyAction, path: &Path) {
    let json = serde_json::to_string_pretty(action).expect("Failed to serialize key action");
    fs::write(path, json).expect("Failed to write key action file");
}

/// Creates a macro list file in a temp directory and returns the path.
pub fn create_temp_macros_file(macros: &[Macro]) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let macros_path = temp_dir.path().join("macros.json");
    write_macros_file(macros, &macros_path);
    (macros_path, temp_dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_macros_have_unique_ids() {
        let macros = test_macros();
        assert_eq!(macros.len(), 3);
        assert_ne!(macros[0].id, macros[1].id);
        assert_ne!(macros[1].id, macros[2].id);
    }

    #[test]
    fn test_fixture_colors() {
        assert_eq!(colored_keystroke().color(), Some(FIXTURE_COLOR));
        assert_eq!(colored_play_macro(1).color(), Some(FIXTURE_COLOR));
    }
}
