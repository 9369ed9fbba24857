//! JSON file I/O for macro lists and key actions.
//!
//! The surrounding editor exchanges these documents with the binding tools;
//! this service keeps path handling and error messages consistent.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::models::{macros::find_duplicate_id, KeyAction, Macro};

/// Service for reading and writing binding documents.
pub struct DocumentService;

impl DocumentService {
    /// Loads a macro list from a JSON array of `{ "id", "name" }` objects.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use macro_tab::services::DocumentService;
    ///
    /// let macros = DocumentService::load_macros(Path::new("macros.json"))?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if two
    /// macros share an id.
    pub fn load_macros(path: &Path) -> Result<Vec<Macro>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read macro list: {}", path.display()))?;
        let macros: Vec<Macro> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse macro list: {}", path.display()))?;

        if let Some(id) = find_duplicate_id(&macros) {
            anyhow::bail!("Duplicate macro id {id} in {}", path.display());
        }

        Ok(macros)
    }

    /// Loads a single key action.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not a key action.
    pub fn load_key_action(path: &Path) -> Result<KeyAction> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read key action: {}", path.display()))?;
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse key action: {}", path.display()))
    }

    /// Saves a key action as pretty JSON.
    ///
    /// Writes to a temp file first and renames it into place.
    ///
    /// # Errors
    ///
    /// Returns an error on serialization or I/O failure.
    pub fn save_key_action(action: &KeyAction, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(action).context("Failed to serialize key action")?;

        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp key action file: {}", temp_path.display())
        })?;
        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp key action file to: {}", path.display())
        })?;

        Ok(())
    }
}
