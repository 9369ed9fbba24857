//! Projection of the macro list into selector options.
//!
//! Option ids are positions in the current snapshot, not macro ids. A new
//! snapshot therefore shifts the meaning of every option id after an
//! insertion or removal point.

use crate::models::Macro;
use serde::Serialize;
use tracing::debug;

/// One entry of the macro selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MacroOption {
    /// Stringified 0-based position in the snapshot
    pub id: String,
    /// Macro display name
    pub text: String,
}

/// Builds selector options for a macro snapshot.
///
/// # Examples
/// ```
/// use macro_tab::models::Macro;
/// use macro_tab::services::macro_catalog::build_macro_options;
///
/// let options = build_macro_options(&[Macro::new(10, "Copy"), Macro::new(4, "Paste")]);
/// assert_eq!(options[1].id, "1");
/// assert_eq!(options[1].text, "Paste");
/// ```
#[must_use]
pub fn build_macro_options(macros: &[Macro]) -> Vec<MacroOption> {
    macros
        .iter()
        .enumerate()
        .map(|(index, m)| MacroOption {
            id: index.to_string(),
            text: m.name.clone(),
        })
        .collect()
}

/// Latest macro snapshot together with its derived options.
#[derive(Debug, Clone, Default)]
pub struct MacroCatalog {
    macros: Vec<Macro>,
    options: Vec<MacroOption>,
    revision: u64,
}

impl MacroCatalog {
    /// Creates an empty catalog. No snapshot has been delivered yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the snapshot and recomputes the options.
    pub fn refresh(&mut self, macros: &[Macro]) {
        self.macros = macros.to_vec();
        self.options = build_macro_options(&self.macros);
        self.revision += 1;
        debug!(
            revision = self.revision,
            count = self.macros.len(),
            "Macro catalog refreshed"
        );
    }

    /// Current macro snapshot.
    #[must_use]
    pub fn macros(&self) -> &[Macro] {
        &self.macros
    }

    /// Options for the current snapshot.
    #[must_use]
    pub fn options(&self) -> &[MacroOption] {
        &self.options
    }

    /// Number of snapshots delivered so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}
