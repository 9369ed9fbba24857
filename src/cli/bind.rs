//! Macro binding command.

use crate::cli::common::{CliError, CliResult};
use crate::services::{DocumentService, MacroStore};
use crate::tab::{MacroTab, Tab};
use clap::Args;
use std::path::PathBuf;

/// Build the play-macro key action for a selected macro option
#[derive(Debug, Clone, Args)]
pub struct BindArgs {
    /// Path to macro list JSON file
    #[arg(short, long, value_name = "FILE")]
    pub macros: PathBuf,

    /// Selected option id (position in the macro list)
    #[arg(short, long, value_name = "ID")]
    pub option: String,

    /// Key action currently on the key; its color is kept
    #[arg(short, long, value_name = "FILE")]
    pub default_action: Option<PathBuf>,

    /// Write the key action to this file instead of stdout
    #[arg(long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl BindArgs {
    /// Execute the bind command
    pub fn execute(&self) -> CliResult<()> {
        let macros = DocumentService::load_macros(&self.macros)
            .map_err(|e| CliError::io(format!("Failed to load macros: {e:#}")))?;
        let default_action = self
            .default_action
            .as_deref()
            .map(DocumentService::load_key_action)
            .transpose()
            .map_err(|e| CliError::io(format!("Failed to load default action: {e:#}")))?;

        let store =
            MacroStore::new(macros).map_err(|e| CliError::validation(format!("{e:#}")))?;
        let mut tab = MacroTab::new(&store);

        // The default action restores a previous selection and provides the
        // inherited color; --option then overrides the selection
        tab.set_default_key_action(default_action);
        tab.apply_changes();
        tab.on_change(&self.option);

        let action = tab
            .to_key_action()
            .map_err(|e| CliError::validation(e.to_string()))?;
        tab.close();

        match &self.output {
            Some(path) => {
                DocumentService::save_key_action(&action, path)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("Wrote {} key action to {}", action.kind_name(), path.display());
            }
            None => {
                let json = serde_json::to_string_pretty(&action)
                    .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
                println!("{json}");
            }
        }

        Ok(())
    }
}
