//! Macro selection resolution command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::{DocumentService, MacroStore};
use crate::tab::{MacroTab, Tab};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Find the macro option selected by an existing key action
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Path to macro list JSON file
    #[arg(short, long, value_name = "FILE")]
    pub macros: PathBuf,

    /// Path to key action JSON file
    #[arg(short, long, value_name = "FILE")]
    pub action: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Outcome of restoring the selection from a key action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
enum ResolveStatus {
    /// The key action is not a play-macro action
    NotApplicable,
    /// The referenced macro is missing from the list
    Dangling,
    /// The referenced macro was found
    Selected,
}

/// JSON response for resolve
#[derive(Debug, Serialize)]
struct ResolveResponse {
    action_type: &'static str,
    status: ResolveStatus,
    selected_index: Option<isize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    macro_name: Option<String>,
    valid: bool,
}

impl ResolveArgs {
    /// Execute the resolve command
    pub fn execute(&self) -> CliResult<()> {
        let macros = DocumentService::load_macros(&self.macros)
            .map_err(|e| CliError::io(format!("Failed to load macros: {e:#}")))?;
        let action = DocumentService::load_key_action(&self.action)
            .map_err(|e| CliError::io(format!("Failed to load key action: {e:#}")))?;

        let store =
            MacroStore::new(macros).map_err(|e| CliError::validation(format!("{e:#}")))?;
        let mut tab = MacroTab::new(&store);

        let applicable = tab.from_key_action(&action);
        let valid = tab.key_action_valid();
        let status = match (applicable, valid) {
            (false, _) => ResolveStatus::NotApplicable,
            (true, false) => ResolveStatus::Dangling,
            (true, true) => ResolveStatus::Selected,
        };
        let macro_name = usize::try_from(tab.selected_index())
            .ok()
            .filter(|_| applicable)
            .and_then(|index| tab.macro_options().get(index).map(|o| o.text.clone()));
        tab.close();

        let response = ResolveResponse {
            action_type: action.kind_name(),
            status,
            selected_index: applicable.then(|| tab.selected_index()),
            macro_name,
            valid: applicable && valid,
        };

        if self.json {
            print_json(&response)?;
        } else {
            match status {
                ResolveStatus::NotApplicable => println!(
                    "Key action is {}, not a macro binding",
                    response.action_type
                ),
                ResolveStatus::Dangling => {
                    println!("Key action references a macro that no longer exists");
                }
                ResolveStatus::Selected => println!(
                    "Selected option {}: {}",
                    tab.selected_index(),
                    response.macro_name.as_deref().unwrap_or_default()
                ),
            }
        }

        if status == ResolveStatus::Dangling {
            let macro_id = action
                .as_play_macro()
                .map(|a| a.macro_id.to_string())
                .unwrap_or_default();
            return Err(CliError::validation(format!(
                "Macro {macro_id} is not in the macro list"
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_kebab_case() {
        let statuses = [
            ResolveStatus::NotApplicable,
            ResolveStatus::Dangling,
            ResolveStatus::Selected,
        ];
        let json = serde_json::to_string(&statuses).unwrap();
        assert_eq!(json, r#"["not-applicable","dangling","selected"]"#);
    }
}
