//! Macro selector options command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::services::{build_macro_options, DocumentService};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// List the macro selector options for a macro list
#[derive(Debug, Clone, Args)]
pub struct OptionsArgs {
    /// Path to macro list JSON file
    #[arg(short, long, value_name = "FILE")]
    pub macros: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Option entry for JSON output
#[derive(Debug, Serialize)]
struct OptionData {
    option_id: String,
    macro_id: u32,
    text: String,
}

impl OptionsArgs {
    /// Execute the options command
    pub fn execute(&self) -> CliResult<()> {
        let macros = DocumentService::load_macros(&self.macros)
            .map_err(|e| CliError::io(format!("Failed to load macros: {e:#}")))?;
        let options = build_macro_options(&macros);

        if self.json {
            let data: Vec<OptionData> = options
                .iter()
                .zip(&macros)
                .map(|(option, m)| OptionData {
                    option_id: option.id.clone(),
                    macro_id: m.id.0,
                    text: option.text.clone(),
                })
                .collect();
            return print_json(&data);
        }

        if options.is_empty() {
            println!("No macros defined");
        }
        for (option, m) in options.iter().zip(&macros) {
            println!("{}: {} (macro {})", option.id, option.text, m.id);
        }

        Ok(())
    }
}
