//! Macro editor back link command.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use crate::models::{Keymap, RemapInfo, SelectedKey};
use crate::services::compose_deep_link;
use clap::Args;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Compose the back link used when jumping from a key to the macro editor
#[derive(Debug, Clone, Args)]
pub struct LinkArgs {
    /// Keymap abbreviation (e.g., "QWR")
    #[arg(long, value_name = "ABBR")]
    pub keymap: String,

    /// Keymap display name (e.g., "QWERTY")
    #[arg(long, value_name = "NAME")]
    pub keymap_name: String,

    /// Layer of the edited key
    #[arg(long)]
    pub layer: u8,

    /// Module of the edited key
    #[arg(long)]
    pub module: u8,

    /// Key id within the module
    #[arg(long)]
    pub key: u8,

    /// Remap the key on all keymaps (adds the remap scope to the link)
    #[arg(long, value_name = "BOOL")]
    pub remap_on_all_keymap: Option<bool>,

    /// Remap the key on all layers (adds the remap scope to the link)
    #[arg(long, value_name = "BOOL")]
    pub remap_on_all_layer: Option<bool>,

    /// Config file to read the keymap route from
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON response for link
#[derive(Debug, Serialize)]
struct LinkResponse {
    path: String,
    url: String,
    label: String,
    jump_query_params: BTreeMap<&'static str, String>,
}

impl LinkArgs {
    fn remap_info(&self) -> Option<RemapInfo> {
        if self.remap_on_all_keymap.is_none() && self.remap_on_all_layer.is_none() {
            return None;
        }
        Some(RemapInfo {
            remap_on_all_keymap: self.remap_on_all_keymap.unwrap_or(false),
            remap_on_all_layer: self.remap_on_all_layer.unwrap_or(false),
        })
    }

    /// Execute the link command
    pub fn execute(&self) -> CliResult<()> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        }
        .map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))?;

        let keymap = Keymap::new(self.keymap.clone(), self.keymap_name.clone());
        let selected_key = SelectedKey::new(self.layer, self.module, self.key);
        let remap = self.remap_info();

        let target = compose_deep_link(
            &config.links.keymap_route,
            &keymap,
            &selected_key,
            remap.as_ref(),
        );

        if self.json {
            let response = LinkResponse {
                path: target.path.clone(),
                url: target.url(),
                label: target.label.clone(),
                jump_query_params: target.jump_query_params().into_iter().collect(),
            };
            return print_json(&response);
        }

        println!("{}", target.url());
        println!("{}", target.label);
        Ok(())
    }
}
