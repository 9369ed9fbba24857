//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::PathBuf;

/// Configuration management commands
#[derive(Debug, Clone, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Debug, Clone, Subcommand)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Set configuration values
    Set(ConfigSetArgs),
}

/// Display current configuration
#[derive(Debug, Clone, Args)]
pub struct ConfigShowArgs {
    /// Config file to read instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set configuration values
#[derive(Debug, Clone, Args)]
pub struct ConfigSetArgs {
    /// Route of the keymap editor used in back links (e.g., "/keymap")
    #[arg(long, value_name = "ROUTE")]
    keymap_route: Option<String>,

    /// Log at debug level by default
    #[arg(long, value_name = "BOOL")]
    verbose_logging: Option<bool>,

    /// Config file to write instead of the platform default
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn load(path: Option<&PathBuf>) -> CliResult<Config> {
    match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .map_err(|e| CliError::io(format!("Failed to load configuration: {e:#}")))
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Set(args) => args.execute(),
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = load(self.config.as_ref())?;

        if self.json {
            return print_json(&config);
        }

        println!("Links:");
        println!("  Keymap route: {}", config.links.keymap_route);
        println!();
        println!("UI:");
        println!("  Verbose logging: {}", config.ui.verbose_logging);
        Ok(())
    }
}

impl ConfigSetArgs {
    /// Execute set command
    pub fn execute(&self) -> CliResult<()> {
        if self.keymap_route.is_none() && self.verbose_logging.is_none() {
            return Err(CliError::validation(
                "No configuration values given. Use --keymap-route or --verbose-logging",
            ));
        }

        let mut config = load(self.config.as_ref())?;

        if let Some(route) = &self.keymap_route {
            config
                .set_keymap_route(route.as_str())
                .map_err(|e| CliError::validation(format!("{e:#}")))?;
            println!("Keymap route set to: {route}");
        }

        if let Some(verbose) = self.verbose_logging {
            config.ui.verbose_logging = verbose;
            println!("Verbose logging set to: {verbose}");
        }

        match &self.config {
            Some(path) => config.save_to(path),
            None => config.save(),
        }
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        Ok(())
    }
}
