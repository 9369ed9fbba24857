//! Macro Tab - macro binding tools for keymap editors
//!
//! Lists macro selector options, resolves and builds play-macro key actions,
//! composes macro editor back links and manages the configuration from the
//! command line.

use clap::{Parser, Subcommand};
use macro_tab::cli::{BindArgs, CliResult, ConfigArgs, LinkArgs, OptionsArgs, ResolveArgs};
use macro_tab::config::Config;
use macro_tab::constants::APP_BINARY_NAME;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Macro Tab - macro binding tools for keymap editors
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List macro selector options
    Options(OptionsArgs),
    /// Find the option selected by an existing key action
    Resolve(ResolveArgs),
    /// Build the play-macro key action for an option
    Bind(BindArgs),
    /// Compose the macro editor back link for a key
    Link(LinkArgs),
    /// Show or change the configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(command: &Commands) -> CliResult<()> {
    match command {
        Commands::Options(args) => args.execute(),
        Commands::Resolve(args) => args.execute(),
        Commands::Bind(args) => args.execute(),
        Commands::Link(args) => args.execute(),
        Commands::Config(args) => args.execute(),
    }
}

fn main() {
    let cli = Cli::parse();

    // The config file can also turn on debug logging
    let verbose = cli.verbose || Config::load().is_ok_and(|config| config.ui.verbose_logging);
    init_tracing(verbose);
    debug!(command = ?cli.command, "Running command");

    if let Err(err) = run(&cli.command) {
        eprintln!("Error: {err}");
        std::process::exit(err.code.code());
    }
}
