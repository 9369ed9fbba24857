//! CLI command handlers.
//!
//! Headless access to the macro binding logic for scripting and for
//! checking exported macro lists and key actions.

pub mod bind;
pub mod common;
pub mod config;
pub mod link;
pub mod options;
pub mod resolve;

// Re-export types used by main.rs and tests
pub use bind::BindArgs;
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use link::LinkArgs;
pub use options::OptionsArgs;
pub use resolve::ResolveArgs;
