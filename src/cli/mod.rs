//! CLI module for coursecart
//!
//! Provides the command-line interface:
//! - serve: open the store and run the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, DATA_ENV, DEFAULT_DATA_PATH};
pub use errors::{CliError, CliResult};
