//! CLI argument definitions using clap
//!
//! Commands:
//! - coursecart serve [--host <host>] [--port <port>] [--data <path>]
//!   [--ephemeral] [--collection <name>]...

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// coursecart - CRUD over named document collections, served over HTTP
#[derive(Parser, Debug)]
#[command(name = "coursecart")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Host to bind (overrides COURSECART_HOST, default 0.0.0.0)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT, default 3000)
        #[arg(long)]
        port: Option<u16>,

        /// Snapshot file path (overrides COURSECART_DATA, default ./coursecart.json)
        #[arg(long)]
        data: Option<PathBuf>,

        /// Keep documents in memory only, never touching disk
        #[arg(long)]
        ephemeral: bool,

        /// Permit an additional collection name (repeatable)
        #[arg(long = "collection")]
        collections: Vec<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serve_parses_flags() {
        let cli = Cli::parse_from([
            "coursecart",
            "serve",
            "--port",
            "8080",
            "--ephemeral",
            "--collection",
            "inventory",
            "--collection",
            "reviews",
        ]);

        let Command::Serve {
            port,
            ephemeral,
            collections,
            ..
        } = cli.command;
        assert_eq!(port, Some(8080));
        assert!(ephemeral);
        assert_eq!(collections, vec!["inventory", "reviews"]);
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["coursecart", "serve"]);

        let Command::Serve {
            host,
            port,
            data,
            ephemeral,
            collections,
        } = cli.command;
        assert!(host.is_none());
        assert!(port.is_none());
        assert!(data.is_none());
        assert!(!ephemeral);
        assert!(collections.is_empty());
    }
}
