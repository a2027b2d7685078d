//! CLI command implementations
//!
//! `serve` resolves configuration (flags over environment over defaults),
//! opens the store, builds the shared state, and runs the server on its own
//! tokio runtime.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::rest_api::{AppState, CollectionRegistry};
use crate::store::{DocumentStore, FileStore, MemoryStore};

use super::args::{Cli, Command};
use super::errors::CliResult;

/// Environment variable naming the snapshot file
pub const DATA_ENV: &str = "COURSECART_DATA";

/// Snapshot path when neither `--data` nor the environment names one
pub const DEFAULT_DATA_PATH: &str = "./coursecart.json";

/// Parse arguments and dispatch to the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();

    match cli.command {
        Command::Serve {
            host,
            port,
            data,
            ephemeral,
            collections,
        } => serve(host, port, data, ephemeral, &collections),
    }
}

/// Start the HTTP server
fn serve(
    host: Option<String>,
    port: Option<u16>,
    data: Option<PathBuf>,
    ephemeral: bool,
    collections: &[String],
) -> CliResult<()> {
    init_tracing();

    let mut config = HttpServerConfig::from_env()?;
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let mut registry = CollectionRegistry::with_defaults();
    for name in collections {
        registry.register(name)?;
    }

    let store: Arc<dyn DocumentStore> = if ephemeral {
        info!("using in-memory store");
        Arc::new(MemoryStore::new())
    } else {
        let path = resolve_data_path(data);
        info!(path = %path.display(), "opening snapshot store");
        Arc::new(FileStore::open(path)?)
    };

    let state = Arc::new(AppState::new(store, registry));
    let server = HttpServer::new(config, state);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server.start())?;

    Ok(())
}

/// Flag, then environment, then default
fn resolve_data_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var_os(DATA_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH))
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_data_path_prefers_flag() {
        let path = resolve_data_path(Some(PathBuf::from("/tmp/custom.json")));
        assert_eq!(path, PathBuf::from("/tmp/custom.json"));
    }

    #[test]
    fn test_resolve_data_path_default() {
        // The test runner environment does not set COURSECART_DATA.
        if std::env::var_os(DATA_ENV).is_none() {
            assert_eq!(resolve_data_path(None), PathBuf::from(DEFAULT_DATA_PATH));
        }
    }
}
