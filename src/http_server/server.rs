//! # HTTP Server
//!
//! Combines the generic collection routes and the fixed-resource aliases
//! into one router, applies permissive CORS, and serves it.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::rest_api::{collection_routes, resource_routes, AppState};

use super::config::HttpServerConfig;

/// HTTP server for the document collection API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given state
    pub fn new(config: HttpServerConfig, state: Arc<AppState>) -> Self {
        let router = Self::build_router(state);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(state: Arc<AppState>) -> Router {
        // Every response carries permissive cross-origin headers; the API
        // is consumed by browser frontends served from other origins.
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        Router::new()
            .merge(health_routes())
            .merge(collection_routes(state.clone()))
            .merge(resource_routes(state))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid socket address {}: {}", self.config.socket_addr(), e),
            )
        })?;

        info!(%addr, "starting coursecart HTTP server");
        info!("health check: http://{}/health", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check handler
async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest_api::CollectionRegistry;
    use crate::store::MemoryStore;

    fn test_server() -> HttpServer {
        let state = Arc::new(AppState::new(
            Arc::new(MemoryStore::new()),
            CollectionRegistry::with_defaults(),
        ));
        HttpServer::new(HttpServerConfig::default(), state)
    }

    #[test]
    fn test_server_socket_addr() {
        let server = test_server();
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_router_builds() {
        let server = test_server();
        let _router = server.router();
        // If we get here, router construction succeeded
    }

    #[test]
    fn test_health_response_serialization() {
        let response = HealthResponse {
            status: "ok".to_string(),
            version: "0.1.0".to_string(),
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("ok"));
    }
}
