//! # HTTP Server Module
//!
//! Server assembly and configuration.

pub mod config;
pub mod server;

pub use config::{ConfigError, HttpServerConfig, DEFAULT_PORT};
pub use server::{health_routes, HttpServer};
