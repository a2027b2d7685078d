//! # REST API Module
//!
//! HTTP endpoints for CRUD operations on permitted collections, plus the
//! fixed `/lessons` and `/orders` aliases.

pub mod errors;
pub mod registry;
pub mod resources;
pub mod response;
pub mod routes;

pub use errors::{ErrorResponse, RestError, RestResult};
pub use registry::{CollectionRegistry, InvalidCollectionName, LESSONS, ORDERS};
pub use resources::{resource_routes, Lesson, Order};
pub use response::Ack;
pub use routes::{collection_routes, AppState};
