//! # Generic Collection Routes
//!
//! CRUD endpoints bound to a collection named in the URL path. Every
//! operation translates to exactly one store call; identifier validation
//! happens before the store is touched.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde_json::Value;

use crate::store::{DocumentId, DocumentStore};

use super::errors::{RestError, RestResult};
use super::registry::CollectionRegistry;
use super::response::Ack;

/// Shared state threaded through every handler
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub registry: CollectionRegistry,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, registry: CollectionRegistry) -> Self {
        Self { store, registry }
    }
}

/// Build the generic `/collection/{name}` router
pub fn collection_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/collection/{name}",
            get(list_handler).post(create_handler),
        )
        .route(
            "/collection/{name}/{id}",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Operations
// ==================
//
// Shared with the fixed-resource aliases, which bind the collection name
// statically instead of resolving it from the path.

pub(crate) fn list_documents(state: &AppState, collection: &str) -> RestResult<Vec<Value>> {
    Ok(state.store.list(collection)?)
}

pub(crate) fn create_document(
    state: &AppState,
    collection: &str,
    body: Value,
) -> RestResult<Value> {
    Ok(state.store.insert(collection, body)?)
}

pub(crate) fn fetch_document(state: &AppState, collection: &str, id: &str) -> RestResult<Value> {
    let id = DocumentId::parse(id)?;
    state
        .store
        .get(collection, &id)?
        .ok_or(RestError::NotFound)
}

pub(crate) fn update_document(
    state: &AppState,
    collection: &str,
    id: &str,
    patch: Value,
) -> RestResult<Ack> {
    let id = DocumentId::parse(id)?;
    if state.store.update(collection, &id, patch)? {
        Ok(Ack::success())
    } else {
        Err(RestError::NotFound)
    }
}

pub(crate) fn delete_document(state: &AppState, collection: &str, id: &str) -> RestResult<Ack> {
    let id = DocumentId::parse(id)?;
    if state.store.delete(collection, &id)? {
        Ok(Ack::success())
    } else {
        Err(RestError::NotFound)
    }
}

// ==================
// Handlers
// ==================

/// List all documents in a collection
async fn list_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> RestResult<Json<Vec<Value>>> {
    let collection = state.registry.resolve(&name)?;
    Ok(Json(list_documents(&state, collection)?))
}

/// Create a document from the request body
async fn create_handler(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> RestResult<(StatusCode, Json<Value>)> {
    let collection = state.registry.resolve(&name)?;
    let stored = create_document(&state, collection, body)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

/// Fetch a single document by identifier
async fn get_handler(
    State(state): State<Arc<AppState>>,
    Path((name, id)): Path<(String, String)>,
) -> RestResult<Json<Value>> {
    let collection = state.registry.resolve(&name)?;
    Ok(Json(fetch_document(&state, collection, &id)?))
}

/// Merge the request body into a document
async fn update_handler(
    State(state): State<Arc<AppState>>,
    Path((name, id)): Path<(String, String)>,
    Json(patch): Json<Value>,
) -> RestResult<Json<Ack>> {
    let collection = state.registry.resolve(&name)?;
    Ok(Json(update_document(&state, collection, &id, patch)?))
}

/// Delete a single document
async fn delete_handler(
    State(state): State<Arc<AppState>>,
    Path((name, id)): Path<(String, String)>,
) -> RestResult<Json<Ack>> {
    let collection = state.registry.resolve(&name)?;
    Ok(Json(delete_document(&state, collection, &id)?))
}
