//! # Fixed Resource Routes
//!
//! `/lessons` and `/orders` aliases over the same store, bound to fixed
//! collection names. Unlike the generic routes, create validates the typed
//! schema before storing; updates stay free-form field merges.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::store::DocumentId;

use super::errors::{RestError, RestResult};
use super::registry::{LESSONS, ORDERS};
use super::response::Ack;
use super::routes::{
    create_document, delete_document, list_documents, update_document, AppState,
};

// ==================
// Typed Schemas
// ==================

/// A lesson offered for sale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// An order referencing a lesson by identifier
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub lesson_id: String,
    pub quantity: u32,
    pub total: f64,
    pub customer_name: String,
    pub customer_email: String,
}

// ==================
// Router
// ==================

/// Build the `/lessons` and `/orders` alias router
pub fn resource_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/lessons", get(list_lessons).post(create_lesson))
        .route("/lessons/{id}", axum::routing::put(update_lesson).delete(delete_lesson))
        .route("/orders", get(list_orders).post(create_order))
        .route("/orders/{id}", axum::routing::put(update_order).delete(delete_order))
        .with_state(state)
}

// ==================
// Lesson Handlers
// ==================

async fn list_lessons(State(state): State<Arc<AppState>>) -> RestResult<Json<Vec<Value>>> {
    Ok(Json(list_documents(&state, LESSONS)?))
}

/// Create a lesson after validating the typed schema
///
/// The original body is stored, not a re-serialization of the typed struct,
/// so caller-supplied extra fields and number formatting survive.
async fn create_lesson(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> RestResult<(StatusCode, Json<Value>)> {
    serde_json::from_value::<Lesson>(body.clone())
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;

    let stored = create_document(&state, LESSONS, body)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_lesson(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> RestResult<Json<Ack>> {
    Ok(Json(update_document(&state, LESSONS, &id, patch)?))
}

async fn delete_lesson(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> RestResult<Json<Ack>> {
    Ok(Json(delete_document(&state, LESSONS, &id)?))
}

// ==================
// Order Handlers
// ==================

async fn list_orders(State(state): State<Arc<AppState>>) -> RestResult<Json<Vec<Value>>> {
    Ok(Json(list_documents(&state, ORDERS)?))
}

/// Create an order after validating the typed schema
///
/// The referenced lesson id is checked for format only; whether the lesson
/// exists is not validated.
async fn create_order(
    State(state): State<Arc<AppState>>,
    Json(body): Json<Value>,
) -> RestResult<(StatusCode, Json<Value>)> {
    let order = serde_json::from_value::<Order>(body.clone())
        .map_err(|e| RestError::InvalidBody(e.to_string()))?;
    DocumentId::parse(&order.lesson_id)?;

    let stored = create_document(&state, ORDERS, body)?;
    Ok((StatusCode::CREATED, Json(stored)))
}

async fn update_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(patch): Json<Value>,
) -> RestResult<Json<Ack>> {
    Ok(Json(update_document(&state, ORDERS, &id, patch)?))
}

async fn delete_order(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> RestResult<Json<Ack>> {
    Ok(Json(delete_document(&state, ORDERS, &id)?))
}
