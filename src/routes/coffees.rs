//! CRUD handlers for the coffee collection
//!
//! Each handler is a single-step pass-through: parse the path identifier if
//! there is one, make exactly one store call, serialize the result.

use crate::error::{ServerError, ServerResult};
use crate::state::ServerState;
use crate::store::{CoffeeDocument, UpdateAck};
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use mongodb::bson::oid::ObjectId;
use serde_json::Value;
use std::sync::Arc;

/// Fields a PUT may touch. Anything else in the payload is dropped silently,
/// so `_id` can never be overwritten through an update.
const COFFEE_FIELDS: [&str; 7] = [
    "name", "chef", "supplier", "taste", "price", "details", "photo",
];

fn parse_id(id: &str) -> ServerResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ServerError::InvalidId(id.to_string()))
}

/// List every coffee document, in the store's natural order
pub async fn list_coffees(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<impl IntoResponse> {
    let coffees = state.store.find_all().await?;
    Ok(Json(coffees))
}

/// Fetch a single coffee; absent documents serialize as JSON `null`
pub async fn get_coffee(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let coffee = state.store.find_by_id(id).await?;
    Ok(Json(coffee.unwrap_or(Value::Null)))
}

/// Insert the request body verbatim as a new document
pub async fn create_coffee(
    State(state): State<Arc<ServerState>>,
    Json(body): Json<CoffeeDocument>,
) -> ServerResult<impl IntoResponse> {
    let ack = state.store.insert_one(body).await?;
    Ok(Json(ack))
}

/// Merge the allowlisted fields onto the matching document, creating it when
/// no document matches (upsert)
pub async fn update_coffee(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
    Json(body): Json<CoffeeDocument>,
) -> ServerResult<impl IntoResponse> {
    let id = parse_id(&id)?;

    let mut fields = CoffeeDocument::new();
    for name in COFFEE_FIELDS {
        if let Some(value) = body.get(name) {
            fields.insert(name.to_string(), value.clone());
        }
    }

    // MongoDB rejects an empty `$set`, so a payload with no allowlisted
    // fields never reaches the store. Report whether the target exists and
    // leave the collection untouched.
    if fields.is_empty() {
        let matched = state.store.find_by_id(id).await?.is_some();
        return Ok(Json(UpdateAck {
            acknowledged: true,
            matched_count: u64::from(matched),
            modified_count: 0,
            upserted_id: None,
        }));
    }

    let ack = state.store.upsert_one(id, fields).await?;
    Ok(Json(ack))
}

/// Remove the matching document
pub async fn delete_coffee(
    State(state): State<Arc<ServerState>>,
    Path(id): Path<String>,
) -> ServerResult<impl IntoResponse> {
    let id = parse_id(&id)?;
    let ack = state.store.delete_one(id).await?;
    Ok(Json(ack))
}
