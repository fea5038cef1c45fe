//! Item CRUD handlers.
//!
//! Each handler issues exactly one repository call. Input problems are
//! rejected before the store is reached, and extractor rejections go through
//! `AppError` so every failure body is `{"error": ...}`.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

use itemstore_core::item::{
    attributes_from_body, item_from_body, parse_item_id, Item, ItemKey, UpdateExpression,
};

use crate::{handlers::AppError, state::AppState};

const ITEM_ADDED: &str = "Item added successfully";
const ITEM_UPDATED: &str = "Item updated";
const ITEM_DELETED: &str = "Item deleted successfully";

/// Plain acknowledgement body.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Body returned by the update route.
#[derive(Debug, Serialize)]
pub struct UpdatedItemResponse {
    pub message: &'static str,
    pub item: Item,
}

fn item_key(id: &str, name: String) -> Result<ItemKey, AppError> {
    Ok(ItemKey::new(parse_item_id(id)?, name))
}

/// Create or replace an item (POST /item).
pub async fn create_item(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(body) = body?;
    let item = item_from_body(body)?;

    state.items.put_item(&item).await?;

    tracing::info!(key = %item.key, "Stored item");

    Ok(Json(MessageResponse {
        message: ITEM_ADDED,
    }))
}

/// Get a single item (GET /item/{id}/{name}).
///
/// A missing item is answered with an empty object, not an error.
pub async fn get_item(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Response, AppError> {
    let Path((id, name)) = path?;
    let key = item_key(&id, name)?;

    let response = match state.items.get_item(&key).await? {
        Some(item) => Json(item).into_response(),
        None => {
            tracing::debug!(%key, "Item not found");
            Json(Value::Object(Default::default())).into_response()
        }
    };

    Ok(response)
}

/// List every item (GET /items).
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.items.scan_items().await?;

    tracing::debug!(count = items.len(), "Scanned items");

    Ok(Json(items))
}

/// Partially update an item (PUT /item/{id}/{name}).
pub async fn update_item(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<UpdatedItemResponse>, AppError> {
    let Path((id, name)) = path?;
    let key = item_key(&id, name)?;
    let Json(body) = body?;
    let update = UpdateExpression::build(&attributes_from_body(body)?)?;

    let item = state.items.update_item(&key, &update).await?;

    tracing::info!(%key, fields = update.names.len(), "Updated item");

    Ok(Json(UpdatedItemResponse {
        message: ITEM_UPDATED,
        item,
    }))
}

/// Delete an item (DELETE /item/{id}/{name}).
///
/// Succeeds whether or not the item existed.
pub async fn delete_item(
    State(state): State<AppState>,
    path: Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Path((id, name)) = path?;
    let key = item_key(&id, name)?;

    state.items.delete_item(&key).await?;

    tracing::info!(%key, "Deleted item");

    Ok(Json(MessageResponse {
        message: ITEM_DELETED,
    }))
}
