//! # Item Handlers
//!
//! The five CRUD handlers over the shared inventory.
//!
//! Ids are opaque strings: path parameters are never parsed, so a
//! malformed id falls through to a plain 404 rather than a 400.

use crate::api::error::ApiError;
use crate::api::AppState;
use almacen_core::{Item, ItemDraft, ItemId, ItemStore};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

/// `POST /items/` — create a new item with a freshly minted id.
pub async fn create_item(
    State(state): State<AppState>,
    Json(draft): Json<ItemDraft>,
) -> (StatusCode, Json<Item>) {
    let item = state.inventory.write().await.create(draft);
    tracing::info!(id = %item.id, name = %item.name, "item created");
    (StatusCode::CREATED, Json(item))
}

/// `GET /items/` — list every stored item.
pub async fn list_items(State(state): State<AppState>) -> Json<Vec<Item>> {
    let items = state.inventory.read().await.list();
    Json(items)
}

/// `GET /items/{item_id}` — look up one item by id.
pub async fn get_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let id = ItemId::from(item_id);
    state
        .inventory
        .read()
        .await
        .get(&id)
        .cloned()
        .map(Json)
        .ok_or(ApiError::ItemNotFound)
}

/// `PUT /items/{item_id}` — replace every field of an existing item.
///
/// Fields omitted from the body are cleared, not merged: the draft is
/// the complete new state.
pub async fn update_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
    Json(draft): Json<ItemDraft>,
) -> Result<Json<Item>, ApiError> {
    let id = ItemId::from(item_id);
    let item = state.inventory.write().await.update(&id, draft)?;
    tracing::info!(id = %item.id, "item updated");
    Ok(Json(item))
}

/// `DELETE /items/{item_id}` — remove an item, responding 204 on success.
pub async fn delete_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = ItemId::from(item_id);
    let removed = state.inventory.write().await.remove(&id)?;
    tracing::info!(id = %removed.id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
