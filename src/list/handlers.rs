//! REST API handlers for shopping list operations
//!
//! Each endpoint translates an HTTP request into one store call on the
//! addressed list and maps "not found" / "invalid order" onto status codes.

use super::{models::*, state::SharedState};
use crate::error::ApiError;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};

/// Creates routes for list-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/lists/:list_id/items", get(list_items).post(add_item))
        .route(
            "/lists/:list_id/items/:id",
            get(get_item).put(update_item).delete(delete_item),
        )
        .route("/lists/:list_id/items/:id/toggle", post(toggle_purchased))
        .route("/lists/:list_id/clear_purchased", post(clear_purchased))
        .route("/lists/:list_id/order", put(reorder))
}

/// Endpoint: GET /lists/:list_id/items?q=
/// Returns the whole list, or only the matching items when `q` is given.
async fn list_items(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
    Query(query): Query<SearchInput>,
) -> Json<Vec<ShoppingItem>> {
    let items: Vec<ShoppingItem> = state
        .read_list(&list_id, |list| {
            list.search(query.q.as_deref()).into_iter().cloned().collect()
        })
        .unwrap_or_default();
    tracing::debug!(%list_id, q = ?query.q, hits = items.len(), "listed items");
    Json(items)
}

/// Endpoint: POST /lists/:list_id/items
async fn add_item(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
    Json(input): Json<AddItemInput>,
) -> (StatusCode, Json<ShoppingItem>) {
    let item = state.write_list(&list_id, |list| {
        list.add(input.name, input.quantity, input.notes).clone()
    });
    tracing::info!(%list_id, item_id = %item.id, name = %item.name, "item added");
    (StatusCode::CREATED, Json(item))
}

/// Endpoint: GET /lists/:list_id/items/:id
async fn get_item(
    State(state): State<SharedState>,
    Path((list_id, id)): Path<(String, String)>,
) -> Result<Json<ShoppingItem>, ApiError> {
    state
        .read_list(&list_id, |list| list.get_by_id(&id).cloned())
        .flatten()
        .map(Json)
        .ok_or(ApiError::NotFound(id))
}

/// Endpoint: PUT /lists/:list_id/items/:id
/// Replaces name, quantity and notes. The purchased flag is left alone.
async fn update_item(
    State(state): State<SharedState>,
    Path((list_id, id)): Path<(String, String)>,
    Json(input): Json<UpdateItemInput>,
) -> Result<Json<ShoppingItem>, ApiError> {
    let item = state
        .modify_list(&list_id, |list| {
            list.update(&id, input.name, input.quantity, input.notes)
                .cloned()
        })
        .flatten()
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    tracing::info!(%list_id, item_id = %id, "item updated");
    Ok(Json(item))
}

/// Endpoint: DELETE /lists/:list_id/items/:id
async fn delete_item(
    State(state): State<SharedState>,
    Path((list_id, id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let deleted = state
        .modify_list(&list_id, |list| list.delete(&id))
        .unwrap_or(false);
    if !deleted {
        return Err(ApiError::NotFound(id));
    }
    tracing::info!(%list_id, item_id = %id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Endpoint: POST /lists/:list_id/items/:id/toggle
async fn toggle_purchased(
    State(state): State<SharedState>,
    Path((list_id, id)): Path<(String, String)>,
) -> Result<Json<ShoppingItem>, ApiError> {
    let item = state
        .modify_list(&list_id, |list| {
            if list.toggle_purchased(&id) {
                list.get_by_id(&id).cloned()
            } else {
                None
            }
        })
        .flatten()
        .ok_or_else(|| ApiError::NotFound(id.clone()))?;
    tracing::info!(%list_id, item_id = %id, purchased = item.is_purchased, "item toggled");
    Ok(Json(item))
}

/// Endpoint: POST /lists/:list_id/clear_purchased
async fn clear_purchased(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
) -> Json<ClearPurchasedResponse> {
    let response = state.modify_list_or_empty(&list_id, |list| {
        let removed = list.clear_purchased();
        ClearPurchasedResponse {
            removed,
            items: list.get_all().to_vec(),
        }
    });
    tracing::info!(%list_id, removed = response.removed, "purchased items cleared");
    Json(response)
}

/// Endpoint: PUT /lists/:list_id/order
/// Body must list every current id exactly once.
async fn reorder(
    State(state): State<SharedState>,
    Path(list_id): Path<String>,
    Json(input): Json<ReorderInput>,
) -> Result<Json<Vec<ShoppingItem>>, ApiError> {
    let items = state.modify_list_or_empty(&list_id, |list| {
        list.reorder(&input.ids).map(|()| list.get_all().to_vec())
    })?;
    tracing::info!(%list_id, count = items.len(), "list reordered");
    Ok(Json(items))
}
