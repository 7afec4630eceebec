//! Item API endpoints: add, found-count updates, removal, and set import.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{
    AddItemRequest, BrickItem, BrickList, Color, ImportSetRequest, UpdateFoundRequest,
};
use crate::AppState;

/// POST /api/lists/:id/items - Add a part to a list.
///
/// A missing color falls back to the unknown sentinel; a non-positive
/// quantity is defaulted to 1 rather than rejected. Adding an existing
/// (part, color) pair accumulates quantity on the existing item.
pub async fn add_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<AddItemRequest>,
) -> ApiResult<BrickList> {
    let item = BrickItem {
        id: uuid::Uuid::new_v4().to_string(),
        part: request.part,
        color: request.color.unwrap_or_else(Color::unknown),
        quantity: request.quantity.max(1),
        found: 0,
    };

    match state.repo.add_item(&id, item).await? {
        Some(list) => success(list),
        None => Err(AppError::NotFound(format!("List {} not found", id))),
    }
}

/// PUT /api/lists/:id/items/:item_id/found - Set an item's found count.
///
/// Out-of-range values are clamped into `[0, quantity]`; an unknown item ID
/// leaves the list untouched.
pub async fn update_found(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
    Json(request): Json<UpdateFoundRequest>,
) -> ApiResult<BrickList> {
    match state.repo.update_found(&id, &item_id, request.found).await? {
        Some(list) => success(list),
        None => Err(AppError::NotFound(format!("List {} not found", id))),
    }
}

/// DELETE /api/lists/:id/items/:item_id - Remove an item from a list.
///
/// An unknown item ID is a no-op.
pub async fn remove_item(
    State(state): State<AppState>,
    Path((id, item_id)): Path<(String, String)>,
) -> ApiResult<BrickList> {
    match state.repo.remove_item(&id, &item_id).await? {
        Some(list) => success(list),
        None => Err(AppError::NotFound(format!("List {} not found", id))),
    }
}

/// POST /api/lists/:id/import - Import a full set inventory into a list.
///
/// Every inventory line becomes an item (found 0), with the usual merge rule
/// applied per line. Stamps the list's set number if it has none.
pub async fn import_set(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ImportSetRequest>,
) -> ApiResult<BrickList> {
    // Reject unknown lists before hitting the catalog; the commit below
    // re-checks under the write lock
    if state.repo.get(&id).await?.is_none() {
        return Err(AppError::NotFound(format!("List {} not found", id)));
    }

    let set_parts = state.catalog.get_set_parts(&request.set_num).await?;
    tracing::info!(
        list_id = %id,
        set_num = %request.set_num,
        parts = set_parts.len(),
        "Importing set inventory"
    );

    let items: Vec<BrickItem> = set_parts
        .into_iter()
        .map(|sp| BrickItem {
            id: uuid::Uuid::new_v4().to_string(),
            part: sp.part,
            color: sp.color,
            quantity: sp.quantity,
            found: 0,
        })
        .collect();

    // Single locked read-modify-write: the list state is re-read at commit
    // time, so items added while the paginated fetch was in flight survive
    match state
        .repo
        .add_items(&id, items, Some(request.set_num.clone()))
        .await?
    {
        Some(list) => success(list),
        None => Err(AppError::NotFound(format!("List {} not found", id))),
    }
}
