//! Brick list API endpoints.

use axum::{
    extract::{Path, State},
    Json,
};

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{BrickList, CreateListRequest};
use crate::AppState;

/// GET /api/lists - List all brick lists, most recently updated first.
pub async fn list_lists(State(state): State<AppState>) -> ApiResult<Vec<BrickList>> {
    let mut lists = state.repo.list_all().await?;
    lists.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    success(lists)
}

/// POST /api/lists - Create a new brick list.
pub async fn create_list(
    State(state): State<AppState>,
    Json(request): Json<CreateListRequest>,
) -> ApiResult<BrickList> {
    // The store itself does not validate names; this is the gate
    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".to_string()));
    }

    let list = state.repo.create(name, request.set_num).await?;
    success(list)
}

/// GET /api/lists/:id - Get a single brick list.
pub async fn get_list(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<BrickList> {
    match state.repo.get(&id).await? {
        Some(list) => success(list),
        None => Err(AppError::NotFound(format!("List {} not found", id))),
    }
}

/// DELETE /api/lists/:id - Delete a brick list.
///
/// Deleting an unknown ID is a no-op, not an error.
pub async fn delete_list(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<()> {
    state.repo.delete(&id).await?;
    success(())
}
