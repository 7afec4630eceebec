//! Catalog lookup endpoints, thin wrappers over the Rebrickable client.

use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{LegoSet, Part, SetPart};
use crate::AppState;

/// Part search query parameters.
#[derive(Debug, Deserialize)]
pub struct PartSearchQuery {
    /// Free-text search string.
    pub search: String,
}

/// GET /api/sets/:set_num - Look up set metadata.
pub async fn get_set(
    State(state): State<AppState>,
    Path(set_num): Path<String>,
) -> ApiResult<LegoSet> {
    let set = state.catalog.get_set(&set_num).await?;
    success(set)
}

/// GET /api/sets/:set_num/parts - Fetch the full parts inventory of a set.
pub async fn get_set_parts(
    State(state): State<AppState>,
    Path(set_num): Path<String>,
) -> ApiResult<Vec<SetPart>> {
    let parts = state.catalog.get_set_parts(&set_num).await?;
    success(parts)
}

/// GET /api/parts/:part_num - Look up a part by LEGO ID.
pub async fn get_part(
    State(state): State<AppState>,
    Path(part_num): Path<String>,
) -> ApiResult<Part> {
    let part = state.catalog.get_part(&part_num).await?;
    success(part)
}

/// GET /api/parts?search=... - Free-text part search.
pub async fn search_parts(
    State(state): State<AppState>,
    Query(params): Query<PartSearchQuery>,
) -> ApiResult<Vec<Part>> {
    let parts = state.catalog.search_parts(&params.search).await?;
    success(parts)
}
