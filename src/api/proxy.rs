//! Credential-injecting proxy for the Rebrickable API.
//!
//! Forwards any sub-path under /api/rebrickable to the upstream catalog
//! host with the secret key attached, so the key never reaches clients.
//! Upstream bodies and status codes pass through verbatim; transport
//! failures map to a 500 with an `{error, details}` envelope.

use axum::{
    extract::{Path, RawQuery, State},
    http::{header, Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::AppState;

/// ANY /api/rebrickable/{*path} - Forward a request to the upstream catalog.
pub async fn proxy_rebrickable(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
    method: Method,
) -> Response {
    let mut upstream_url = format!("{}/{}", state.config.rebrickable_url, path);
    if let Some(query) = &query {
        upstream_url.push('?');
        upstream_url.push_str(query);
    }

    tracing::debug!(
        method = %method,
        url = %upstream_url,
        has_api_key = state.config.rebrickable_api_key.is_some(),
        "Proxying catalog request"
    );

    let upstream_method = reqwest::Method::from_bytes(method.as_str().as_bytes())
        .unwrap_or(reqwest::Method::GET);

    let mut request = state
        .http
        .request(upstream_method, &upstream_url)
        .header("Accept", "application/json");
    if let Some(key) = &state.config.rebrickable_api_key {
        request = request.header("Authorization", format!("key {}", key));
    }

    match request.send().await {
        Ok(response) => {
            let status = StatusCode::from_u16(response.status().as_u16())
                .unwrap_or(StatusCode::BAD_GATEWAY);
            let body = response.bytes().await.unwrap_or_default();

            (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Catalog proxy error: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": "Failed to fetch from Rebrickable API",
                    "details": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}
