//! Capture endpoints: OCR candidate extraction and QR set-number extraction.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use super::{success, ApiResult};
use crate::capture;
use crate::errors::AppError;
use crate::models::Part;
use crate::AppState;

/// Request body carrying OCR-decoded text.
#[derive(Debug, Deserialize)]
pub struct OcrRequest {
    pub text: String,
}

/// Candidate part numbers found in OCR text.
#[derive(Debug, Serialize)]
pub struct OcrResponse {
    pub candidates: Vec<String>,
}

/// Request body carrying decoded QR payload text.
#[derive(Debug, Deserialize)]
pub struct QrRequest {
    pub data: String,
}

/// Extracted set number, if any pattern matched.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QrResponse {
    pub set_num: Option<String>,
}

/// POST /api/capture/ocr - Extract candidate part numbers from OCR text.
pub async fn capture_ocr(Json(request): Json<OcrRequest>) -> ApiResult<OcrResponse> {
    let candidates = capture::extract_part_numbers(&request.text);
    success(OcrResponse { candidates })
}

/// POST /api/capture/ocr/resolve - Extract candidates and resolve them
/// against the catalog.
///
/// OCR false positives come back from the catalog as not-found and are
/// silently dropped; any other upstream failure aborts the whole resolve.
pub async fn capture_ocr_resolve(
    State(state): State<AppState>,
    Json(request): Json<OcrRequest>,
) -> ApiResult<Vec<Part>> {
    let candidates = capture::extract_part_numbers(&request.text);

    let mut parts = Vec::new();
    for candidate in &candidates {
        match state.catalog.get_part(candidate).await {
            Ok(part) => parts.push(part),
            Err(AppError::NotFound(_)) => {
                tracing::debug!(candidate = %candidate, "Dropping unresolved OCR candidate");
            }
            Err(e) => return Err(e),
        }
    }

    success(parts)
}

/// POST /api/capture/qr - Extract a set number from decoded QR text.
pub async fn capture_qr(Json(request): Json<QrRequest>) -> ApiResult<QrResponse> {
    let set_num = capture::extract_set_number(&request.data);
    success(QrResponse { set_num })
}
