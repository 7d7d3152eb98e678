//! Consumer review intake.
//!
//! The only mutating endpoint. Authentication is a shared secret in
//! the `x-admin-token` header, checked before the body is touched so
//! malformed JSON from an unauthenticated caller still gets a 401.

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::Json;
use serde::Serialize;

use dramlog_store::ConsumerReviewPayload;

use super::run_blocking;
use crate::error::ApiError;
use crate::AppState;

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub ok: bool,
    /// Path of the new record, relative to the data root.
    pub written: String,
    /// Global tasting slug of the new record.
    pub slug: String,
}

/// POST /api/admin/consumer-reviews
///
/// 500 when no admin token is configured, 401 on header mismatch, 400
/// with the specific cause for bad payloads, 201 on success.
pub async fn create_consumer_review(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let expected = state
        .admin_token
        .as_deref()
        .ok_or(ApiError::MissingAdminToken)?;
    let presented = headers
        .get(ADMIN_TOKEN_HEADER)
        .and_then(|v| v.to_str().ok());
    if presented != Some(expected) {
        return Err(ApiError::Unauthorized);
    }

    let payload: ConsumerReviewPayload = serde_json::from_slice(&body)
        .map_err(|e| ApiError::BadRequest(format!("invalid JSON: {e}")))?;

    let written = run_blocking(&state.store, move |store| {
        store.write_consumer_review(&payload)
    })
    .await?;

    tracing::info!("wrote consumer review {}", written.written);
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            ok: true,
            written: written.written,
            slug: written.slug,
        }),
    ))
}
