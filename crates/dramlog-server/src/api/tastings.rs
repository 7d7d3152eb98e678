//! Tasting browse endpoint.

use axum::extract::State;
use axum::Json;

use dramlog_store::TastingEntry;

use super::run_blocking;
use crate::error::ApiError;
use crate::AppState;

/// GET /api/tastings
///
/// All browsable tastings with their global slugs, experts first.
pub async fn list_tastings(
    State(state): State<AppState>,
) -> Result<Json<Vec<TastingEntry>>, ApiError> {
    let entries = run_blocking(&state.store, |store| store.list_all_tastings()).await?;
    Ok(Json(entries))
}
