//! Bottle listing and detail endpoints.

use axum::extract::{Path, State};
use axum::Json;

use dramlog_core::model::{BottleDetail, BottleSummary};

use super::run_blocking;
use crate::error::ApiError;
use crate::AppState;

/// GET /api/bottles
///
/// Every bottle with aggregate statistics, listing order already
/// applied (rated count, tasting count, name).
pub async fn list_bottles(
    State(state): State<AppState>,
) -> Result<Json<Vec<BottleSummary>>, ApiError> {
    let summaries = run_blocking(&state.store, |store| store.load_bottle_summaries()).await?;
    Ok(Json(summaries))
}

/// GET /api/bottles/:slug
///
/// Detail view for one slug. Unknown slugs still return 200 with a
/// placeholder identity and no tastings; absence is a presentation
/// concern, not an HTTP error.
pub async fn bottle_detail(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BottleDetail>, ApiError> {
    let detail = run_blocking(&state.store, move |store| store.load_bottle_detail(&slug)).await?;
    Ok(Json(detail))
}
