//! Reviewer roster and per-reviewer tasting listing.

use axum::extract::{Path, State};
use axum::Json;

use dramlog_core::model::{ExpertTasting, Reviewer};

use super::run_blocking;
use crate::error::ApiError;
use crate::AppState;

/// GET /api/reviewers
///
/// Profiles in roster order.
pub async fn list_reviewers(
    State(state): State<AppState>,
) -> Result<Json<Vec<Reviewer>>, ApiError> {
    let roster = run_blocking(&state.store, |store| store.load_all_reviewers()).await?;
    Ok(Json(roster))
}

/// GET /api/reviewers/:id/tastings
///
/// Expert tasting rows for one contributor. An unknown id is simply
/// an empty list.
pub async fn reviewer_tastings(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ExpertTasting>>, ApiError> {
    let rows = run_blocking(&state.store, move |store| {
        store.expert_tastings_by_contributor(&id)
    })
    .await?;
    Ok(Json(rows))
}
