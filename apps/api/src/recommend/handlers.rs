use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::recommend::{classify, describe, suggestions, CareState};
use crate::records::handlers::SessionQuery;
use crate::state::AppState;

#[derive(Serialize)]
pub struct RecommendationResponse {
    pub care_state: CareState,
    pub summary: &'static str,
    pub suggestions: &'static [&'static str],
}

/// GET /api/v1/recommendations
/// Product-type suggestions from the latest record. An empty session gets
/// baseline suggestions rather than an error.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let latest = state.store.latest(params.session_id);
    let care_state = classify(latest.as_ref());

    Ok(Json(RecommendationResponse {
        care_state,
        summary: describe(care_state),
        suggestions: suggestions(care_state),
    }))
}
