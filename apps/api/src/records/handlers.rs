use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::health_log::HealthLogEntry;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SessionQuery {
    pub session_id: Uuid,
}

#[derive(Deserialize)]
pub struct RecordListQuery {
    pub session_id: Uuid,
    /// When set, only the most recent `limit` entries are returned.
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct RecordCreatedResponse {
    pub total_records: usize,
}

#[derive(Serialize)]
pub struct RecordListResponse {
    pub records: Vec<HealthLogEntry>,
    pub total_records: usize,
}

/// POST /api/v1/records
/// Appends one immutable entry to the session's log. The closed enum
/// vocabularies are enforced by deserialization before this runs.
pub async fn handle_create_record(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
    Json(entry): Json<HealthLogEntry>,
) -> Result<(StatusCode, Json<RecordCreatedResponse>), AppError> {
    let total_records = state.store.append(params.session_id, entry);
    tracing::debug!(
        "Recorded entry #{total_records} for session {}",
        params.session_id
    );
    Ok((StatusCode::CREATED, Json(RecordCreatedResponse { total_records })))
}

/// GET /api/v1/records
pub async fn handle_list_records(
    State(state): State<AppState>,
    Query(params): Query<RecordListQuery>,
) -> Result<Json<RecordListResponse>, AppError> {
    if params.limit == Some(0) {
        return Err(AppError::Validation(
            "limit must be at least 1 when provided".to_string(),
        ));
    }

    let total_records = state.store.len(params.session_id);
    let records = match params.limit {
        Some(n) => state.store.recent(params.session_id, n),
        None => state.store.all(params.session_id),
    };
    Ok(Json(RecordListResponse {
        records,
        total_records,
    }))
}

/// DELETE /api/v1/records
/// Clears the whole session log (session end). Idempotent.
pub async fn handle_clear_records(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<StatusCode, AppError> {
    state.store.clear(params.session_id);
    Ok(StatusCode::NO_CONTENT)
}
