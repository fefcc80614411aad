use axum::{
    extract::{Query, State},
    Json,
};
use serde::Serialize;

use crate::diagnosis::{DiagnosisFinding, WINDOW_SIZE};
use crate::errors::AppError;
use crate::records::handlers::SessionQuery;
use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisStatus {
    /// Store is empty; the engine was not run.
    InsufficientData,
    /// Engine ran and no rule fired.
    AllClear,
    /// One or more rules fired.
    Findings,
}

#[derive(Serialize)]
pub struct DiagnosisResponse {
    pub status: DiagnosisStatus,
    pub message: String,
    pub findings: Vec<DiagnosisFinding>,
    /// How many entries the engine examined (0 to 7).
    pub records_examined: usize,
}

/// GET /api/v1/diagnosis
/// Runs the rule engine over the session's last-7 window. An empty store is
/// answered with an invitation to log first, never with an error.
pub async fn handle_diagnosis(
    State(state): State<AppState>,
    Query(params): Query<SessionQuery>,
) -> Result<Json<DiagnosisResponse>, AppError> {
    if state.store.is_empty(params.session_id) {
        return Ok(Json(DiagnosisResponse {
            status: DiagnosisStatus::InsufficientData,
            message: "No health records yet. Add at least one entry before requesting \
                      a diagnosis."
                .to_string(),
            findings: vec![],
            records_examined: 0,
        }));
    }

    let window = state.store.recent(params.session_id, WINDOW_SIZE);
    let records_examined = window.len();
    let findings = state.engine.evaluate(&window);

    tracing::debug!(
        "Diagnosis for session {}: {} finding(s) over {} record(s)",
        params.session_id,
        findings.len(),
        records_examined
    );

    let (status, message) = if findings.is_empty() {
        (
            DiagnosisStatus::AllClear,
            "No clear risk signals in the recent records. Small changes can still add \
             up, so keep logging regularly."
                .to_string(),
        )
    } else {
        (
            DiagnosisStatus::Findings,
            "Some recent changes deserve attention.".to_string(),
        )
    };

    Ok(Json(DiagnosisResponse {
        status,
        message,
        findings,
        records_examined,
    }))
}
