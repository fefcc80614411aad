pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::clinics::handlers as clinic_handlers;
use crate::diagnosis::handlers as diagnosis_handlers;
use crate::recommend::handlers as recommend_handlers;
use crate::records::handlers as record_handlers;
use crate::reference::handlers as reference_handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Health log
        .route(
            "/api/v1/records",
            post(record_handlers::handle_create_record)
                .get(record_handlers::handle_list_records)
                .delete(record_handlers::handle_clear_records),
        )
        // Diagnosis
        .route(
            "/api/v1/diagnosis",
            get(diagnosis_handlers::handle_diagnosis),
        )
        // Clinic lookup
        .route(
            "/api/v1/clinics/search",
            get(clinic_handlers::handle_clinic_search),
        )
        // Reference content
        .route("/api/v1/foods", get(reference_handlers::handle_list_foods))
        .route(
            "/api/v1/foods/:name",
            get(reference_handlers::handle_food_lookup),
        )
        .route("/api/v1/guides", get(reference_handlers::handle_list_guides))
        .route(
            "/api/v1/guides/:topic",
            get(reference_handlers::handle_get_guide),
        )
        .route(
            "/api/v1/emergency",
            get(reference_handlers::handle_list_emergency),
        )
        .route(
            "/api/v1/emergency/:situation",
            get(reference_handlers::handle_get_emergency),
        )
        // Recommendations
        .route(
            "/api/v1/recommendations",
            get(recommend_handlers::handle_recommendations),
        )
        .with_state(state)
}
