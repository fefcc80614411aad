use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::clinics::{Clinic, GeoPoint};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ClinicSearchQuery {
    pub query: String,
}

#[derive(Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum ClinicSearchStatus {
    /// The geocoder had no match for the query text.
    AddressNotFound,
    /// Geocoding worked but no clinic exists within the radius.
    NoResults,
    Results,
}

#[derive(Serialize)]
pub struct ClinicSearchResponse {
    pub status: ClinicSearchStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<GeoPoint>,
    pub clinics: Vec<Clinic>,
}

/// GET /api/v1/clinics/search
/// Geocodes the query, then lists veterinary clinics around the result.
/// Misses are ordinary responses; only transport failures become errors.
pub async fn handle_clinic_search(
    State(state): State<AppState>,
    Query(params): Query<ClinicSearchQuery>,
) -> Result<Json<ClinicSearchResponse>, AppError> {
    let query = params.query.trim();
    if query.is_empty() {
        return Err(AppError::Validation(
            "Enter an address or neighborhood to search near.".to_string(),
        ));
    }

    let center = state.clinics.locate(query).await.map_err(|e| {
        tracing::warn!("Geocoding failed for {query:?}: {e}");
        AppError::Lookup("Something went wrong while looking up that address.".to_string())
    })?;

    let Some(center) = center else {
        return Ok(Json(ClinicSearchResponse {
            status: ClinicSearchStatus::AddressNotFound,
            message: "Could not find that address. Try a broader area name, like a \
                      city district or neighborhood."
                .to_string(),
            center: None,
            clinics: vec![],
        }));
    };

    let clinics = state.clinics.nearby(center).await.map_err(|e| {
        tracing::warn!("Clinic search failed around {center:?}: {e}");
        AppError::Lookup("Something went wrong while fetching nearby clinics.".to_string())
    })?;

    if clinics.is_empty() {
        let km = state.config.clinic_radius_m as f64 / 1000.0;
        return Ok(Json(ClinicSearchResponse {
            status: ClinicSearchStatus::NoResults,
            message: format!("No veterinary clinics registered within {km:.0} km of that location."),
            center: Some(center),
            clinics: vec![],
        }));
    }

    Ok(Json(ClinicSearchResponse {
        status: ClinicSearchStatus::Results,
        message: format!("Found {} veterinary clinic(s) nearby.", clinics.len()),
        center: Some(center),
        clinics,
    }))
}
