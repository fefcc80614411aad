use axum::{extract::Path, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::reference::emergency::{self, EmergencySituation};
use crate::reference::food::{self, FeedingVerdict, FoodEntry, FOOD_TABLE};
use crate::reference::guides::{self, GuideTopic};

#[derive(Serialize)]
pub struct FoodListResponse {
    pub foods: &'static [FoodEntry],
}

#[derive(Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "snake_case")]
pub enum FoodLookupStatus {
    Found,
    /// The name is not in the table; not an error.
    NoData,
}

#[derive(Serialize)]
pub struct FoodLookupResponse {
    pub status: FoodLookupStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub food: Option<&'static FoodEntry>,
}

/// GET /api/v1/foods
pub async fn handle_list_foods() -> Json<FoodListResponse> {
    Json(FoodListResponse { foods: FOOD_TABLE })
}

/// GET /api/v1/foods/:name
/// Exact-name lookup. Unknown names get a non-alarming "no data" payload.
pub async fn handle_food_lookup(Path(name): Path<String>) -> Json<FoodLookupResponse> {
    match food::lookup(&name) {
        Some(entry) => {
            let message = match entry.verdict {
                FeedingVerdict::Forbidden => {
                    format!("{}: never feed this to a cat.", entry.name)
                }
                FeedingVerdict::Allowed => {
                    format!("{}: {}.", entry.name, entry.guidance.unwrap_or("allowed"))
                }
            };
            Json(FoodLookupResponse {
                status: FoodLookupStatus::Found,
                message,
                food: Some(entry),
            })
        }
        None => Json(FoodLookupResponse {
            status: FoodLookupStatus::NoData,
            message: format!(
                "No data for '{}'. Double-check with a vet or a trusted source before feeding.",
                name.trim()
            ),
            food: None,
        }),
    }
}

#[derive(Serialize)]
pub struct TopicSummary {
    pub slug: &'static str,
    pub title: &'static str,
}

#[derive(Serialize)]
pub struct GuideListResponse {
    pub topics: Vec<TopicSummary>,
}

/// GET /api/v1/guides
pub async fn handle_list_guides() -> Json<GuideListResponse> {
    let topics = guides::GUIDE_TOPICS
        .iter()
        .map(|t| TopicSummary {
            slug: t.slug,
            title: t.title,
        })
        .collect();
    Json(GuideListResponse { topics })
}

/// GET /api/v1/guides/:topic
pub async fn handle_get_guide(
    Path(topic): Path<String>,
) -> Result<Json<&'static GuideTopic>, AppError> {
    guides::find(&topic)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Guide topic '{topic}' does not exist")))
}

#[derive(Serialize)]
pub struct EmergencyListResponse {
    pub situations: Vec<TopicSummary>,
}

/// GET /api/v1/emergency
pub async fn handle_list_emergency() -> Json<EmergencyListResponse> {
    let situations = emergency::EMERGENCY_SITUATIONS
        .iter()
        .map(|s| TopicSummary {
            slug: s.slug,
            title: s.title,
        })
        .collect();
    Json(EmergencyListResponse { situations })
}

/// GET /api/v1/emergency/:situation
pub async fn handle_get_emergency(
    Path(situation): Path<String>,
) -> Result<Json<&'static EmergencySituation>, AppError> {
    emergency::find(&situation)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Emergency situation '{situation}' does not exist")))
}
