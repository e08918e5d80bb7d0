//! POST /api/v1/compare — the presentation boundary of the referee core.
//!
//! Accepts the `(user_name, career_a, career_b)` triple, enforces the input
//! preconditions, and returns the comparison in its dictionary form. Input
//! rejection is the only failure this endpoint can produce; the comparison
//! itself always succeeds.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::errors::AppError;
use crate::models::input::validate_compare_input;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub user_name: String,
    pub career_a: String,
    pub career_b: String,
}

#[derive(Debug, Serialize)]
pub struct CompareResponse {
    pub user_name: String,
    pub career_a: String,
    pub career_b: String,
    /// Comparison record with keys `career_a`, `career_b`, `decision_guide`.
    pub comparison: Value,
}

pub async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Result<Json<CompareResponse>, AppError> {
    validate_compare_input(&request.user_name, &request.career_a, &request.career_b)
        .map_err(AppError::Validation)?;

    let user_name = request.user_name.trim().to_string();
    let career_a = request.career_a.trim().to_string();
    let career_b = request.career_b.trim().to_string();

    info!("Comparing '{career_a}' vs '{career_b}' for {user_name}");
    let comparison = state.referee.compare(&career_a, &career_b).await;

    Ok(Json(CompareResponse {
        user_name,
        career_a,
        career_b,
        comparison: comparison.to_value(),
    }))
}
