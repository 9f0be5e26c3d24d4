use axum::{extract::State, Json};
use chrono::Utc;
use serde::Serialize;

use crate::advisory::models::iso_timestamp;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub gemini_configured: bool,
    pub timestamp: String,
}

/// GET /api/health
/// Always 200; reports whether a Gemini credential was configured at startup.
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        gemini_configured: state.advisor.is_configured(),
        timestamp: iso_timestamp(&Utc::now()),
    })
}
