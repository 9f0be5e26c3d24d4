//! Axum route handlers for the analysis API.

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use bytes::Bytes;
use serde_json::Value;

use crate::advisory::models::AnalyzeRequest;
use crate::errors::AppError;
use crate::state::AppState;

/// POST /api/analyze
///
/// Accepts any content type. An absent body, or a literal `null`, is rejected
/// with 400; `{}` is a valid request with every field unspecified.
/// Success maps to 200, a failed analysis to 500.
pub async fn handle_analyze(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Response, AppError> {
    let request = parse_analyze_body(&body)?;
    let (soil, weather, location) = request.into_records();

    let result = state.advisor.analyze(&soil, &weather, &location).await;

    Ok(result.into_response())
}

fn parse_analyze_body(body: &[u8]) -> Result<AnalyzeRequest, AppError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Err(no_data());
    }

    let value: Value = serde_json::from_slice(body)
        .map_err(|e| AppError::Validation(format!("Invalid request body: {e}")))?;

    match value {
        Value::Null => Err(no_data()),
        Value::Object(_) => serde_json::from_value(value)
            .map_err(|e| AppError::Validation(format!("Invalid request body: {e}"))),
        _ => Err(AppError::Validation(
            "Invalid request body: expected a JSON object".to_string(),
        )),
    }
}

fn no_data() -> AppError {
    AppError::Validation("No data provided".to_string())
}
