pub mod health;
pub mod landing;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::advisory::handlers;
use crate::errors::AppError;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing::index_handler))
        .route("/api/health", get(health::health_handler))
        .route("/api/analyze", post(handlers::handle_analyze))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
}

/// Renders a handler panic as a `Server error` 500 instead of dropping the connection.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unexpected panic".to_string()
    };

    AppError::Internal(anyhow::anyhow!(detail)).into_response()
}
