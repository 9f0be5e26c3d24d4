use crate::advisory::advisor::CropAdvisor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    /// Carries the Gemini client when a credential was configured.
    pub advisor: CropAdvisor,
}
