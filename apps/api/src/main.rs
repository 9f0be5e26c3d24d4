mod advisory;
mod config;
mod errors;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advisory::advisor::CropAdvisor;
use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Farm Advisor API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client once; absent credentials leave the advisor unconfigured
    let advisor = match &config.gemini_api_key {
        Some(api_key) => {
            let client = GeminiClient::new(api_key.clone())?;
            info!("Gemini client initialized (model: {})", llm_client::MODEL);
            CropAdvisor::new(Arc::new(client))
        }
        None => {
            warn!("GEMINI_API_KEY not found in environment variables");
            CropAdvisor::unconfigured()
        }
    };
    info!("Gemini API configured: {}", config.gemini_configured());

    let state = AppState { advisor };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
