//! Wildfire AI Dashboard Server
//!
//! JSON backend for the severity prediction dashboard.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                   WILDFIRE AI DASHBOARD                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌───────────┐  ┌─────────────────────────┐ │
//! │  │  API      │  │  Presets  │  │  Prediction Pipeline    │ │
//! │  │  (Axum)   │  │  + Guide  │  │  (blocking pool)        │ │
//! │  └─────┬─────┘  └─────┬─────┘  └────────────┬────────────┘ │
//! │        └──────────────┼──────────────────────┘              │
//! │                       ▼                                     │
//! │        ┌──────────────────────────────┐                    │
//! │        │ best_fire_model.onnx +       │                    │
//! │        │ scaler.json (loaded once)    │                    │
//! │        └──────────────────────────────┘                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod models;
mod handlers;
mod error;


use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    http::HeaderValue,
    routing::{get, post},
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wildfire_core::PredictionPipeline;

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "wildfire_dashboard=debug,wildfire_core=info,tower_http=debug".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Wildfire AI Dashboard starting ({})...", config.environment);

    // Load model artifacts once; failure disables prediction, not the server
    let artifacts = config.artifacts.clone();
    let pipeline = tokio::task::spawn_blocking(move || PredictionPipeline::load(&artifacts))
        .await
        .context("model loading task panicked")?;

    if pipeline.is_ready() {
        tracing::info!("✅ Model Ready");
    } else {
        tracing::error!("❌ Model Error - prediction endpoints will return 503");
    }

    // Build application state
    let state = AppState {
        pipeline: Arc::new(pipeline),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<PredictionPipeline>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(handlers::health::check))

        // Model
        .route("/api/v1/model/status", get(handlers::model::status))

        // Presets
        .route("/api/v1/presets", get(handlers::presets::list))
        .route("/api/v1/presets/:key", get(handlers::presets::get))
        .route("/api/v1/presets/:key/predict", post(handlers::presets::predict))

        // Prediction
        .route("/api/v1/predict", post(handlers::predict::predict))

        // Severity guide
        .route("/api/v1/severity/guide", get(handlers::severity::guide));

    let cors = if state.config.is_production() {
        let origins: Vec<HeaderValue> = state.config.allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    api_routes
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
