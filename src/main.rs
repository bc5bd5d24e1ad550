//! Wildfire Risk Prediction Server
//!
//! Serves a trained wildfire classifier over HTTP:
//!
//! ```text
//! POST /predict  - seven weather features in, {probability, risk_level, top_factors} out
//! POST /weather  - known city in, the same seven features out (external source + defaults)
//! GET  /health   - liveness
//! ```
//!
//! The model loads once at startup (fatal if it cannot) and is shared
//! read-only by every request.

mod config;
mod error;
mod handlers;
mod logic;
mod models;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use logic::model::RiskModel;
use logic::pipeline::RiskPipeline;
use logic::weather::{WeatherAdapter, WeatherClient};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wildfire_risk_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Wildfire risk server starting...");

    // Load the classifier; serving without it is not an option.
    let model = RiskModel::load(&config.model_path, &config.model_metadata_path)
        .context("failed to load scoring model")?;

    let client = WeatherClient::new(
        config.weather_base_url.clone(),
        Duration::from_secs(config.weather_timeout_secs),
    );

    let state = AppState {
        pipeline: RiskPipeline::new(Arc::new(model)),
        adapter: Arc::new(WeatherAdapter::new(client, config.temp_range_default)),
    };

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub pipeline: RiskPipeline,
    pub adapter: Arc<WeatherAdapter>,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/predict", post(handlers::predict::predict))
        .route("/weather", post(handlers::weather::by_city))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
