//! JSON API serving the dashboard frontend. Handlers are infallible by
//! design: the orchestrator absorbs provider failure, so the only error
//! responses here are for malformed query parameters.

use axum::{routing::get, Router};
use data_orchestrator::{DataOrchestrator, FetchConfig};
use fmp_client::FmpClient;
use ops_analytics::OpsDataset;
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod company_routes;
mod ops_routes;

pub use company_routes::company_routes;
pub use ops_routes::ops_routes;

#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<DataOrchestrator>,
    pub ops: Arc<OpsDataset>,
}

#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

pub async fn run_server() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api_server=info,data_orchestrator=info".into()),
        )
        .init();

    // A missing key is not fatal: every provider call will fail and the
    // orchestrator serves demo data, which is still a working dashboard.
    let api_key = std::env::var("FMP_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("FMP_API_KEY not set: all data will be demo-provenance");
        String::new()
    });

    let provider = Arc::new(FmpClient::new(api_key));
    let orchestrator = Arc::new(DataOrchestrator::new(provider, FetchConfig::from_env())?);
    let state = AppState {
        orchestrator,
        ops: Arc::new(ops_analytics::demo_dataset()),
    };

    let app = Router::new()
        .route("/health", get(health))
        .merge(company_routes())
        .merge(ops_routes())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8080);
    let addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}
