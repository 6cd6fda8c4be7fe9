//! Company data endpoints: the fetch-or-fallback result and derived
//! indicator overlays.

use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use dashboard_core::FetchResult;
use serde::Deserialize;
use technical_analysis::TechnicalSummary;

use crate::{ApiResponse, AppState};

#[derive(Deserialize)]
pub struct CompanyQuery {
    #[serde(default)]
    pub refresh: bool,
}

#[derive(Deserialize)]
pub struct IndicatorQuery {
    pub short: Option<usize>,
    pub long: Option<usize>,
    pub oscillator: Option<usize>,
}

pub fn company_routes() -> Router<AppState> {
    Router::new()
        .route("/api/company/:symbol", get(get_company))
        .route("/api/company/:symbol/indicators", get(get_indicators))
}

async fn get_company(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<CompanyQuery>,
) -> Json<ApiResponse<FetchResult>> {
    let symbol = symbol.trim().to_uppercase();
    let result = state.orchestrator.get_company_data(&symbol, query.refresh).await;
    Json(ApiResponse::success(result))
}

async fn get_indicators(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    Query(query): Query<IndicatorQuery>,
) -> Json<ApiResponse<TechnicalSummary>> {
    let short = query.short.unwrap_or(20);
    let long = query.long.unwrap_or(50);
    let oscillator = query.oscillator.unwrap_or(14);
    if short == 0 || long == 0 || oscillator == 0 {
        return Json(ApiResponse::error("window parameters must be positive"));
    }

    let symbol = symbol.trim().to_uppercase();
    let result = state.orchestrator.get_company_data(&symbol, false).await;
    let summary = TechnicalSummary::compute(&result.series, short, long, oscillator);
    Json(ApiResponse::success(summary))
}
