//! Operational dashboard endpoints backed by the baked dataset.

use axum::{extract::State, routing::get, Json, Router};
use ops_analytics::{AnomalyEvent, ExecutiveKpis, PipelineRun, PipelineSummary, Severity};
use serde::Serialize;

use crate::{ApiResponse, AppState};

#[derive(Serialize)]
pub struct OpsOverview {
    pub kpis: ExecutiveKpis,
    pub recent_anomalies: Vec<AnomalyEvent>,
    pub high_severity_anomalies: usize,
    pub pipelines: Vec<PipelineRun>,
    pub pipeline_summary: PipelineSummary,
}

pub fn ops_routes() -> Router<AppState> {
    Router::new().route("/api/ops/overview", get(get_overview))
}

async fn get_overview(State(state): State<AppState>) -> Json<ApiResponse<OpsOverview>> {
    let ops = &state.ops;
    let overview = OpsOverview {
        kpis: ops.kpis.clone(),
        recent_anomalies: ops.recent_anomalies(5).into_iter().cloned().collect(),
        high_severity_anomalies: ops.count_by_severity(Severity::High),
        pipelines: ops.pipelines.clone(),
        pipeline_summary: ops.pipeline_summary(),
    };
    Json(ApiResponse::success(overview))
}
