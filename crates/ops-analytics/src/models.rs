use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Executive KPI snapshot shown on the dashboard landing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecutiveKpis {
    pub total_revenue: f64,
    pub monthly_growth: f64,
    pub customer_acquisition_cost: f64,
    pub customer_lifetime_value: f64,
    pub churn_rate: f64,
    pub employee_satisfaction: f64,
    pub operational_efficiency: f64,
    pub cost_savings: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// One flagged metric observation from the anomaly detector feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnomalyEvent {
    pub date: NaiveDate,
    pub metric_value: f64,
    pub severity: Severity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PipelineStatus {
    Success,
    Failed,
    Running,
}

/// Latest run of one ETL pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineRun {
    pub name: String,
    pub status: PipelineStatus,
    pub records: u64,
    pub duration_mins: u64,
}
