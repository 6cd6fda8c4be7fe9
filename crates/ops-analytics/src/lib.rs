//! Operational metrics shown alongside the market data: executive KPIs,
//! anomaly-detector events, and ETL pipeline runs, plus the roll-ups the
//! dashboard derives from them.

pub mod models;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub use models::{AnomalyEvent, ExecutiveKpis, PipelineRun, PipelineStatus, Severity};

/// The dashboard's pre-baked operational dataset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpsDataset {
    pub kpis: ExecutiveKpis,
    pub anomalies: Vec<AnomalyEvent>,
    pub pipelines: Vec<PipelineRun>,
}

/// Roll-up across pipeline runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub success_rate: f64,
    pub records_processed: u64,
    pub failed: usize,
}

impl PipelineSummary {
    /// Success rate in percent; records counted from successful runs only.
    /// An empty slice rolls up to zeros.
    pub fn from_runs(runs: &[PipelineRun]) -> Self {
        if runs.is_empty() {
            return Self {
                success_rate: 0.0,
                records_processed: 0,
                failed: 0,
            };
        }

        let successful: Vec<&PipelineRun> = runs
            .iter()
            .filter(|r| r.status == PipelineStatus::Success)
            .collect();

        Self {
            success_rate: successful.len() as f64 / runs.len() as f64 * 100.0,
            records_processed: successful.iter().map(|r| r.records).sum(),
            failed: runs
                .iter()
                .filter(|r| r.status == PipelineStatus::Failed)
                .count(),
        }
    }
}

impl OpsDataset {
    /// The `n` most recent anomaly events, newest first.
    pub fn recent_anomalies(&self, n: usize) -> Vec<&AnomalyEvent> {
        let mut sorted: Vec<&AnomalyEvent> = self.anomalies.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted.truncate(n);
        sorted
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.anomalies
            .iter()
            .filter(|a| a.severity == severity)
            .count()
    }

    pub fn pipeline_summary(&self) -> PipelineSummary {
        PipelineSummary::from_runs(&self.pipelines)
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    // Literal calendar dates below are all valid.
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// The fixed dataset the dashboard ships with.
pub fn demo_dataset() -> OpsDataset {
    OpsDataset {
        kpis: ExecutiveKpis {
            total_revenue: 12_500_000.0,
            monthly_growth: 8.5,
            customer_acquisition_cost: 125.0,
            customer_lifetime_value: 2_800.0,
            churn_rate: 2.1,
            employee_satisfaction: 87.0,
            operational_efficiency: 94.2,
            cost_savings: 2_100_000.0,
        },
        anomalies: vec![
            AnomalyEvent {
                date: date(2024, 1, 12),
                metric_value: 145.17,
                severity: Severity::High,
            },
            AnomalyEvent {
                date: date(2024, 1, 29),
                metric_value: 67.45,
                severity: Severity::Medium,
            },
            AnomalyEvent {
                date: date(2024, 8, 4),
                metric_value: 134.74,
                severity: Severity::Medium,
            },
            AnomalyEvent {
                date: date(2024, 10, 6),
                metric_value: 56.21,
                severity: Severity::High,
            },
            AnomalyEvent {
                date: date(2024, 12, 30),
                metric_value: 168.37,
                severity: Severity::High,
            },
        ],
        pipelines: vec![
            PipelineRun {
                name: "Customer Data Pipeline".to_string(),
                status: PipelineStatus::Success,
                records: 461_782,
                duration_mins: 107,
            },
            PipelineRun {
                name: "Sales Analytics Pipeline".to_string(),
                status: PipelineStatus::Failed,
                records: 0,
                duration_mins: 179,
            },
            PipelineRun {
                name: "Marketing Pipeline".to_string(),
                status: PipelineStatus::Success,
                records: 79_369,
                duration_mins: 161,
            },
            PipelineRun {
                name: "Financial Reporting Pipeline".to_string(),
                status: PipelineStatus::Success,
                records: 321_699,
                duration_mins: 25,
            },
            PipelineRun {
                name: "Product Analytics Pipeline".to_string(),
                status: PipelineStatus::Success,
                records: 171_616,
                duration_mins: 108,
            },
        ],
    }
}
