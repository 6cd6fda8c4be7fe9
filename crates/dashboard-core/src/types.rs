use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Where a fetch result came from: a live provider call or the synthetic
/// fallback generator. Always surfaced to the caller, never implied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Live,
    Demo,
}

impl Provenance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Provenance::Live => "live",
            Provenance::Demo => "demo",
        }
    }
}

/// Company identity and descriptive attributes. Built once per fetch and
/// replaced wholesale on re-fetch, never patched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyProfile {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub industry: String,
    pub employees: Option<u64>,
    pub country: String,
    pub description: String,
}

/// Numeric snapshot displayed on the dashboard. Percent fields are
/// percentages, not fractions. `operational_efficiency` and
/// `employee_satisfaction` are presentation filler sampled around fixed
/// centers, not derived from any real signal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialMetrics {
    pub current_price: f64,
    pub market_cap: f64,
    pub revenue: f64,
    pub pe_ratio: f64,
    pub profit_margin: f64,
    pub revenue_growth: f64,
    pub change_30d: f64,
    pub operational_efficiency: f64,
    pub employee_satisfaction: f64,
}

/// One business-day observation in a price series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
    pub volume: f64,
}

/// Aggregate handed back to the UI layer for one symbol.
///
/// Invariant: `provenance == Live` implies a non-empty `series` (empty live
/// data is treated as a failed attempt upstream), and `Demo` results always
/// carry a non-empty synthetic series.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchResult {
    pub profile: CompanyProfile,
    pub metrics: FinancialMetrics,
    pub series: Vec<PricePoint>,
    pub provenance: Provenance,
    pub fetched_at: DateTime<Utc>,
}

/// Raw profile payload as returned by the external provider. Fields are
/// optional so "no usable current price" is representable and can be
/// rejected by validation rather than papered over.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderProfile {
    pub symbol: String,
    pub name: Option<String>,
    pub sector: Option<String>,
    pub industry: Option<String>,
    pub employees: Option<u64>,
    pub country: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub market_cap: Option<f64>,
    pub revenue: Option<f64>,
    pub pe_ratio: Option<f64>,
    pub profit_margin: Option<f64>,
    pub revenue_growth: Option<f64>,
}
