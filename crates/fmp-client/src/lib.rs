//! HTTP client for Financial Modeling Prep.
//!
//! One call here is one attempt: the client classifies failures
//! (rate-limit vs timeout vs other) and leaves retry policy to the
//! orchestrator.

use async_trait::async_trait;
use chrono::NaiveDate;
use dashboard_core::{DataError, MarketDataProvider, PricePoint, ProviderProfile};
use reqwest::Client;
use serde::Deserialize;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::Instant;

const BASE_URL: &str = "https://financialmodelingprep.com/api/v3";

/// Sliding-window rate limiter: at most `max_requests` per `window`.
#[derive(Clone)]
struct RateLimiter {
    timestamps: Arc<Mutex<VecDeque<Instant>>>,
    max_requests: usize,
    window: Duration,
}

impl RateLimiter {
    fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            timestamps: Arc::new(Mutex::new(VecDeque::new())),
            max_requests,
            window,
        }
    }

    async fn acquire(&self) {
        loop {
            let mut ts = self.timestamps.lock().await;
            let now = Instant::now();

            while let Some(&front) = ts.front() {
                if now.duration_since(front) >= self.window {
                    ts.pop_front();
                } else {
                    break;
                }
            }

            if ts.len() < self.max_requests {
                ts.push_back(now);
                return;
            }

            let wait_until = ts.front().unwrap().checked_add(self.window).unwrap();
            let sleep_dur = wait_until.duration_since(now) + Duration::from_millis(50);
            drop(ts);
            tracing::debug!(
                "Rate limiter: waiting {:.1}s for FMP API slot",
                sleep_dur.as_secs_f64()
            );
            tokio::time::sleep(sleep_dur).await;
        }
    }
}

#[derive(Clone)]
pub struct FmpClient {
    api_key: String,
    client: Client,
    rate_limiter: RateLimiter,
}

impl FmpClient {
    pub fn new(api_key: String) -> Self {
        // Free tier allows 250 req/day; paid plans hundreds per minute.
        // Local throttling keeps bursts from tripping the provider's cap.
        let rate_limit: usize = std::env::var("FMP_RATE_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(300);

        let timeout_secs: u64 = std::env::var("FMP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            api_key,
            client,
            rate_limiter: RateLimiter::new(rate_limit, Duration::from_secs(60)),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, DataError> {
        self.rate_limiter.acquire().await;

        let response = self
            .client
            .get(url)
            .query(query)
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await
            .map_err(classify_transport_error)?;

        let status = response.status();
        if status.as_u16() == 429 {
            return Err(DataError::RateLimited(
                "FMP returned HTTP 429".to_string(),
            ));
        }
        if !status.is_success() {
            return Err(DataError::Api(format!(
                "HTTP {}: {}",
                status,
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| DataError::Api(e.to_string()))
    }
}

fn classify_transport_error(e: reqwest::Error) -> DataError {
    if e.is_timeout() {
        DataError::Timeout(e.to_string())
    } else {
        DataError::Api(e.to_string())
    }
}

#[async_trait]
impl MarketDataProvider for FmpClient {
    async fn profile(&self, symbol: &str) -> Result<ProviderProfile, DataError> {
        let url = format!("{}/profile/{}", BASE_URL, symbol);
        let results: Vec<FmpProfile> = self.get_json(&url, &[]).await?;

        let raw = results
            .into_iter()
            .next()
            .ok_or_else(|| DataError::Api(format!("No profile returned for {}", symbol)))?;

        Ok(ProviderProfile {
            symbol: symbol.to_string(),
            name: raw.company_name,
            sector: raw.sector,
            industry: raw.industry,
            employees: raw.full_time_employees.and_then(|v| v.parse().ok()),
            country: raw.country,
            description: raw.description,
            price: raw.price,
            market_cap: raw.mkt_cap,
            revenue: raw.revenue,
            pe_ratio: raw.pe,
            profit_margin: raw.profit_margin,
            revenue_growth: raw.revenue_growth,
        })
    }

    async fn price_history(
        &self,
        symbol: &str,
        lookback_days: i64,
    ) -> Result<Vec<PricePoint>, DataError> {
        let url = format!("{}/historical-price-full/{}", BASE_URL, symbol);
        let timeseries = lookback_days.max(1).to_string();
        let response: FmpHistoricalResponse = self
            .get_json(&url, &[("timeseries", timeseries.as_str())])
            .await?;

        Ok(into_ascending_series(response.historical))
    }
}

/// FMP returns history newest-first; the rest of the system expects
/// ascending dates. Unparseable rows are dropped with a warning.
fn into_ascending_series(raw: Vec<FmpHistoricalBar>) -> Vec<PricePoint> {
    let mut series: Vec<PricePoint> = raw
        .into_iter()
        .filter_map(|bar| {
            match NaiveDate::parse_from_str(&bar.date, "%Y-%m-%d") {
                Ok(date) => Some(PricePoint {
                    date,
                    close: bar.close,
                    volume: bar.volume.unwrap_or(0.0),
                }),
                Err(_) => {
                    tracing::warn!("Skipping history row with bad date: {}", bar.date);
                    None
                }
            }
        })
        .collect();
    series.sort_by_key(|p| p.date);
    series
}

// Response structures

#[derive(Debug, Deserialize)]
struct FmpProfile {
    #[serde(rename = "companyName")]
    company_name: Option<String>,
    sector: Option<String>,
    industry: Option<String>,
    #[serde(rename = "fullTimeEmployees")]
    full_time_employees: Option<String>,
    country: Option<String>,
    description: Option<String>,
    price: Option<f64>,
    #[serde(rename = "mktCap")]
    mkt_cap: Option<f64>,
    #[serde(default)]
    revenue: Option<f64>,
    pe: Option<f64>,
    #[serde(rename = "profitMargin", default)]
    profit_margin: Option<f64>,
    #[serde(rename = "revenueGrowth", default)]
    revenue_growth: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct FmpHistoricalResponse {
    #[serde(default)]
    historical: Vec<FmpHistoricalBar>,
}

#[derive(Debug, Deserialize)]
struct FmpHistoricalBar {
    date: String,
    close: f64,
    volume: Option<f64>,
}
