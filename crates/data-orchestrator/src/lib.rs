//! The resilient fetch pipeline: cache check, bounded retries with growing
//! backoff, and terminal degradation to demo data. Failure is absorbed
//! here; callers always get a renderable `FetchResult`, tagged with its
//! provenance.

use chrono::{DateTime, Utc};
use dashboard_core::{
    CompanyProfile, DataError, FetchResult, FinancialMetrics, MarketDataProvider, Provenance,
};
use dashmap::DashMap;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;

pub mod config;
pub use config::FetchConfig;

#[cfg(test)]
mod orchestrator_tests;

/// Cached result with its creation time. Entries are replaced wholesale,
/// never patched.
struct CacheEntry {
    result: FetchResult,
    cached_at: DateTime<Utc>,
}

pub struct DataOrchestrator {
    provider: Arc<dyn MarketDataProvider>,
    config: FetchConfig,
    cache: DashMap<String, CacheEntry>,
    rng: Mutex<StdRng>,
}

impl DataOrchestrator {
    /// The only fallible call in the pipeline: rejects nonsensical
    /// configuration up front. Everything after construction degrades
    /// instead of erroring.
    pub fn new(
        provider: Arc<dyn MarketDataProvider>,
        config: FetchConfig,
    ) -> Result<Self, DataError> {
        config.validate()?;
        Ok(Self {
            provider,
            config,
            cache: DashMap::new(),
            rng: Mutex::new(StdRng::from_entropy()),
        })
    }

    /// Replace the entropy-seeded RNG, for deterministic tests.
    pub fn with_rng(self, rng: StdRng) -> Self {
        Self {
            rng: Mutex::new(rng),
            ..self
        }
    }

    pub fn config(&self) -> &FetchConfig {
        &self.config
    }

    /// Fetch data for `symbol` (already case-normalized by the caller).
    ///
    /// A fresh cache entry is returned verbatim: no provider call, no
    /// re-jitter. `force_refresh` clears the whole cache first, so the
    /// fetch below always runs. This never fails: exhausted retries
    /// degrade to demo data.
    pub async fn get_company_data(&self, symbol: &str, force_refresh: bool) -> FetchResult {
        if force_refresh {
            tracing::info!("Forced refresh for {}: clearing result cache", symbol);
            self.cache.clear();
        } else if let Some(entry) = self.cache.get(symbol) {
            let age = (Utc::now() - entry.cached_at).num_seconds();
            if age < self.config.cache_ttl_secs {
                tracing::debug!("Cache hit for {} (age {}s)", symbol, age);
                return entry.result.clone();
            }
        }

        let result = self.fetch_with_fallback(symbol).await;
        self.cache.insert(
            symbol.to_string(),
            CacheEntry {
                result: result.clone(),
                cached_at: Utc::now(),
            },
        );
        result
    }

    /// Drop every cached result. The next call per symbol re-fetches.
    pub fn invalidate(&self) {
        self.cache.clear();
    }

    /// Attempting -> Retrying -> Degraded. The degraded terminal state is
    /// a successful demo result, not an error.
    async fn fetch_with_fallback(&self, symbol: &str) -> FetchResult {
        for attempt in 0..self.config.max_retries {
            tracing::debug!(
                "Attempting live fetch for {} ({}/{})",
                symbol,
                attempt + 1,
                self.config.max_retries
            );

            match self.try_live_fetch(symbol).await {
                Ok(result) => {
                    tracing::info!(
                        "Live data for {}: {} points, price {:.2}",
                        symbol,
                        result.series.len(),
                        result.metrics.current_price
                    );
                    return result;
                }
                Err(e) => {
                    let kind = match &e {
                        DataError::RateLimited(_) => "rate-limited",
                        DataError::Timeout(_) => "timeout",
                        DataError::EmptySeries(_) => "empty history",
                        _ => "provider error",
                    };
                    let delay = self.backoff_delay(attempt);
                    tracing::warn!(
                        "Attempt {}/{} for {} failed ({}): {}. Retrying in {:.1}s",
                        attempt + 1,
                        self.config.max_retries,
                        symbol,
                        kind,
                        e,
                        delay.as_secs_f64()
                    );
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        tracing::warn!(
            "Retries exhausted for {}: degrading to demo data",
            symbol
        );
        let mut rng = self.rng.lock().await;
        demo_data::demo_fetch(&mut rng, symbol, self.config.lookback_days)
    }

    async fn try_live_fetch(&self, symbol: &str) -> Result<FetchResult, DataError> {
        let (profile_result, history_result) = tokio::join!(
            self.provider.profile(symbol),
            self.provider.price_history(symbol, self.config.lookback_days),
        );
        let raw = profile_result?;
        let series = history_result?;

        // Empty live history can never reach callers: it would break the
        // live-implies-non-empty invariant, so it counts as a failed
        // attempt.
        if series.is_empty() {
            return Err(DataError::EmptySeries(symbol.to_string()));
        }

        let current_price = match raw.price {
            Some(p) if p > 0.0 => p,
            _ => series[series.len() - 1].close,
        };

        let mut rng = self.rng.lock().await;
        let change_30d = demo_data::change_30d(&series, &mut rng);
        let (operational_efficiency, employee_satisfaction) = demo_data::soft_metrics(&mut rng);
        drop(rng);

        Ok(FetchResult {
            profile: CompanyProfile {
                symbol: symbol.to_string(),
                name: raw.name.unwrap_or_else(|| symbol.to_string()),
                sector: raw.sector.unwrap_or_default(),
                industry: raw.industry.unwrap_or_default(),
                employees: raw.employees,
                country: raw.country.unwrap_or_default(),
                description: raw.description.unwrap_or_default(),
            },
            metrics: FinancialMetrics {
                current_price,
                market_cap: raw.market_cap.unwrap_or(0.0),
                revenue: raw.revenue.unwrap_or(0.0),
                pe_ratio: raw.pe_ratio.unwrap_or(0.0),
                profit_margin: raw.profit_margin.unwrap_or(0.0),
                revenue_growth: raw.revenue_growth.unwrap_or(0.0),
                change_30d,
                operational_efficiency,
                employee_satisfaction,
            },
            series,
            provenance: Provenance::Live,
            fetched_at: Utc::now(),
        })
    }

    /// Grows with the attempt index: `base * 2^attempt`. The loop sleeps
    /// after every failed attempt, including the last one before
    /// degrading.
    fn backoff_delay(&self, attempt: u32) -> Duration {
        Duration::from_secs_f64(self.config.backoff_base_secs * 2_f64.powi(attempt as i32))
    }
}
