use async_trait::async_trait;
use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, Weekday};
use dashboard_core::{
    DataError, MarketDataProvider, PricePoint, Provenance, ProviderProfile,
};
use demo_data::{PRICE_JITTER, SYNTHETIC_SECTORS};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::{DataOrchestrator, FetchConfig};

/// Provider that fails every call with a fixed transient error kind.
struct AlwaysFailing {
    rate_limited: bool,
    profile_calls: AtomicU32,
}

impl AlwaysFailing {
    fn rate_limited() -> Self {
        Self {
            rate_limited: true,
            profile_calls: AtomicU32::new(0),
        }
    }

    fn timing_out() -> Self {
        Self {
            rate_limited: false,
            profile_calls: AtomicU32::new(0),
        }
    }

    fn error(&self) -> DataError {
        if self.rate_limited {
            DataError::RateLimited("simulated 429".to_string())
        } else {
            DataError::Timeout("simulated timeout".to_string())
        }
    }
}

#[async_trait]
impl MarketDataProvider for AlwaysFailing {
    async fn profile(&self, _symbol: &str) -> Result<ProviderProfile, DataError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Err(self.error())
    }

    async fn price_history(
        &self,
        _symbol: &str,
        _lookback_days: i64,
    ) -> Result<Vec<PricePoint>, DataError> {
        Err(self.error())
    }
}

/// Provider that always succeeds with a fixed profile and series.
struct Healthy {
    profile_calls: AtomicU32,
    series: Vec<PricePoint>,
}

impl Healthy {
    fn new() -> Self {
        Self {
            profile_calls: AtomicU32::new(0),
            series: weekday_series(160.0, 40),
        }
    }
}

#[async_trait]
impl MarketDataProvider for Healthy {
    async fn profile(&self, symbol: &str) -> Result<ProviderProfile, DataError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ProviderProfile {
            symbol: symbol.to_string(),
            name: Some("Apple Inc.".to_string()),
            sector: Some("Technology".to_string()),
            price: Some(175.45),
            market_cap: Some(2.75e12),
            ..ProviderProfile::default()
        })
    }

    async fn price_history(
        &self,
        _symbol: &str,
        _lookback_days: i64,
    ) -> Result<Vec<PricePoint>, DataError> {
        Ok(self.series.clone())
    }
}

/// Provider whose profile succeeds but whose history is always empty.
struct EmptyHistory {
    profile_calls: AtomicU32,
}

#[async_trait]
impl MarketDataProvider for EmptyHistory {
    async fn profile(&self, symbol: &str) -> Result<ProviderProfile, DataError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(ProviderProfile {
            symbol: symbol.to_string(),
            price: Some(100.0),
            ..ProviderProfile::default()
        })
    }

    async fn price_history(
        &self,
        _symbol: &str,
        _lookback_days: i64,
    ) -> Result<Vec<PricePoint>, DataError> {
        Ok(Vec::new())
    }
}

fn weekday_series(start_price: f64, points: usize) -> Vec<PricePoint> {
    let mut series = Vec::with_capacity(points);
    let mut date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut price = start_price;
    while series.len() < points {
        if !matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            price += 0.5;
            series.push(PricePoint {
                date,
                close: price,
                volume: 1_000_000.0,
            });
        }
        date += ChronoDuration::days(1);
    }
    series
}

fn quick_config() -> FetchConfig {
    FetchConfig {
        max_retries: 2,
        backoff_base_secs: 0.0,
        ..FetchConfig::default()
    }
}

fn orchestrator(
    provider: Arc<dyn MarketDataProvider>,
    config: FetchConfig,
    seed: u64,
) -> DataOrchestrator {
    DataOrchestrator::new(provider, config)
        .unwrap()
        .with_rng(StdRng::seed_from_u64(seed))
}

#[tokio::test]
async fn test_total_fallback_on_permanent_failure() {
    let provider = Arc::new(AlwaysFailing::timing_out());
    let orch = orchestrator(provider.clone(), quick_config(), 1);

    let result = orch.get_company_data("AAPL", false).await;
    assert_eq!(result.provenance, Provenance::Demo);
    assert!(!result.series.is_empty());
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limit_scenario_two_attempts_two_growing_sleeps() {
    let provider = Arc::new(AlwaysFailing::rate_limited());
    let config = FetchConfig {
        max_retries: 2,
        backoff_base_secs: 3.0,
        ..FetchConfig::default()
    };
    let orch = orchestrator(provider.clone(), config, 42);

    let started = tokio::time::Instant::now();
    let result = orch.get_company_data("AAPL", false).await;
    let elapsed = started.elapsed();

    // Exactly two attempts, with backoff sleeps of 3s then 6s.
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);
    assert!(elapsed >= std::time::Duration::from_secs(9));
    assert!(elapsed < std::time::Duration::from_secs(10));

    // Fallback comes from the fixed profile store with jittered price.
    assert_eq!(result.provenance, Provenance::Demo);
    assert_eq!(result.profile.name, "Apple Inc.");
    let price = result.metrics.current_price;
    assert!((price - 175.45).abs() <= 175.45 * PRICE_JITTER + 1e-9);
}

#[tokio::test]
async fn test_unknown_symbol_gets_synthetic_profile() {
    let provider = Arc::new(AlwaysFailing::rate_limited());
    let orch = orchestrator(provider, quick_config(), 99);

    let result = orch.get_company_data("ZZZZ", false).await;
    assert_eq!(result.provenance, Provenance::Demo);
    assert!(SYNTHETIC_SECTORS
        .iter()
        .any(|(sector, _)| *sector == result.profile.sector));
    assert!((50.0..=400.0).contains(&result.metrics.current_price));
}

#[tokio::test]
async fn test_cache_idempotence_within_freshness_window() {
    let provider = Arc::new(Healthy::new());
    let orch = orchestrator(provider.clone(), quick_config(), 7);

    let first = orch.get_company_data("AAPL", false).await;
    let second = orch.get_company_data("AAPL", false).await;

    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 1);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn test_forced_refresh_bypasses_cache_and_clears_it() {
    let provider = Arc::new(Healthy::new());
    let orch = orchestrator(provider.clone(), quick_config(), 7);

    orch.get_company_data("AAPL", false).await;
    orch.get_company_data("MSFT", false).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);

    orch.get_company_data("AAPL", true).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 3);

    // The refresh dropped every entry, so the other symbol re-fetches too.
    orch.get_company_data("MSFT", false).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 4);
}

#[tokio::test]
async fn test_stale_cache_entry_triggers_refetch() {
    let provider = Arc::new(Healthy::new());
    let config = FetchConfig {
        cache_ttl_secs: 0,
        ..quick_config()
    };
    let orch = orchestrator(provider.clone(), config, 7);

    orch.get_company_data("AAPL", false).await;
    orch.get_company_data("AAPL", false).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_live_fetch_succeeds_and_is_tagged_live() {
    let provider = Arc::new(Healthy::new());
    let orch = orchestrator(provider, quick_config(), 7);

    let result = orch.get_company_data("AAPL", false).await;
    assert_eq!(result.provenance, Provenance::Live);
    assert_eq!(result.metrics.current_price, 175.45);
    assert_eq!(result.series.len(), 40);
    // 40 points is enough to read the 30-day change off the series.
    let start = result.series[result.series.len() - 21].close;
    let end = result.series[result.series.len() - 1].close;
    let expected = (end / start - 1.0) * 100.0;
    assert!((result.metrics.change_30d - expected).abs() < 1e-9);
}

#[tokio::test]
async fn test_empty_live_history_degrades_to_demo() {
    let provider = Arc::new(EmptyHistory {
        profile_calls: AtomicU32::new(0),
    });
    let orch = orchestrator(provider.clone(), quick_config(), 3);

    let result = orch.get_company_data("AAPL", false).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 2);
    assert_eq!(result.provenance, Provenance::Demo);
    assert!(!result.series.is_empty());
}

#[tokio::test]
async fn test_invalid_config_is_rejected_up_front() {
    let provider: Arc<dyn MarketDataProvider> = Arc::new(Healthy::new());
    let config = FetchConfig {
        lookback_days: 0,
        ..FetchConfig::default()
    };
    assert!(matches!(
        DataOrchestrator::new(provider, config),
        Err(DataError::InvalidConfig(_))
    ));
}

#[tokio::test]
async fn test_zero_retries_means_demo_mode() {
    let provider = Arc::new(Healthy::new());
    let config = FetchConfig {
        max_retries: 0,
        ..quick_config()
    };
    let orch = orchestrator(provider.clone(), config, 5);

    let result = orch.get_company_data("AAPL", false).await;
    assert_eq!(provider.profile_calls.load(Ordering::SeqCst), 0);
    assert_eq!(result.provenance, Provenance::Demo);
}
