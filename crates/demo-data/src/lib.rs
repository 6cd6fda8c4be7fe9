//! Fallback data for the dashboard: fixed baselines for known symbols,
//! synthesized profiles for unknown ones, and the synthetic series
//! generator behind both.

pub mod generator;
pub mod profiles;

use chrono::Utc;
use dashboard_core::{CompanyProfile, FetchResult, FinancialMetrics, PricePoint, Provenance};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

pub use generator::generate_series;
pub use profiles::{baseline, CompanyBaseline, BASELINES, SYNTHETIC_SECTORS};

/// Baseline prices get at most this much multiplicative jitter per demo
/// build, so repeated fallbacks "feel live" without drifting far.
pub const PRICE_JITTER: f64 = 0.03;

const OPERATIONAL_EFFICIENCY_CENTER: f64 = 94.2;
const EMPLOYEE_SATISFACTION_CENTER: f64 = 87.0;

/// Minimum series length before the 30-day change is read off the series
/// instead of substituted.
pub const CHANGE_WINDOW_MIN_POINTS: usize = 20;
const CHANGE_LOOKBACK_POINTS: usize = 21;

/// Build a complete demo-provenance result for `symbol`.
///
/// Known symbols keep their fixed profile with a jittered price; unknown
/// symbols get a fully synthesized profile. Either way the series comes
/// from the generator seeded with the resolved price, so the result is
/// internally consistent and never empty for a normal lookback.
pub fn demo_fetch(rng: &mut StdRng, symbol: &str, lookback_days: i64) -> FetchResult {
    tracing::debug!("Building demo data for {}", symbol);

    let (profile, price, metrics_base, base_volume) = match baseline(symbol) {
        Some(b) => {
            let jittered = b.price * (1.0 + rng.gen_range(-PRICE_JITTER..=PRICE_JITTER));
            let profile = CompanyProfile {
                symbol: b.symbol.to_string(),
                name: b.name.to_string(),
                sector: b.sector.to_string(),
                industry: b.industry.to_string(),
                employees: Some(b.employees),
                country: b.country.to_string(),
                description: b.description.to_string(),
            };
            let base = (b.market_cap, b.revenue, b.pe_ratio, b.profit_margin, b.revenue_growth);
            (profile, jittered, base, b.base_volume)
        }
        None => synthesize_profile(rng, symbol),
    };

    let series = generate_series(rng, price, base_volume, lookback_days);
    let change_30d = change_30d(&series, rng);
    let (operational_efficiency, employee_satisfaction) = soft_metrics(rng);

    let (market_cap, revenue, pe_ratio, profit_margin, revenue_growth) = metrics_base;

    FetchResult {
        profile,
        metrics: FinancialMetrics {
            current_price: price,
            market_cap,
            revenue,
            pe_ratio,
            profit_margin,
            revenue_growth,
            change_30d,
            operational_efficiency,
            employee_satisfaction,
        },
        series,
        provenance: Provenance::Demo,
        fetched_at: Utc::now(),
    }
}

type MetricsBase = (f64, f64, f64, f64, f64);

fn synthesize_profile(rng: &mut StdRng, symbol: &str) -> (CompanyProfile, f64, MetricsBase, f64) {
    // SYNTHETIC_SECTORS is non-empty.
    let (sector, industry) = SYNTHETIC_SECTORS.choose(rng).unwrap();
    let name = format!("{} Corporation", symbol);

    let profile = CompanyProfile {
        symbol: symbol.to_string(),
        name: name.clone(),
        sector: sector.to_string(),
        industry: industry.to_string(),
        employees: Some(rng.gen_range(1_000u64..200_000)),
        country: "United States".to_string(),
        description: format!(
            "{} operates in the {} sector, serving customers across multiple markets worldwide.",
            name,
            sector.to_lowercase()
        ),
    };

    let price = rng.gen_range(50.0..=400.0);
    let metrics_base = (
        rng.gen_range(1.0e10..=5.0e11),
        rng.gen_range(5.0e8..=8.0e10),
        rng.gen_range(15.0..=45.0),
        rng.gen_range(5.0..=30.0),
        rng.gen_range(-5.0..=25.0),
    );
    let base_volume = rng.gen_range(5_000_000.0..=50_000_000.0);

    (profile, price, metrics_base, base_volume)
}

/// Percent change over the trailing ~30 calendar days (21 business days).
/// Series too short to say get a bounded plausible substitute instead of an
/// error.
pub fn change_30d(series: &[PricePoint], rng: &mut StdRng) -> f64 {
    if series.len() >= CHANGE_WINDOW_MIN_POINTS {
        let lookback = CHANGE_LOOKBACK_POINTS.min(series.len());
        let start = series[series.len() - lookback].close;
        let end = series[series.len() - 1].close;
        if start > 0.0 {
            return (end / start - 1.0) * 100.0;
        }
    }
    rng.gen_range(-10.0..=10.0)
}

/// Presentation-filler soft metrics: bounded noise around fixed centers.
pub fn soft_metrics(rng: &mut StdRng) -> (f64, f64) {
    let efficiency =
        (OPERATIONAL_EFFICIENCY_CENTER + rng.gen_range(-2.5..=2.5)).clamp(85.0, 99.5);
    let satisfaction =
        (EMPLOYEE_SATISFACTION_CENTER + rng.gen_range(-4.0..=4.0)).clamp(70.0, 100.0);
    (efficiency, satisfaction)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_known_symbol_keeps_profile_and_jitters_price() {
        let mut rng = StdRng::seed_from_u64(11);
        let result = demo_fetch(&mut rng, "AAPL", 180);

        assert_eq!(result.provenance, Provenance::Demo);
        assert_eq!(result.profile.name, "Apple Inc.");
        assert_eq!(result.profile.sector, "Technology");
        assert!(!result.series.is_empty());

        let price = result.metrics.current_price;
        assert!((price - 175.45).abs() <= 175.45 * PRICE_JITTER + 1e-9);
    }

    #[test]
    fn test_unknown_symbol_synthesizes_profile() {
        let mut rng = StdRng::seed_from_u64(23);
        let result = demo_fetch(&mut rng, "ZZZZ", 180);

        assert_eq!(result.provenance, Provenance::Demo);
        assert!(SYNTHETIC_SECTORS
            .iter()
            .any(|(sector, _)| *sector == result.profile.sector));
        let price = result.metrics.current_price;
        assert!((50.0..=400.0).contains(&price));
        assert!((1.0e10..=5.0e11).contains(&result.metrics.market_cap));
        assert!((15.0..=45.0).contains(&result.metrics.pe_ratio));
        assert!(!result.series.is_empty());
    }

    #[test]
    fn test_change_30d_reads_series_when_long_enough() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate_series(&mut rng, 100.0, 1_000_000.0, 180);
        assert!(series.len() >= CHANGE_WINDOW_MIN_POINTS);

        let change = change_30d(&series, &mut rng);
        let start = series[series.len() - CHANGE_LOOKBACK_POINTS].close;
        let end = series[series.len() - 1].close;
        assert!((change - (end / start - 1.0) * 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_change_30d_substitutes_for_short_series() {
        let mut rng = StdRng::seed_from_u64(5);
        let series = generate_series(&mut rng, 100.0, 1_000_000.0, 5);
        assert!(series.len() < CHANGE_WINDOW_MIN_POINTS);

        for _ in 0..50 {
            let change = change_30d(&series, &mut rng);
            assert!((-10.0..=10.0).contains(&change));
        }
    }

    #[test]
    fn test_soft_metrics_bounded() {
        let mut rng = StdRng::seed_from_u64(9);
        for _ in 0..100 {
            let (efficiency, satisfaction) = soft_metrics(&mut rng);
            assert!((85.0..=99.5).contains(&efficiency));
            assert!((70.0..=100.0).contains(&satisfaction));
        }
    }

    #[test]
    fn test_demo_fetch_tolerates_degenerate_lookback() {
        let mut rng = StdRng::seed_from_u64(2);
        let result = demo_fetch(&mut rng, "AAPL", 1);
        // A one-day span may be empty (weekend) or a single point; the
        // substituted 30-day change still lands in its plausible range.
        assert!(result.series.len() <= 1);
        assert!((-10.0..=10.0).contains(&result.metrics.change_30d));
    }
}
