//! Synthetic daily price/volume series.
//!
//! Deterministic in structure (business days over the requested calendar
//! span), stochastic in values. The RNG is injected so tests can seed it.

use chrono::{Datelike, Duration, NaiveDate, Utc, Weekday};
use dashboard_core::PricePoint;
use rand::rngs::StdRng;
use rand::Rng;
use statrs::distribution::Normal;

/// Daily return volatility applied multiplicatively.
pub const DAILY_VOLATILITY: f64 = 0.02;
/// Fraction of the trailing 20-day return fed back into each new day.
const MOMENTUM_FACTOR: f64 = 0.05;
const MOMENTUM_LOOKBACK: usize = 20;
/// Price never falls below this fraction of the seed price (clamp, not
/// reflect).
pub const PRICE_FLOOR_RATIO: f64 = 0.5;
/// Every generated volume is at least this.
pub const MIN_VOLUME: f64 = 100_000.0;
const VOLUME_SPREAD_RATIO: f64 = 0.3;

/// Generate a business-day series spanning the trailing `days` calendar
/// days and ending today.
///
/// Spans with fewer than two business days yield a degenerate single-point
/// or empty series; callers tolerate both.
pub fn generate_series(
    rng: &mut StdRng,
    base_price: f64,
    base_volume: f64,
    days: i64,
) -> Vec<PricePoint> {
    let today = Utc::now().date_naive();
    let span = days.max(1);
    let start = today - Duration::days(span - 1);
    generate_series_between(rng, base_price, base_volume, start, today)
}

fn generate_series_between(
    rng: &mut StdRng,
    base_price: f64,
    base_volume: f64,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<PricePoint> {
    // Constant parameters, cannot fail.
    let return_dist = Normal::new(0.0, DAILY_VOLATILITY).unwrap();
    let volume_dist = Normal::new(base_volume, base_volume * VOLUME_SPREAD_RATIO).unwrap();

    let floor = base_price * PRICE_FLOOR_RATIO;
    let mut series = Vec::new();
    let mut price = base_price;

    let mut date = start;
    while date <= end {
        if !is_weekend(date) {
            let mut daily_return: f64 = rng.sample(return_dist);

            // Positive feedback: pull the price further in its recent
            // direction once enough history exists.
            if series.len() >= MOMENTUM_LOOKBACK {
                let lookback: &PricePoint = &series[series.len() - MOMENTUM_LOOKBACK];
                let trailing_return = price / lookback.close - 1.0;
                daily_return += trailing_return * MOMENTUM_FACTOR;
            }

            price = (price * (1.0 + daily_return)).max(floor);
            let volume = rng.sample(volume_dist).max(MIN_VOLUME);

            series.push(PricePoint {
                date,
                close: price,
                volume,
            });
        }
        date += Duration::days(1);
    }

    series
}

fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_series_invariants() {
        let mut rng = StdRng::seed_from_u64(7);
        let base_price = 175.45;
        let series = generate_series(&mut rng, base_price, 25_000_000.0, 180);

        assert!(series.len() > 100);
        for point in &series {
            assert!(!is_weekend(point.date));
            assert!(point.close >= base_price * PRICE_FLOOR_RATIO);
            assert!(point.volume >= MIN_VOLUME);
        }
        for pair in series.windows(2) {
            assert!(pair[1].date > pair[0].date);
        }
    }

    #[test]
    fn test_price_floor_holds_under_heavy_drift() {
        // Many seeds, long span: the clamp must hold for every path.
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let series = generate_series(&mut rng, 100.0, 1_000_000.0, 730);
            for point in &series {
                assert!(point.close >= 50.0);
            }
        }
    }

    #[test]
    fn test_degenerate_spans() {
        let mut rng = StdRng::seed_from_u64(1);

        let empty = generate_series(&mut rng, 100.0, 1_000_000.0, 0);
        assert!(empty.len() <= 1);

        // A one-day span is at most a single point, and none at all when
        // today is a weekend.
        let single = generate_series(&mut rng, 100.0, 1_000_000.0, 1);
        assert!(single.len() <= 1);
    }

    #[test]
    fn test_volume_floor() {
        // Tiny base volume: the normal distribution lands below the floor
        // often, and every sample must be clamped up.
        let mut rng = StdRng::seed_from_u64(3);
        let series = generate_series(&mut rng, 100.0, 50_000.0, 365);
        for point in &series {
            assert!(point.volume >= MIN_VOLUME);
        }
    }
}
