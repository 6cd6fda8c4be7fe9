use dashboard_core::PricePoint;
use serde::{Deserialize, Serialize};

use crate::indicators::{relative_strength, sma};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Bullish,
    Bearish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OscillatorSignal {
    Overbought,
    Oversold,
    Neutral,
}

impl OscillatorSignal {
    /// >70 overbought, <30 oversold, else neutral.
    pub fn from_value(value: f64) -> Self {
        if value > 70.0 {
            OscillatorSignal::Overbought
        } else if value < 30.0 {
            OscillatorSignal::Oversold
        } else {
            OscillatorSignal::Neutral
        }
    }
}

/// Bullish iff the latest close sits above the latest window average.
/// `None` when the series is empty.
pub fn trend(closes: &[f64], window: usize) -> Option<Trend> {
    let last_close = closes.last()?;
    let last_avg = sma(closes, window).last()?.to_owned()?;
    if *last_close > last_avg {
        Some(Trend::Bullish)
    } else {
        Some(Trend::Bearish)
    }
}

/// Indicator overlay bundle derived on demand from a price series.
///
/// Short- and long-window trends are classified independently and may
/// disagree; that is a mixed signal, not an error. All fields are `None`
/// for series too short to define them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalSummary {
    pub short_window: usize,
    pub long_window: usize,
    pub oscillator_window: usize,
    pub short_average: Option<f64>,
    pub long_average: Option<f64>,
    pub short_trend: Option<Trend>,
    pub long_trend: Option<Trend>,
    pub oscillator: Option<f64>,
    pub oscillator_signal: Option<OscillatorSignal>,
}

impl TechnicalSummary {
    pub fn compute(
        series: &[PricePoint],
        short_window: usize,
        long_window: usize,
        oscillator_window: usize,
    ) -> Self {
        let closes: Vec<f64> = series.iter().map(|p| p.close).collect();

        let short_average = sma(&closes, short_window).last().copied().flatten();
        let long_average = sma(&closes, long_window).last().copied().flatten();
        let oscillator = relative_strength(&closes, oscillator_window)
            .last()
            .copied()
            .flatten();

        Self {
            short_window,
            long_window,
            oscillator_window,
            short_average,
            long_average,
            short_trend: trend(&closes, short_window),
            long_trend: trend(&closes, long_window),
            oscillator,
            oscillator_signal: oscillator.map(OscillatorSignal::from_value),
        }
    }
}
