//! Rolling indicators over a close-price slice.
//!
//! Outputs align index-for-index with the input: positions where the
//! indicator is not yet defined hold `None`. Windows clamp to
//! `min(window, len)` so short series degrade instead of erroring.

/// Simple moving average over a trailing window.
///
/// The value at index `i` is the arithmetic mean of the `w` closes ending
/// at `i`, where `w = min(window, closes.len())`. Indices before the
/// effective window fills are `None`.
pub fn sma(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if closes.is_empty() || window == 0 {
        return vec![None; closes.len()];
    }

    let w = window.min(closes.len());
    let mut result = vec![None; closes.len()];
    for i in (w - 1)..closes.len() {
        let sum: f64 = closes[i + 1 - w..=i].iter().sum();
        result[i] = Some(sum / w as f64);
    }
    result
}

/// Relative-strength oscillator, bounded to [0, 100].
///
/// For each index, the mean of positive deltas and the mean of negative
/// deltas over the trailing window (of deltas) feed the usual
/// `100 - 100 / (1 + rs)` formula. A window with no negative deltas
/// saturates to exactly 100.0 rather than dividing by zero. The window
/// clamps to the number of available deltas.
pub fn relative_strength(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut result = vec![None; closes.len()];
    if closes.len() < 2 || window == 0 {
        return result;
    }

    let deltas: Vec<f64> = closes.windows(2).map(|w| w[1] - w[0]).collect();
    let w = window.min(deltas.len());

    // Index i of `result` uses deltas ending at delta index i - 1.
    for i in w..closes.len() {
        let slice = &deltas[i - w..i];
        let gain_sum: f64 = slice.iter().filter(|d| **d > 0.0).sum();
        let loss_sum: f64 = slice.iter().filter(|d| **d < 0.0).map(|d| d.abs()).sum();

        let avg_gain = gain_sum / w as f64;
        let avg_loss = loss_sum / w as f64;

        let value = if avg_loss == 0.0 {
            100.0
        } else {
            let rs = avg_gain / avg_loss;
            100.0 - 100.0 / (1.0 + rs)
        };
        result[i] = Some(value);
    }
    result
}
