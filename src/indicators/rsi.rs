use crate::error::IndicatorError;
use crate::Result;

/// Calculate Relative Strength Index (RSI)
///
/// RSI measures the magnitude of recent price changes to evaluate
/// overbought or oversold conditions.
///
/// Only the first `period` prices of the window are walked, so `period`
/// prices yield `period - 1` differences. Both sums are still averaged over
/// `period`.
///
/// When there are no losses the RSI is clamped to 100, flat windows included.
pub fn calculate_rsi(window: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(IndicatorError::invalid("rsi_period", "RSI period must be non-zero"));
    }
    if window.len() < period {
        return Err(IndicatorError::insufficient("RSI", period, window.len()));
    }

    let mut sum_gain = 0.0;
    let mut sum_loss = 0.0;

    for pair in window[..period].windows(2) {
        let change = pair[1] - pair[0];
        if change > 0.0 {
            sum_gain += change;
        } else {
            sum_loss += change.abs();
        }
    }

    let avg_gain = sum_gain / period as f64;
    let avg_loss = sum_loss / period as f64;

    if avg_loss == 0.0 {
        return Ok(100.0);
    }

    let rs = avg_gain / avg_loss;
    Ok(100.0 - (100.0 / (1.0 + rs)))
}
