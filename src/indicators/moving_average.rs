use crate::error::IndicatorError;
use crate::Result;

/// Calculate Simple Moving Average (SMA) of a whole window
pub fn calculate_sma(window: &[f64]) -> Result<f64> {
    if window.is_empty() {
        return Err(IndicatorError::EmptyWindow { indicator: "SMA" });
    }

    let sum: f64 = window.iter().sum();
    Ok(sum / window.len() as f64)
}

/// Slide a window of `period` prices across the series, one SMA per position.
///
/// The result has `prices.len() - period + 1` entries and its last entry
/// always covers the most recent price.
pub fn sma_series(prices: &[f64], period: usize) -> Result<Vec<f64>> {
    if period == 0 {
        return Err(IndicatorError::invalid("period", "SMA period must be non-zero"));
    }
    if prices.len() < period {
        return Err(IndicatorError::insufficient("SMA series", period, prices.len()));
    }

    prices.windows(period).map(calculate_sma).collect()
}

/// Short and long SMA series aligned on the same price indices
///
/// `short[i]` and `long[i]` both end at price index `long_period - 1 + i`.
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAveragePair {
    pub short: Vec<f64>,
    pub long: Vec<f64>,
}

impl MovingAveragePair {
    pub fn new(prices: &[f64], short_period: usize, long_period: usize) -> Result<Self> {
        if short_period >= long_period {
            return Err(IndicatorError::invalid(
                "short_ma_period",
                format!(
                    "short period ({}) must be smaller than long period ({})",
                    short_period, long_period
                ),
            ));
        }

        let long = sma_series(prices, long_period)?;
        let mut short = sma_series(prices, short_period)?;
        short.drain(..long_period - short_period);

        Ok(Self { short, long })
    }

    /// Price index the aligned position `i` ends on
    pub fn price_index(&self, i: usize, prices_len: usize) -> usize {
        prices_len - self.long.len() + i
    }

    pub fn len(&self) -> usize {
        self.long.len()
    }

    pub fn is_empty(&self) -> bool {
        self.long.is_empty()
    }
}
