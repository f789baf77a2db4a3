// Technical indicators module
// Implements SMA, RSI and MACD for the crossover engine

pub mod macd;
pub mod moving_average;
pub mod rsi;

pub use macd::calculate_macd_histogram;
pub use moving_average::{calculate_sma, sma_series, MovingAveragePair};
pub use rsi::calculate_rsi;

use serde::Serialize;

use crate::error::IndicatorError;
use crate::Result;

/// Periods used by [`calculate_oscillators`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscillatorParams {
    pub rsi_period: usize,
    pub short_period: usize,
    pub long_period: usize,
    pub signal_period: usize,
}

/// RSI and MACD histogram computed over the same window
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Oscillators {
    pub rsi: f64,
    pub macd_histogram: f64,
}

/// Calculate RSI and MACD-minus-signal from one window of prices
///
/// The window must hold at least `rsi_period` prices.
pub fn calculate_oscillators(window: &[f64], params: &OscillatorParams) -> Result<Oscillators> {
    if window.len() < params.rsi_period {
        return Err(IndicatorError::insufficient(
            "RSI/MACD",
            params.rsi_period,
            window.len(),
        ));
    }

    let rsi = calculate_rsi(window, params.rsi_period)?;
    let macd_histogram = calculate_macd_histogram(
        window,
        params.short_period,
        params.long_period,
        params.signal_period,
    )?;

    Ok(Oscillators {
        rsi,
        macd_histogram,
    })
}
