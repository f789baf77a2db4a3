use super::{
    signals::{analyze_prices, SignalConfig, SignalReport},
    Strategy,
};
use crate::error::IndicatorError;
use crate::models::Signal;
use crate::Result;

/// Moving average crossover strategy
///
/// Signals when the short SMA crosses the long SMA:
/// - Bullish crossover confirmed by an oversold RSI -> Buy
/// - Bearish crossover confirmed by an overbought RSI -> Sell
///
/// The MACD histogram is reported alongside but does not vote.
#[derive(Debug, Clone, Default)]
pub struct CrossoverStrategy {
    config: SignalConfig,
}

impl CrossoverStrategy {
    pub fn new(config: SignalConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SignalConfig {
        &self.config
    }

    /// Full report for the latest sample
    pub fn analyze(&self, prices: &[f64]) -> Result<SignalReport> {
        if prices.len() < self.min_prices_required() {
            return Err(IndicatorError::insufficient(
                "crossover strategy",
                self.min_prices_required(),
                prices.len(),
            ));
        }

        analyze_prices(prices, &self.config)
    }
}

impl Strategy for CrossoverStrategy {
    fn generate_signal(&self, prices: &[f64]) -> Result<Signal> {
        self.analyze(prices).map(|report| report.signal)
    }

    fn name(&self) -> &str {
        "CrossoverStrategy"
    }

    fn min_prices_required(&self) -> usize {
        self.config.min_prices_required()
    }
}
