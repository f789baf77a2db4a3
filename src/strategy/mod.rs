// Trading strategy module
pub mod crossover;
pub mod signals;

use crate::models::Signal;
use crate::Result;

/// Base trait for all trading strategies
pub trait Strategy: Send + Sync {
    /// Generate a trading signal from an ordered price series
    fn generate_signal(&self, prices: &[f64]) -> Result<Signal>;

    /// Get strategy name
    fn name(&self) -> &str;

    /// Minimum prices required for this strategy
    fn min_prices_required(&self) -> usize;
}
