use serde::{Deserialize, Serialize};
use std::fmt;

/// Trading signal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Signal {
    Buy,
    Sell,
    Hold,
}

impl Signal {
    /// Human-readable message for console output
    pub fn message(&self) -> &'static str {
        match self {
            Signal::Buy => "Buy signal generated!",
            Signal::Sell => "Sell signal generated!",
            Signal::Hold => "No signal generated.",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Direction of a moving average crossover
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Crossover {
    /// Short MA moved from at-or-below to above the long MA
    Bullish,
    /// Short MA moved from at-or-above to below the long MA
    Bearish,
}

/// A crossover found in an aligned MA pair
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct CrossoverEvent {
    /// Aligned position of the sample where the crossover completed
    pub index: usize,
    pub kind: Crossover,
}
