// Core modules
pub mod config;
pub mod error;
pub mod indicators;
pub mod models;
pub mod strategy;

// Re-export commonly used types
pub use error::IndicatorError;
pub use models::*;
pub use strategy::signals::{analyze_prices, generate_signal, SignalConfig, SignalReport};
pub use strategy::Strategy;

// Error handling
pub type Result<T> = std::result::Result<T, IndicatorError>;
