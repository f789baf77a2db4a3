use thiserror::Error;

/// Faults raised by the indicator engine
#[derive(Debug, Clone, Error, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data for {indicator}: need {required} values, got {got}")]
    InsufficientData {
        indicator: &'static str,
        required: usize,
        got: usize,
    },

    #[error("Empty window passed to {indicator}")]
    EmptyWindow { indicator: &'static str },

    #[error("Invalid parameter {name}: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

impl IndicatorError {
    pub(crate) fn insufficient(indicator: &'static str, required: usize, got: usize) -> Self {
        Self::InsufficientData {
            indicator,
            required,
            got,
        }
    }

    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
