use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;
use crate::indicators::{calculate_oscillators, MovingAveragePair, OscillatorParams};
use crate::models::{Crossover, CrossoverEvent, Signal};
use crate::Result;

/// Configuration for signal generation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignalConfig {
    pub short_ma_period: usize,
    pub long_ma_period: usize,
    pub signal_period: usize, // MACD signal line window
    pub rsi_period: usize,
    pub rsi_overbought: f64,
    pub rsi_oversold: f64,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            short_ma_period: 3,
            long_ma_period: 5,
            signal_period: 3,
            rsi_period: 14,
            rsi_overbought: 75.0,
            rsi_oversold: 25.0,
        }
    }
}

impl SignalConfig {
    /// Check periods and thresholds before any indicator runs
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("short_ma_period", self.short_ma_period),
            ("long_ma_period", self.long_ma_period),
            ("signal_period", self.signal_period),
            ("rsi_period", self.rsi_period),
        ];
        for (name, value) in periods {
            if value == 0 {
                return Err(IndicatorError::invalid(name, "must be non-zero"));
            }
        }

        if self.short_ma_period >= self.long_ma_period {
            return Err(IndicatorError::invalid(
                "short_ma_period",
                format!(
                    "must be smaller than long_ma_period ({} >= {})",
                    self.short_ma_period, self.long_ma_period
                ),
            ));
        }

        for (name, value) in [
            ("rsi_overbought", self.rsi_overbought),
            ("rsi_oversold", self.rsi_oversold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(IndicatorError::invalid(
                    name,
                    format!("must be within [0, 100], got {}", value),
                ));
            }
        }

        if self.rsi_oversold > self.rsi_overbought {
            return Err(IndicatorError::invalid(
                "rsi_oversold",
                format!(
                    "must not exceed rsi_overbought ({} > {})",
                    self.rsi_oversold, self.rsi_overbought
                ),
            ));
        }

        Ok(())
    }

    /// Minimum number of prices for a full analysis
    ///
    /// Two samples of the long MA plus one RSI window.
    ///
    /// # Example
    /// ```
    /// use crossbot::strategy::signals::SignalConfig;
    ///
    /// let config = SignalConfig::default();
    /// assert_eq!(config.min_prices_required(), 14);
    /// ```
    pub fn min_prices_required(&self) -> usize {
        (self.long_ma_period + 1).max(self.rsi_period)
    }

    pub fn oscillator_params(&self) -> OscillatorParams {
        OscillatorParams {
            rsi_period: self.rsi_period,
            short_period: self.short_ma_period,
            long_period: self.long_ma_period,
            signal_period: self.signal_period,
        }
    }
}

/// Signal plus the values that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignalReport {
    pub signal: Signal,
    pub crossover: Option<Crossover>,
    pub short_ma: f64,
    pub long_ma: f64,
    pub prev_short_ma: f64,
    pub prev_long_ma: f64,
    pub rsi: f64,
    pub macd_histogram: f64,
}

/// Detect a crossover between two consecutive MA samples
pub fn detect_crossover(
    prev_short: f64,
    prev_long: f64,
    cur_short: f64,
    cur_long: f64,
) -> Option<Crossover> {
    if cur_short > cur_long && prev_short <= prev_long {
        Some(Crossover::Bullish)
    } else if cur_short < cur_long && prev_short >= prev_long {
        Some(Crossover::Bearish)
    } else {
        None
    }
}

/// Confirm a crossover with RSI thresholds (inclusive on both sides)
pub fn confirm_crossover(crossover: Option<Crossover>, rsi: f64, config: &SignalConfig) -> Signal {
    match crossover {
        Some(Crossover::Bullish) if rsi <= config.rsi_oversold => Signal::Buy,
        Some(Crossover::Bearish) if rsi >= config.rsi_overbought => Signal::Sell,
        _ => Signal::Hold,
    }
}

/// Every crossover in an aligned MA pair, in order
pub fn find_crossovers(pair: &MovingAveragePair) -> Vec<CrossoverEvent> {
    pair.short
        .windows(2)
        .zip(pair.long.windows(2))
        .enumerate()
        .filter_map(|(i, (short, long))| {
            detect_crossover(short[0], long[0], short[1], long[1])
                .map(|kind| CrossoverEvent { index: i + 1, kind })
        })
        .collect()
}

/// Last and second-to-last samples of an MA series
fn last_two(series: &[f64], name: &'static str) -> Result<(f64, f64)> {
    match series {
        [.., prev, cur] => Ok((*prev, *cur)),
        _ => Err(IndicatorError::insufficient(name, 2, series.len())),
    }
}

/// Generate a report for the latest crossover and its RSI confirmation
pub fn evaluate_signal(
    prices: &[f64],
    short_ma: &[f64],
    long_ma: &[f64],
    config: &SignalConfig,
) -> Result<SignalReport> {
    let (prev_short_ma, short_ma) = last_two(short_ma, "short MA series")?;
    let (prev_long_ma, long_ma) = last_two(long_ma, "long MA series")?;

    if prices.len() < config.rsi_period {
        return Err(IndicatorError::insufficient(
            "RSI window",
            config.rsi_period,
            prices.len(),
        ));
    }
    let rsi_window = &prices[prices.len() - config.rsi_period..];
    let oscillators = calculate_oscillators(rsi_window, &config.oscillator_params())?;

    let crossover = detect_crossover(prev_short_ma, prev_long_ma, short_ma, long_ma);
    let signal = confirm_crossover(crossover, oscillators.rsi, config);

    tracing::debug!(
        "Indicators: Short MA={:.4} (prev {:.4}), Long MA={:.4} (prev {:.4}), RSI={:.1}, MACD hist={:.4}",
        short_ma,
        prev_short_ma,
        long_ma,
        prev_long_ma,
        oscillators.rsi,
        oscillators.macd_histogram
    );

    match (signal, crossover) {
        (Signal::Buy, _) => tracing::info!(
            "BUY: bullish crossover confirmed, RSI={:.1} <= {:.1}",
            oscillators.rsi,
            config.rsi_oversold
        ),
        (Signal::Sell, _) => tracing::info!(
            "SELL: bearish crossover confirmed, RSI={:.1} >= {:.1}",
            oscillators.rsi,
            config.rsi_overbought
        ),
        (Signal::Hold, Some(kind)) => tracing::debug!(
            "HOLD: {:?} crossover not confirmed by RSI={:.1}",
            kind,
            oscillators.rsi
        ),
        (Signal::Hold, None) => tracing::debug!("HOLD: no crossover"),
    }

    Ok(SignalReport {
        signal,
        crossover,
        short_ma,
        long_ma,
        prev_short_ma,
        prev_long_ma,
        rsi: oscillators.rsi,
        macd_histogram: oscillators.macd_histogram,
    })
}

/// Generate a trading signal from precomputed MA series
pub fn generate_signal(
    prices: &[f64],
    short_ma: &[f64],
    long_ma: &[f64],
    config: &SignalConfig,
) -> Result<Signal> {
    evaluate_signal(prices, short_ma, long_ma, config).map(|report| report.signal)
}

/// Run the whole pipeline over a raw price series
pub fn analyze_prices(prices: &[f64], config: &SignalConfig) -> Result<SignalReport> {
    config.validate()?;

    let pair = MovingAveragePair::new(prices, config.short_ma_period, config.long_ma_period)?;
    evaluate_signal(prices, &pair.short, &pair.long, config)
}
