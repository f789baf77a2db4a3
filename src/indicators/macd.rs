use std::collections::VecDeque;

use crate::error::IndicatorError;
use crate::Result;

/// Calculate the MACD line minus its signal line (the MACD histogram)
///
/// The long EMA is a plain recurrence seeded from the first price. The short
/// EMA is rebuilt every step from a buffer holding the last `short_period`
/// raw prices: it restarts from the oldest buffered price and runs over the
/// rest of the buffer. It only counts as available once the buffer is full.
///
/// MACD values go into a rolling window of `signal_period` entries. The first
/// time that window fills, the result is `current MACD - mean(window)` and the
/// remaining prices are not looked at. If the prices run out first the
/// result is 0.0.
pub fn calculate_macd_histogram(
    window: &[f64],
    short_period: usize,
    long_period: usize,
    signal_period: usize,
) -> Result<f64> {
    if short_period == 0 || long_period == 0 || signal_period == 0 {
        return Err(IndicatorError::invalid(
            "macd_periods",
            format!(
                "MACD periods must be non-zero (short {}, long {}, signal {})",
                short_period, long_period, signal_period
            ),
        ));
    }

    let (&seed, rest) = window
        .split_first()
        .ok_or(IndicatorError::EmptyWindow { indicator: "MACD" })?;

    let short_factor = 2.0 / (short_period as f64 + 1.0);
    let long_factor = 2.0 / (long_period as f64 + 1.0);

    let mut long_ema = seed;
    let mut short_buffer: VecDeque<f64> = VecDeque::with_capacity(short_period);
    short_buffer.push_back(seed);
    let mut macd_window: VecDeque<f64> = VecDeque::with_capacity(signal_period);

    for &price in rest {
        long_ema = long_factor * price + (1.0 - long_factor) * long_ema;

        if short_buffer.len() == short_period {
            short_buffer.pop_front();
        }
        short_buffer.push_back(price);

        if short_buffer.len() < short_period {
            continue;
        }
        let short_ema = reseeded_ema(&short_buffer, short_factor);

        if macd_window.len() == signal_period {
            macd_window.pop_front();
        }
        let macd = short_ema - long_ema;
        macd_window.push_back(macd);

        if macd_window.len() == signal_period {
            let signal = macd_window.iter().sum::<f64>() / signal_period as f64;
            return Ok(macd - signal);
        }
    }

    Ok(0.0)
}

/// EMA restarted from the oldest buffered price
fn reseeded_ema(buffer: &VecDeque<f64>, factor: f64) -> f64 {
    let mut prices = buffer.iter();
    let Some(&first) = prices.next() else {
        return 0.0;
    };
    prices.fold(first, |ema, &price| factor * price + (1.0 - factor) * ema)
}
