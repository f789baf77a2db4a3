use crossbot::indicators::{
    calculate_oscillators, calculate_rsi, calculate_sma, sma_series, MovingAveragePair,
};
use crossbot::strategy::crossover::CrossoverStrategy;
use crossbot::strategy::signals::{find_crossovers, generate_signal};
use crossbot::*;

const PEAK_PRICES: [f64; 10] = [
    100.0, 110.0, 120.0, 130.0, 140.0, 130.0, 120.0, 110.0, 100.0, 90.0,
];

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}

#[test]
fn test_peak_scenario_moving_averages() {
    let _ = tracing_subscriber::fmt::try_init();

    let short = sma_series(&PEAK_PRICES, 3).unwrap();
    let long = sma_series(&PEAK_PRICES, 5).unwrap();

    assert_eq!(short.len(), PEAK_PRICES.len() - 3 + 1);
    assert_eq!(long.len(), PEAK_PRICES.len() - 5 + 1);

    let expected_short = [110.0, 120.0, 130.0, 400.0 / 3.0, 130.0, 120.0, 110.0, 100.0];
    for (actual, expected) in short.iter().zip(expected_short) {
        assert_close(*actual, expected);
    }

    let expected_long = [120.0, 126.0, 128.0, 126.0, 120.0, 110.0];
    for (actual, expected) in long.iter().zip(expected_long) {
        assert_close(*actual, expected);
    }
}

#[test]
fn test_peak_scenario_single_bearish_crossover() {
    let pair = MovingAveragePair::new(&PEAK_PRICES, 3, 5).unwrap();
    let events = find_crossovers(&pair);

    assert_eq!(events.len(), 1);
    assert_eq!(events[0].kind, Crossover::Bearish);
    // Short MA (120) drops below long MA (126) on the window ending at 110,
    // after staying above it through the 140 -> 130 -> 120 decline
    assert_eq!(events[0].index, 3);
    assert_eq!(pair.price_index(events[0].index, PEAK_PRICES.len()), 7);
    assert_close(pair.short[3], 120.0);
    assert_close(pair.long[3], 126.0);
}

#[test]
fn test_peak_scenario_surfaces_insufficient_data() {
    let config = SignalConfig::default();
    let short = sma_series(&PEAK_PRICES, config.short_ma_period).unwrap();
    let long = sma_series(&PEAK_PRICES, config.long_ma_period).unwrap();

    let result = generate_signal(&PEAK_PRICES, &short, &long, &config);
    assert!(matches!(
        result,
        Err(IndicatorError::InsufficientData {
            required: 14,
            got: 10,
            ..
        })
    ));

    let report = analyze_prices(&PEAK_PRICES, &config);
    assert!(report.is_err());

    let strategy = CrossoverStrategy::default();
    assert!(strategy.generate_signal(&PEAK_PRICES).is_err());
}

#[test]
fn test_rsi_extremes() {
    let rising: Vec<f64> = (10..=24).map(|p| p as f64).collect();
    let falling: Vec<f64> = rising.iter().rev().copied().collect();

    assert_eq!(calculate_rsi(&rising, 14), Ok(100.0));
    assert_eq!(calculate_rsi(&falling, 14), Ok(0.0));
}

#[test]
fn test_rsi_trends_with_direction() {
    // Mostly rising with a couple of dips
    let mostly_up = [
        10.0, 11.0, 12.0, 11.5, 13.0, 14.0, 15.0, 14.5, 16.0, 17.0, 18.0, 19.0, 20.0, 21.0,
    ];
    let mostly_down: Vec<f64> = mostly_up.iter().map(|p| 40.0 - p).collect();

    let up = calculate_rsi(&mostly_up, 14).unwrap();
    let down = calculate_rsi(&mostly_down, 14).unwrap();
    assert!(up > 90.0, "rsi {}", up);
    assert!(down < 10.0, "rsi {}", down);
    assert_close(up + down, 100.0);
}

#[test]
fn test_full_pipeline_buy_and_sell() {
    let config = SignalConfig {
        rsi_oversold: 40.0,
        rsi_overbought: 60.0,
        ..Default::default()
    };

    let mut slide: Vec<f64> = (0..16).map(|i| 200.0 - i as f64 * 5.0).collect();
    slide.extend([124.0, 150.0]);
    let buy = analyze_prices(&slide, &config).unwrap();
    assert_eq!(buy.signal, Signal::Buy);
    assert_eq!(buy.crossover, Some(Crossover::Bullish));
    assert!(buy.rsi <= 40.0);

    let mut rally: Vec<f64> = (0..16).map(|i| 100.0 + i as f64 * 5.0).collect();
    rally.extend([176.0, 150.0]);
    let sell = analyze_prices(&rally, &config).unwrap();
    assert_eq!(sell.signal, Signal::Sell);
    assert_eq!(sell.crossover, Some(Crossover::Bearish));
    assert!(sell.rsi >= 60.0);
    assert_close(buy.rsi + sell.rsi, 100.0);
}

#[test]
fn test_report_serializes() {
    let prices: Vec<f64> = (0..20).map(|i| 100.0 + i as f64).collect();
    let report = analyze_prices(&prices, &SignalConfig::default()).unwrap();
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["signal"], "Hold");
    assert!(json["crossover"].is_null());
    assert_eq!(json["rsi"], 100.0);
}

#[test]
fn test_components_are_stateless() {
    let prices: Vec<f64> = (0..25)
        .map(|i| 100.0 + (i as f64 * 0.7).sin() * 10.0)
        .collect();
    let config = SignalConfig::default();
    let params = config.oscillator_params();

    assert_eq!(calculate_sma(&prices), calculate_sma(&prices));
    assert_eq!(
        calculate_oscillators(&prices[prices.len() - 14..], &params),
        calculate_oscillators(&prices[prices.len() - 14..], &params)
    );
    assert_eq!(
        analyze_prices(&prices, &config),
        analyze_prices(&prices, &config)
    );
}
