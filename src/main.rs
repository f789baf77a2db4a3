use anyhow::{bail, Context, Result};
use clap::{ArgGroup, Parser};
use crossbot::config::AppConfig;
use crossbot::indicators::MovingAveragePair;
use crossbot::strategy::crossover::CrossoverStrategy;
use crossbot::strategy::signals::{find_crossovers, SignalConfig};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "SMA crossover signal with RSI confirmation")]
#[command(group(ArgGroup::new("input").required(true).args(["prices", "file"])))]
struct Args {
    /// Comma-separated prices, oldest first
    #[arg(long, value_delimiter = ',')]
    prices: Vec<f64>,

    /// JSON file holding an array of prices, oldest first
    #[arg(long)]
    file: Option<PathBuf>,

    /// Configuration file (TOML, JSON or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Short SMA window
    #[arg(long)]
    short: Option<usize>,

    /// Long SMA window
    #[arg(long)]
    long: Option<usize>,

    /// MACD signal line window
    #[arg(long)]
    signal_period: Option<usize>,

    /// RSI period
    #[arg(long)]
    rsi_period: Option<usize>,

    /// RSI level confirming a bearish crossover
    #[arg(long)]
    overbought: Option<f64>,

    /// RSI level confirming a bullish crossover
    #[arg(long)]
    oversold: Option<f64>,

    /// Print the full report as JSON
    #[arg(long)]
    json: bool,
}

impl Args {
    /// CLI flags win over file and environment settings
    fn apply_overrides(&self, config: &mut SignalConfig) {
        if let Some(v) = self.short {
            config.short_ma_period = v;
        }
        if let Some(v) = self.long {
            config.long_ma_period = v;
        }
        if let Some(v) = self.signal_period {
            config.signal_period = v;
        }
        if let Some(v) = self.rsi_period {
            config.rsi_period = v;
        }
        if let Some(v) = self.overbought {
            config.rsi_overbought = v;
        }
        if let Some(v) = self.oversold {
            config.rsi_oversold = v;
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut app_config = AppConfig::load(args.config.as_deref())?;
    setup_logging(&app_config.log_filter);

    args.apply_overrides(&mut app_config.signal);
    app_config
        .signal
        .validate()
        .context("Invalid signal parameters")?;

    let prices = match &args.file {
        Some(path) => load_prices(path)?,
        None => args.prices.clone(),
    };
    validate_prices(&prices)?;

    tracing::info!(
        "Analyzing {} prices (short={}, long={}, rsi={})",
        prices.len(),
        app_config.signal.short_ma_period,
        app_config.signal.long_ma_period,
        app_config.signal.rsi_period
    );

    if let Ok(pair) = MovingAveragePair::new(
        &prices,
        app_config.signal.short_ma_period,
        app_config.signal.long_ma_period,
    ) {
        for event in find_crossovers(&pair) {
            tracing::debug!(
                "{:?} crossover at price index {}",
                event.kind,
                pair.price_index(event.index, prices.len())
            );
        }
    }

    let strategy = CrossoverStrategy::new(app_config.signal);
    let report = strategy
        .analyze(&prices)
        .context("Failed to generate signal")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.signal);
    }

    Ok(())
}

fn setup_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_prices(path: &Path) -> Result<Vec<f64>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read price file {}", path.display()))?;
    let prices: Vec<f64> = serde_json::from_str(&raw)
        .with_context(|| format!("Price file {} is not a JSON array of numbers", path.display()))?;
    Ok(prices)
}

fn validate_prices(prices: &[f64]) -> Result<()> {
    if prices.is_empty() {
        bail!("No prices supplied");
    }
    if let Some((i, p)) = prices
        .iter()
        .enumerate()
        .find(|(_, p)| !p.is_finite() || **p < 0.0)
    {
        bail!("Price at index {} must be a finite non-negative number, got {}", i, p);
    }
    Ok(())
}
