use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::strategy::signals::SignalConfig;

/// Prefix for environment overrides, e.g. `CROSSBOT_SIGNAL__RSI_PERIOD=10`
pub const ENV_PREFIX: &str = "CROSSBOT";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// tracing-subscriber filter directive
    pub log_filter: String,
    pub signal: SignalConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "crossbot=info".to_string(),
            signal: SignalConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an optional file, then `CROSSBOT_*` env vars
    ///
    /// Missing keys fall back to defaults. The signal section is validated
    /// before returning.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = ::config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(true));
        }

        let settings = builder
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .context("Failed to read configuration")?;

        let app: AppConfig = settings
            .try_deserialize()
            .context("Failed to parse configuration")?;

        app.signal
            .validate()
            .context("Invalid signal configuration")?;

        Ok(app)
    }
}
