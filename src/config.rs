use al_income_core::{currency_to_decimal, IncomeResult, PeriodLabels};
use al_income_render::BasicRenderer;
use once_cell::sync::{Lazy, OnceCell};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

static CONFIG: OnceCell<Config> = OnceCell::new();

static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Host settings, supplied once at startup through [`configure`].
#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Fractional digits of the local currency.
    pub frac_digits: u32,
    /// "Times per year" choices, used to describe periods.
    pub period_labels: PeriodLabels,
    /// Extra `EnvFilter` directive for [`crate::init_tracing`].
    pub log_filter: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            frac_digits: 2,
            period_labels: PeriodLabels::default(),
            log_filter: None,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Converts a host float into an exact amount at the currency's
    /// precision.
    pub fn to_decimal(&self, value: f64) -> IncomeResult<Decimal> {
        currency_to_decimal(value, self.frac_digits)
    }

    /// A renderer describing periods with this configuration's labels.
    pub fn renderer(&self) -> BasicRenderer {
        BasicRenderer::with_labels(self.period_labels.clone())
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("configure() was already called")]
    AlreadyConfigured,
}

/// Installs the host configuration. Only the first call takes effect.
pub fn configure(config: Config) -> Result<(), ConfigError> {
    CONFIG
        .set(config)
        .map_err(|_| ConfigError::AlreadyConfigured)?;
    debug!("al-income configured");
    Ok(())
}

/// The configuration passed to [`configure`], or the defaults.
pub fn config() -> &'static Config {
    CONFIG.get().unwrap_or(&*DEFAULT_CONFIG)
}
