//! Configuration management for hedgecalc
//!
//! Loads from YAML files + environment variables via .env

use anyhow::{Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File, FileFormat};
use serde::Deserialize;

use crate::types::{HedgeInputs, DEFAULT_UPSIDE_INCREASE};

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub calculator: CalculatorConfig,
    pub report: ReportConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorConfig {
    /// Current asset price ($)
    pub asset_price: f64,
    /// Downside target price ($)
    pub target_price: f64,
    /// Quoted Yes share price. Shown in the report only, the allocation never reads it.
    pub yes_share_price: f64,
    /// Quoted No share price ($, 0 - 1)
    pub no_share_price: f64,
    /// Leverage on the asset purchase only
    pub leverage: f64,
    /// Predicted price increase for No shares (e.g., 0.01 = 1%)
    pub slippage: f64,
    /// Total investment amount ($)
    pub total_investment: f64,
    /// Asset price increase for the best case (e.g., 0.02 = 2%)
    pub upside_increase: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Asset name used in report labels
    pub asset_label: String,
    /// Output format (text, json)
    pub format: ReportFormat,
    /// Extra upside increases to evaluate the best case at
    pub upside_ladder: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, RUST_LOG takes precedence
    pub level: String,
    /// Emit JSON log lines
    pub json: bool,
}

impl AppConfig {
    /// Load configuration from file and environment
    pub fn load() -> Result<Self> {
        // Load .env file first
        dotenvy::dotenv().ok();

        let config = Self::defaults()?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // Override with environment variables (HEDGECALC_*)
            .add_source(Self::environment())
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Build configuration from defaults overlaid with a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config = Self::defaults()?
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// HEDGECALC__SECTION__KEY variables; the ladder takes a comma-separated list
    fn environment() -> Environment {
        Environment::with_prefix("HEDGECALC")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("report.upside_ladder")
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = Config::builder()
            // Calculator defaults
            .set_default("calculator.asset_price", 66305.80)?
            .set_default("calculator.target_price", 65000.0)?
            .set_default("calculator.yes_share_price", 0.81)?
            .set_default("calculator.no_share_price", 0.28)?
            .set_default("calculator.leverage", 1.0)?
            .set_default("calculator.slippage", 0.0)?
            .set_default("calculator.total_investment", 100000.0)?
            .set_default("calculator.upside_increase", DEFAULT_UPSIDE_INCREASE)?
            // Report defaults
            .set_default("report.asset_label", "COIN")?
            .set_default("report.format", "text")?
            .set_default("report.upside_ladder", Vec::<f64>::new())?
            // Logging defaults
            .set_default("logging.level", "info")?
            .set_default("logging.json", false)?;
        Ok(builder)
    }

    /// Engine inputs for this configuration
    pub fn inputs(&self) -> HedgeInputs {
        let c = &self.calculator;
        HedgeInputs {
            asset_price: c.asset_price,
            target_price: c.target_price,
            leverage: c.leverage,
            no_share_price: c.no_share_price,
            slippage: c.slippage,
            total_investment: c.total_investment,
            upside_increase: c.upside_increase,
        }
    }

    /// One-line summary of the config for logging
    pub fn digest(&self) -> String {
        let c = &self.calculator;
        format!(
            "asset={:.2} target={:.2} lev={} no={:.4} slip={:.4} total={:.2} upside={:.4} format={:?}",
            c.asset_price,
            c.target_price,
            c.leverage,
            c.no_share_price,
            c.slippage,
            c.total_investment,
            c.upside_increase,
            self.report.format
        )
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.digest())
    }
}
