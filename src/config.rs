//! Scanner configuration loaded from the environment.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScanError};
use crate::models::params::{AnalysisMode, RiskLevel, Timeframe};

/// Pairs scanned when `SCAN_SYMBOLS` is unset.
pub const DEFAULT_SYMBOLS: [&str; 30] = [
    "BTCUSDT", "ETHUSDT", "BNBUSDT", "ADAUSDT", "XRPUSDT", "SOLUSDT", "DOTUSDT", "DOGEUSDT",
    "AVAXUSDT", "SHIBUSDT", "MATICUSDT", "LTCUSDT", "UNIUSDT", "LINKUSDT", "ATOMUSDT", "ETCUSDT",
    "XLMUSDT", "BCHUSDT", "FILUSDT", "TRXUSDT", "EOSUSDT", "AAVEUSDT", "GRTUSDT", "MKRUSDT",
    "COMPUSDT", "YFIUSDT", "SUSHIUSDT", "1INCHUSDT", "CRVUSDT", "SNXUSDT",
];

pub const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Deployment environment name from `ENVIRONMENT`, defaulting to `sandbox`.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT")
        .map(|v| v.trim().to_ascii_lowercase())
        .unwrap_or_else(|_| "sandbox".to_string())
}

/// Lookback periods for the indicator engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub rsi_period: usize,
    pub macd_fast: usize,
    pub macd_slow: usize,
    pub macd_signal: usize,
    pub bollinger_period: usize,
    pub bollinger_std_dev: f64,
    pub volume_window: usize,
    pub levels_window: usize,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_std_dev: 2.0,
            volume_window: 20,
            levels_window: 20,
        }
    }
}

impl IndicatorConfig {
    /// Fewest candles that cover every lookback without falling back.
    pub fn min_history(&self) -> usize {
        [
            self.rsi_period + 1,
            self.macd_slow,
            self.bollinger_period,
            self.volume_window,
            self.levels_window,
        ]
        .into_iter()
        .max()
        .unwrap_or(1)
    }

    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("rsi_period", self.rsi_period),
            ("macd_fast", self.macd_fast),
            ("macd_slow", self.macd_slow),
            ("macd_signal", self.macd_signal),
            ("bollinger_period", self.bollinger_period),
            ("volume_window", self.volume_window),
            ("levels_window", self.levels_window),
        ];
        if let Some((name, _)) = periods.iter().find(|(_, p)| *p == 0) {
            return Err(ScanError::Config(format!("{} must be > 0", name)));
        }
        if self.macd_fast >= self.macd_slow {
            return Err(ScanError::Config(format!(
                "macd_fast ({}) must be below macd_slow ({})",
                self.macd_fast, self.macd_slow
            )));
        }
        if !(self.bollinger_std_dev.is_finite() && self.bollinger_std_dev > 0.0) {
            return Err(ScanError::Config(
                "bollinger_std_dev must be a positive number".to_string(),
            ));
        }
        Ok(())
    }
}

/// Everything one scan pass needs besides market data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScannerConfig {
    pub environment: String,
    pub analysis_mode: AnalysisMode,
    pub risk_level: RiskLevel,
    pub min_volume: f64,
    pub timeframe: Timeframe,
    pub symbols: Vec<String>,
    pub history_limit: usize,
    pub indicators: IndicatorConfig,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            environment: "sandbox".to_string(),
            analysis_mode: AnalysisMode::Swing,
            risk_level: RiskLevel::Medium,
            min_volume: 0.0,
            timeframe: Timeframe::OneHour,
            symbols: DEFAULT_SYMBOLS.iter().map(|s| s.to_string()).collect(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            indicators: IndicatorConfig::default(),
        }
    }
}

impl ScannerConfig {
    /// Load `.env` if present, then read the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(environment) = lookup("ENVIRONMENT") {
            config.environment = environment.trim().to_ascii_lowercase();
        }
        if let Some(mode) = lookup("ANALYSIS_MODE") {
            config.analysis_mode = parse_setting("ANALYSIS_MODE", &mode)?;
        }
        if let Some(risk) = lookup("RISK_LEVEL") {
            config.risk_level = parse_setting("RISK_LEVEL", &risk)?;
        }
        if let Some(min_volume) = lookup("MIN_VOLUME") {
            config.min_volume = min_volume
                .trim()
                .parse::<f64>()
                .map_err(|e| ScanError::Config(format!("MIN_VOLUME '{}': {}", min_volume, e)))?;
        }
        if let Some(timeframe) = lookup("TIMEFRAME") {
            config.timeframe = parse_setting("TIMEFRAME", &timeframe)?;
        }
        if let Some(symbols) = lookup("SCAN_SYMBOLS") {
            config.symbols = symbols
                .split(',')
                .map(|s| s.trim().to_ascii_uppercase())
                .filter(|s| !s.is_empty())
                .collect();
        }
        if let Some(limit) = lookup("HISTORY_LIMIT") {
            config.history_limit = limit
                .trim()
                .parse::<usize>()
                .map_err(|e| ScanError::Config(format!("HISTORY_LIMIT '{}': {}", limit, e)))?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn is_production(&self) -> bool {
        matches!(self.environment.as_str(), "production" | "prod")
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.min_volume.is_finite() && self.min_volume >= 0.0) {
            return Err(ScanError::Config(format!(
                "min_volume must be a non-negative number, got {}",
                self.min_volume
            )));
        }
        if self.symbols.is_empty() {
            return Err(ScanError::Config("symbol list is empty".to_string()));
        }
        if self.history_limit < self.indicators.min_history() {
            return Err(ScanError::Config(format!(
                "history_limit ({}) is below the indicator lookback ({})",
                self.history_limit,
                self.indicators.min_history()
            )));
        }
        self.indicators.validate()
    }
}

fn parse_setting<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr<Err = ScanError>,
{
    value
        .parse::<T>()
        .map_err(|e| ScanError::Config(format!("{}: {}", key, e)))
}
