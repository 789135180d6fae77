use thiserror::Error;

/// Errors surfaced by the scanner.
///
/// Short history and degenerate indicator math are not errors; they resolve to
/// documented fallback values inside the indicator functions.
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid candle for {symbol}: {reason}")]
    InvalidCandle { symbol: String, reason: String },

    #[error("Out-of-order candle for {symbol}: {timestamp} is older than {last}")]
    OutOfOrderCandle {
        symbol: String,
        timestamp: i64,
        last: i64,
    },

    #[error("Unknown symbol: {0}")]
    UnknownSymbol(String),

    #[error("Market data store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
