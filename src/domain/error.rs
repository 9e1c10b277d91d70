//! Domain error types.

/// Top-level error type for gbce.
#[derive(Debug, thiserror::Error)]
pub enum GbceError {
    #[error("no stock data for {ticker}")]
    UnknownTicker { ticker: String },

    #[error("invalid input for {ticker}: {reason}")]
    InvalidInput { ticker: String, reason: String },

    #[error("illegal trade for {ticker}: {reason}")]
    IllegalTrade { ticker: String, reason: String },

    #[error("invalid stock type: {value} (expected Common or Preferred)")]
    InvalidStockType { value: String },

    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("trade file error at line {line}: {reason}")]
    TradeFile { line: u64, reason: String },
}

impl GbceError {
    pub(crate) fn illegal_trade(ticker: &str, reason: impl Into<String>) -> Self {
        GbceError::IllegalTrade {
            ticker: ticker.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn invalid_input(ticker: &str, reason: impl Into<String>) -> Self {
        GbceError::InvalidInput {
            ticker: ticker.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&GbceError> for std::process::ExitCode {
    fn from(err: &GbceError) -> Self {
        let code: u8 = match err {
            GbceError::ConfigParse { .. }
            | GbceError::ConfigInvalid { .. }
            | GbceError::InvalidStockType { .. } => 2,
            GbceError::TradeFile { .. } => 3,
            GbceError::UnknownTicker { .. } | GbceError::InvalidInput { .. } => 4,
            GbceError::IllegalTrade { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
