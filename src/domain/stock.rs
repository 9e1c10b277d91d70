//! Stock fundamentals for a single ticker.

use crate::domain::error::GbceError;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StockType {
    #[default]
    Common,
    Preferred,
}

impl fmt::Display for StockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StockType::Common => write!(f, "Common"),
            StockType::Preferred => write!(f, "Preferred"),
        }
    }
}

impl FromStr for StockType {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Common" => Ok(StockType::Common),
            "Preferred" => Ok(StockType::Preferred),
            other => Err(GbceError::InvalidStockType {
                value: other.to_string(),
            }),
        }
    }
}

/// Fundamentals for one ticker.
///
/// `Stock::new` starts from the defaults: Common, no last dividend, no fixed
/// dividend, zero par value. The builder methods override individual fields.
/// The ticker cannot change once the stock exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Stock {
    ticker: String,
    pub stock_type: StockType,
    pub last_dividend: f64,
    /// Fraction of par value, e.g. `0.02` for 2%.
    pub fixed_dividend: Option<f64>,
    pub par_value: f64,
}

impl Stock {
    pub fn new(ticker: impl Into<String>) -> Self {
        Self {
            ticker: ticker.into(),
            stock_type: StockType::Common,
            last_dividend: 0.0,
            fixed_dividend: None,
            par_value: 0.0,
        }
    }

    pub fn with_type(mut self, stock_type: StockType) -> Self {
        self.stock_type = stock_type;
        self
    }

    pub fn with_last_dividend(mut self, last_dividend: f64) -> Self {
        self.last_dividend = last_dividend;
        self
    }

    pub fn with_fixed_dividend(mut self, fixed_dividend: f64) -> Self {
        self.fixed_dividend = Some(fixed_dividend);
        self
    }

    pub fn with_par_value(mut self, par_value: f64) -> Self {
        self.par_value = par_value;
        self
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    pub fn is_preferred(&self) -> bool {
        self.stock_type == StockType::Preferred
    }
}
