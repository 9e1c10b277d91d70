//! Trade representation.

use crate::domain::error::GbceError;
use chrono::NaiveDateTime;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    Buy,
    Sell,
}

impl fmt::Display for Indicator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Indicator::Buy => write!(f, "B"),
            Indicator::Sell => write!(f, "S"),
        }
    }
}

/// Parses the `B` / `S` tokens. Anything else is an illegal trade.
impl FromStr for Indicator {
    type Err = GbceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "B" => Ok(Indicator::Buy),
            "S" => Ok(Indicator::Sell),
            other => Err(GbceError::IllegalTrade {
                ticker: String::new(),
                reason: format!("invalid indicator {other:?} (expected B or S)"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Trade {
    timestamp: NaiveDateTime,
    quantity: u64,
    indicator: Indicator,
    price: f64,
}

impl Trade {
    pub(crate) fn new(
        timestamp: NaiveDateTime,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) -> Self {
        Self {
            timestamp,
            quantity,
            indicator,
            price,
        }
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn indicator(&self) -> Indicator {
        self.indicator
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// price * quantity
    pub fn notional(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Inclusive at both ends.
    pub fn is_within(&self, from: NaiveDateTime, to: NaiveDateTime) -> bool {
        from <= self.timestamp && self.timestamp <= to
    }
}
