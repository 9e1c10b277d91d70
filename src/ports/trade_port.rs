//! Bulk trade input port trait.

use crate::domain::error::GbceError;
use chrono::NaiveDateTime;

/// One trade as read from an external source, not yet validated by the
/// ledger. The indicator stays textual so the ledger decides its legality.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub line: u64,
    pub ticker: String,
    pub timestamp: NaiveDateTime,
    pub quantity: u64,
    pub indicator: String,
    pub price: f64,
}

pub trait TradeSource {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GbceError>;
}
