//! Per-ticker trade storage.
//!
//! Trades are kept in append order. A ticker known to the ledger with no
//! trades yields an empty slice; a ticker the ledger has never seen yields
//! `None`.

use crate::domain::error::GbceError;
use crate::domain::registry::StockRegistry;
use crate::domain::trade::{Indicator, Trade};
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct TradeLedger {
    trades: HashMap<String, Vec<Trade>>,
}

impl TradeLedger {
    /// Starts an empty sequence for every ticker currently in `registry`.
    pub fn new(registry: &StockRegistry) -> Self {
        let trades = registry
            .all()
            .map(|(ticker, _)| (ticker.to_string(), Vec::new()))
            .collect();
        Self { trades }
    }

    /// Validates and appends one trade. Nothing is stored on failure.
    pub fn record(
        &mut self,
        registry: &StockRegistry,
        ticker: &str,
        timestamp: NaiveDateTime,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) -> Result<(), GbceError> {
        if let Err(err) = validate(registry, ticker, quantity, price) {
            warn!(ticker, %err, "trade rejected");
            return Err(err);
        }

        let trade = Trade::new(timestamp, quantity, indicator, price);
        self.trades
            .entry(ticker.to_string())
            .or_default()
            .push(trade);
        debug!(ticker, %timestamp, quantity, %indicator, price, "trade recorded");
        Ok(())
    }

    pub fn trades_for(&self, ticker: &str) -> Option<&[Trade]> {
        self.trades.get(ticker).map(Vec::as_slice)
    }

    pub fn total_trades(&self) -> usize {
        self.trades.values().map(Vec::len).sum()
    }
}

fn validate(
    registry: &StockRegistry,
    ticker: &str,
    quantity: u64,
    price: f64,
) -> Result<(), GbceError> {
    if !registry.contains(ticker) {
        return Err(GbceError::illegal_trade(ticker, "unknown ticker"));
    }
    if quantity == 0 {
        return Err(GbceError::illegal_trade(ticker, "quantity must be positive"));
    }
    if !price.is_finite() || price <= 0.0 {
        return Err(GbceError::illegal_trade(
            ticker,
            format!("price must be a positive number, got {price}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::stock::Stock;
    use chrono::NaiveDate;

    fn registry() -> StockRegistry {
        let mut registry = StockRegistry::new();
        registry.add(Stock::new("TEA"));
        registry.add(Stock::new("POP"));
        registry
    }

    fn ts(minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2018, 7, 11)
            .unwrap()
            .and_hms_opt(17, minute, 0)
            .unwrap()
    }

    #[test]
    fn fresh_ledger_has_empty_sequences_for_known_tickers() {
        let ledger = TradeLedger::new(&registry());
        assert_eq!(ledger.trades_for("TEA"), Some(&[][..]));
        assert!(ledger.trades_for("Foo").is_none());
        assert_eq!(ledger.total_trades(), 0);
    }

    #[test]
    fn record_appends_in_order() {
        let registry = registry();
        let mut ledger = TradeLedger::new(&registry);
        ledger
            .record(&registry, "TEA", ts(1), 1999, Indicator::Buy, 343.2)
            .unwrap();
        ledger
            .record(&registry, "TEA", ts(2), 2010, Indicator::Sell, 341.5)
            .unwrap();

        let trades = ledger.trades_for("TEA").unwrap();
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].quantity(), 1999);
        assert_eq!(trades[1].indicator(), Indicator::Sell);
        assert_eq!(ledger.trades_for("POP").unwrap().len(), 0);
    }

    #[test]
    fn record_unknown_ticker_is_illegal() {
        let registry = registry();
        let mut ledger = TradeLedger::new(&registry);
        let err = ledger
            .record(&registry, "Foo", ts(1), 1999, Indicator::Buy, 343.2)
            .unwrap_err();
        assert!(matches!(err, GbceError::IllegalTrade { ticker, .. } if ticker == "Foo"));
        assert!(ledger.trades_for("Foo").is_none());
        assert_eq!(ledger.total_trades(), 0);
    }

    #[test]
    fn record_zero_quantity_is_illegal() {
        let registry = registry();
        let mut ledger = TradeLedger::new(&registry);
        let result = ledger.record(&registry, "TEA", ts(1), 0, Indicator::Buy, 10.0);
        assert!(matches!(result, Err(GbceError::IllegalTrade { .. })));
        assert_eq!(ledger.total_trades(), 0);
    }

    #[test]
    fn record_non_positive_price_is_illegal() {
        let registry = registry();
        let mut ledger = TradeLedger::new(&registry);
        for price in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = ledger.record(&registry, "TEA", ts(1), 10, Indicator::Buy, price);
            assert!(matches!(result, Err(GbceError::IllegalTrade { .. })));
        }
        assert_eq!(ledger.trades_for("TEA").unwrap().len(), 0);
    }

    #[test]
    fn ticker_added_after_construction_gets_a_sequence_on_first_trade() {
        let mut registry = registry();
        let mut ledger = TradeLedger::new(&registry);
        registry.add(Stock::new("ALE"));
        assert!(ledger.trades_for("ALE").is_none());

        ledger
            .record(&registry, "ALE", ts(3), 5, Indicator::Buy, 12.5)
            .unwrap();
        assert_eq!(ledger.trades_for("ALE").unwrap().len(), 1);
    }
}
