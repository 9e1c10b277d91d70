//! Query facade over the stock registry, trade ledger and metrics.
//!
//! A `Quant` owns one registry and one ledger. It is built explicitly by the
//! caller; wrap it in a `RwLock` if several threads need it.

use crate::domain::error::GbceError;
use crate::domain::ledger::TradeLedger;
use crate::domain::metrics::{self, Metric};
use crate::domain::registry::StockRegistry;
use crate::domain::seed::gbce_registry;
use crate::domain::stock::Stock;
use crate::domain::trade::{Indicator, Trade};
use chrono::{Duration, NaiveDateTime};

/// The four figures shown in a price report.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceReport {
    pub ticker: String,
    pub market_price: f64,
    pub dividend_yield: f64,
    pub pe_ratio: Metric,
    pub vwsp: Metric,
    pub gbce_index: Metric,
}

#[derive(Debug, Clone)]
pub struct Quant {
    registry: StockRegistry,
    ledger: TradeLedger,
}

impl Quant {
    pub fn new(registry: StockRegistry) -> Self {
        let ledger = TradeLedger::new(&registry);
        Self { registry, ledger }
    }

    /// Quant over the five GBCE sample stocks.
    pub fn gbce() -> Self {
        Self::new(gbce_registry())
    }

    pub fn registry(&self) -> &StockRegistry {
        &self.registry
    }

    pub fn ledger(&self) -> &TradeLedger {
        &self.ledger
    }

    pub fn add_stock(&mut self, stock: Stock) {
        self.registry.add(stock);
    }

    pub fn stock(&self, ticker: &str) -> Result<&Stock, GbceError> {
        self.registry
            .lookup(ticker)
            .ok_or_else(|| GbceError::UnknownTicker {
                ticker: ticker.to_string(),
            })
    }

    pub fn dividend_yield(&self, ticker: &str, market_price: f64) -> Result<f64, GbceError> {
        metrics::dividend_yield(self.stock(ticker)?, market_price)
    }

    pub fn price_earnings_ratio(&self, ticker: &str, market_price: f64) -> Result<Metric, GbceError> {
        Ok(metrics::price_earnings_ratio(self.stock(ticker)?, market_price))
    }

    /// Records a trade given its textual `B` / `S` indicator.
    pub fn record_trade(
        &mut self,
        ticker: &str,
        timestamp: NaiveDateTime,
        quantity: u64,
        indicator: &str,
        price: f64,
    ) -> Result<(), GbceError> {
        let indicator = indicator.parse::<Indicator>().map_err(|err| match err {
            GbceError::IllegalTrade { reason, .. } => GbceError::illegal_trade(ticker, reason),
            other => other,
        })?;
        self.record(ticker, timestamp, quantity, indicator, price)
    }

    pub fn record(
        &mut self,
        ticker: &str,
        timestamp: NaiveDateTime,
        quantity: u64,
        indicator: Indicator,
        price: f64,
    ) -> Result<(), GbceError> {
        self.ledger
            .record(&self.registry, ticker, timestamp, quantity, indicator, price)
    }

    pub fn trades_for(&self, ticker: &str) -> Option<&[Trade]> {
        self.ledger.trades_for(ticker)
    }

    /// Not applicable for tickers the ledger has never seen.
    pub fn volume_weighted_stock_price(
        &self,
        ticker: &str,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> Metric {
        metrics::volume_weighted_stock_price(self.ledger.trades_for(ticker), from, to)
    }

    pub fn gbce_index(&self, timestamp: NaiveDateTime, window: Duration) -> Metric {
        metrics::gbce_index(&self.registry, &self.ledger, timestamp, window)
    }

    /// Dividend yield and P/E at `market_price`, VWSP over `vwsp_window`
    /// and the index over `index_window`, both ending at `at`.
    pub fn price_report(
        &self,
        ticker: &str,
        market_price: f64,
        at: NaiveDateTime,
        vwsp_window: Duration,
        index_window: Duration,
    ) -> Result<PriceReport, GbceError> {
        Ok(PriceReport {
            ticker: ticker.to_string(),
            market_price,
            dividend_yield: self.dividend_yield(ticker, market_price)?,
            pe_ratio: self.price_earnings_ratio(ticker, market_price)?,
            vwsp: self.volume_weighted_stock_price(
                ticker,
                metrics::window_start(at, vwsp_window),
                at,
            ),
            gbce_index: self.gbce_index(at, index_window),
        })
    }
}
