//! In-memory registry of stock fundamentals keyed by ticker.

use crate::domain::stock::{Stock, StockType};
use std::collections::HashMap;

/// Tickers are case-sensitive. Iteration follows first-insertion order; a
/// re-added ticker replaces its stock in place.
#[derive(Debug, Clone, Default)]
pub struct StockRegistry {
    stocks: Vec<Stock>,
    index: HashMap<String, usize>,
}

impl StockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, stock: Stock) {
        if let Some(&slot) = self.index.get(stock.ticker()) {
            self.stocks[slot] = stock;
            return;
        }
        self.index
            .insert(stock.ticker().to_string(), self.stocks.len());
        self.stocks.push(stock);
    }

    /// Adds a stock from optional fundamentals. Missing or zero values keep
    /// the `Stock::new` defaults.
    pub fn add_stock(
        &mut self,
        ticker: &str,
        stock_type: Option<StockType>,
        last_dividend: Option<f64>,
        fixed_dividend: Option<f64>,
        par_value: Option<f64>,
    ) {
        let mut stock = Stock::new(ticker);
        if let Some(t) = stock_type {
            stock = stock.with_type(t);
        }
        if let Some(d) = last_dividend.filter(|d| *d != 0.0) {
            stock = stock.with_last_dividend(d);
        }
        if let Some(f) = fixed_dividend.filter(|f| *f != 0.0) {
            stock = stock.with_fixed_dividend(f);
        }
        if let Some(p) = par_value.filter(|p| *p != 0.0) {
            stock = stock.with_par_value(p);
        }
        self.add(stock);
    }

    pub fn lookup(&self, ticker: &str) -> Option<&Stock> {
        self.index.get(ticker).map(|&slot| &self.stocks[slot])
    }

    pub fn contains(&self, ticker: &str) -> bool {
        self.index.contains_key(ticker)
    }

    pub fn count(&self) -> usize {
        self.stocks.len()
    }

    /// Each call returns a fresh iterator over `(ticker, stock)` pairs.
    pub fn all(&self) -> impl Iterator<Item = (&str, &Stock)> + '_ {
        self.stocks.iter().map(|s| (s.ticker(), s))
    }
}
