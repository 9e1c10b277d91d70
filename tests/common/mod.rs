#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use gbce::domain::error::GbceError;
use gbce::domain::quant::Quant;
use gbce::ports::trade_port::{TradeRecord, TradeSource};

pub struct MockTradeSource {
    pub records: Vec<TradeRecord>,
    pub error: Option<String>,
}

impl MockTradeSource {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            error: None,
        }
    }

    pub fn with_trade(
        mut self,
        ticker: &str,
        timestamp: NaiveDateTime,
        quantity: u64,
        indicator: &str,
        price: f64,
    ) -> Self {
        let line = self.records.len() as u64 + 2;
        self.records.push(TradeRecord {
            line,
            ticker: ticker.to_string(),
            timestamp,
            quantity,
            indicator: indicator.to_string(),
            price,
        });
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl TradeSource for MockTradeSource {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GbceError> {
        if let Some(reason) = &self.error {
            return Err(GbceError::TradeFile {
                line: 0,
                reason: reason.clone(),
            });
        }
        Ok(self.records.clone())
    }
}

/// 2018-07-11 at the given time of day.
pub fn at(h: u32, m: u32, s: u32, micro: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2018, 7, 11)
        .unwrap()
        .and_hms_micro_opt(h, m, s, micro)
        .unwrap()
}

/// Per-ticker trade counts in registry order.
pub fn trade_counts(quant: &Quant) -> Vec<(String, Option<usize>)> {
    quant
        .registry()
        .all()
        .map(|(ticker, _)| (ticker.to_string(), quant.trades_for(ticker).map(<[_]>::len)))
        .collect()
}

/// The trades recorded in the reference GBCE index scenario.
pub fn record_index_scenario(quant: &mut Quant) {
    let trades = [
        ("TEA", at(17, 11, 26, 543), 1000, "B", 40.0),
        ("TEA", at(17, 12, 38, 42), 2000, "B", 90.0),
        ("TEA", at(17, 18, 8, 2), 1000, "S", 70.0),
        ("POP", at(17, 12, 16, 543), 1000, "B", 60.0),
        ("POP", at(17, 13, 38, 42), 2000, "B", 110.0),
        ("POP", at(17, 15, 8, 2), 1000, "B", 50.0),
        ("POP", at(17, 15, 9, 2), 1000, "S", 60.0),
        ("JOE", at(17, 10, 6, 543), 1000, "B", 70.0),
        ("JOE", at(17, 11, 5, 42), 2000, "B", 120.0),
        ("JOE", at(17, 11, 8, 2), 1000, "S", 50.0),
        ("JOE", at(17, 11, 9, 2), 1000, "B", 50.0),
        ("JOE", at(17, 11, 18, 2), 1000, "S", 55.0),
    ];
    for (ticker, ts, quantity, indicator, price) in trades {
        quant
            .record_trade(ticker, ts, quantity, indicator, price)
            .unwrap();
    }
}
