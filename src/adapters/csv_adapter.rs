//! CSV trade file adapter.
//!
//! Expects a header row followed by
//! `ticker,timestamp,quantity,indicator,price` records, with timestamps in
//! the `DD-MM-YYYY:HH:MM:SS:fff` format.

use crate::domain::error::GbceError;
use crate::domain::timestamp::parse_timestamp;
use crate::ports::trade_port::{TradeRecord, TradeSource};
use std::fs;
use std::path::PathBuf;

pub struct CsvTradeAdapter {
    path: PathBuf,
}

impl CsvTradeAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TradeSource for CsvTradeAdapter {
    fn load_trades(&self) -> Result<Vec<TradeRecord>, GbceError> {
        let content = fs::read_to_string(&self.path).map_err(|e| GbceError::TradeFile {
            line: 0,
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        parse_trades(&content)
    }
}

pub fn parse_trades(content: &str) -> Result<Vec<TradeRecord>, GbceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());
    let mut trades = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| GbceError::TradeFile {
            line: e.position().map_or(0, |p| p.line()),
            reason: format!("CSV parse error: {}", e),
        })?;
        let line = record.position().map_or(0, |p| p.line());
        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| GbceError::TradeFile {
                line,
                reason: format!("missing {name} column"),
            })
        };

        let ticker = field(0, "ticker")?.to_string();
        let raw_ts = field(1, "timestamp")?;
        let timestamp = parse_timestamp(raw_ts).map_err(|e| GbceError::TradeFile {
            line,
            reason: e.to_string(),
        })?;
        let quantity: u64 = field(2, "quantity")?
            .parse()
            .map_err(|e| GbceError::TradeFile {
                line,
                reason: format!("invalid quantity value: {}", e),
            })?;
        let indicator = field(3, "indicator")?.to_string();
        let price: f64 = field(4, "price")?
            .parse()
            .map_err(|e| GbceError::TradeFile {
                line,
                reason: format!("invalid price value: {}", e),
            })?;

        trades.push(TradeRecord {
            line,
            ticker,
            timestamp,
            quantity,
            indicator,
            price,
        });
    }

    Ok(trades)
}
