//! Configuration validation.
//!
//! Checks the `[exchange]`, `[stocks]` and `[report]` sections before the
//! registry is built or a report is produced.

use crate::domain::error::GbceError;
use crate::domain::stock::{Stock, StockType};
use crate::ports::config_port::ConfigPort;
use chrono::Duration;

pub const DEFAULT_VWSP_WINDOW_MINUTES: i64 = 15;
pub const DEFAULT_INDEX_WINDOW_MINUTES: i64 = 60;

pub fn validate_config(config: &dyn ConfigPort) -> Result<(), GbceError> {
    validate_seed_flag(config)?;
    validate_stocks(config)?;
    validate_window(config, "vwsp_window_minutes")?;
    validate_window(config, "index_window_minutes")?;
    Ok(())
}

/// Parses a `[stocks]` entry of the form
/// `type, last_dividend, fixed_dividend, par_value`.
///
/// Trailing fields may be omitted and any numeric field may be left blank,
/// in which case the `Stock::new` default applies.
pub fn parse_stock_entry(ticker: &str, value: &str) -> Result<Stock, GbceError> {
    let invalid = |reason: String| GbceError::ConfigInvalid {
        section: "stocks".to_string(),
        key: ticker.to_string(),
        reason,
    };

    if ticker.trim().is_empty() {
        return Err(invalid("ticker must not be empty".to_string()));
    }

    let fields: Vec<&str> = value.split(',').map(str::trim).collect();
    if fields.len() > 4 {
        return Err(invalid(format!(
            "expected at most 4 fields (type, last_dividend, fixed_dividend, par_value), got {}",
            fields.len()
        )));
    }

    let mut stock = Stock::new(ticker.trim());
    if let Some(kind) = fields.first().filter(|f| !f.is_empty()) {
        let stock_type: StockType = kind.parse().map_err(|e: GbceError| invalid(e.to_string()))?;
        stock = stock.with_type(stock_type);
    }

    let number = |idx: usize, name: &str| -> Result<Option<f64>, GbceError> {
        match fields.get(idx).filter(|f| !f.is_empty()) {
            None => Ok(None),
            Some(raw) => {
                let v: f64 = raw
                    .parse()
                    .map_err(|_| invalid(format!("{name} is not a number: {raw}")))?;
                if !v.is_finite() || v < 0.0 {
                    return Err(invalid(format!("{name} must be non-negative")));
                }
                Ok(Some(v))
            }
        }
    };

    if let Some(d) = number(1, "last_dividend")? {
        stock = stock.with_last_dividend(d);
    }
    if let Some(f) = number(2, "fixed_dividend")? {
        stock = stock.with_fixed_dividend(f);
    }
    if let Some(p) = number(3, "par_value")? {
        stock = stock.with_par_value(p);
    }
    Ok(stock)
}

/// Reads a window length in minutes, falling back to `default` when unset.
pub fn window_minutes(
    config: &dyn ConfigPort,
    key: &str,
    default: i64,
) -> Result<Duration, GbceError> {
    let invalid = |reason: String| GbceError::ConfigInvalid {
        section: "report".to_string(),
        key: key.to_string(),
        reason,
    };

    let minutes = match config.get_string("report", key) {
        None => default,
        Some(raw) => raw
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(format!("not an integer: {raw}")))?,
    };
    if minutes < 1 {
        return Err(invalid(format!("{key} must be at least 1")));
    }
    Duration::try_minutes(minutes)
        .ok_or_else(|| invalid(format!("{minutes} minutes is out of range")))
}

fn validate_seed_flag(config: &dyn ConfigPort) -> Result<(), GbceError> {
    match config.get_string("exchange", "seed") {
        None => Ok(()),
        Some(v) if matches!(v.to_lowercase().as_str(), "true" | "yes" | "1" | "false" | "no" | "0") => {
            Ok(())
        }
        Some(v) => Err(GbceError::ConfigInvalid {
            section: "exchange".to_string(),
            key: "seed".to_string(),
            reason: format!("expected a boolean, got {v}"),
        }),
    }
}

fn validate_stocks(config: &dyn ConfigPort) -> Result<(), GbceError> {
    for (ticker, value) in config.get_entries("stocks") {
        parse_stock_entry(&ticker, &value)?;
    }
    Ok(())
}

fn validate_window(config: &dyn ConfigPort, key: &str) -> Result<(), GbceError> {
    window_minutes(config, key, 1).map(|_| ())
}
