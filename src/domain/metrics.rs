//! Stock metrics computed from registry and ledger state.
//!
//! Everything here is a pure function of its arguments. Results that are
//! conventionally undefined (no dividend, no trades in the window) come back
//! as [`Metric::NotApplicable`]; numerically invalid requests are errors.

use crate::domain::error::GbceError;
use crate::domain::ledger::TradeLedger;
use crate::domain::registry::StockRegistry;
use crate::domain::stock::{Stock, StockType};
use crate::domain::trade::Trade;
use chrono::{Duration, NaiveDateTime};
use std::fmt;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Metric {
    Value(f64),
    NotApplicable,
}

impl Metric {
    pub fn value(self) -> Option<f64> {
        match self {
            Metric::Value(v) => Some(v),
            Metric::NotApplicable => None,
        }
    }

    pub fn is_applicable(self) -> bool {
        matches!(self, Metric::Value(_))
    }
}

impl From<Option<f64>> for Metric {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Metric::NotApplicable, Metric::Value)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Value(v) => write!(f, "{v}"),
            Metric::NotApplicable => write!(f, "NA"),
        }
    }
}

/// Common: last dividend / price. Preferred: fixed dividend * par value / price.
pub fn dividend_yield(stock: &Stock, market_price: f64) -> Result<f64, GbceError> {
    if market_price == 0.0 {
        return Err(GbceError::invalid_input(
            stock.ticker(),
            format!("cannot compute dividend yield at price={market_price}"),
        ));
    }
    if !market_price.is_finite() || market_price < 0.0 {
        return Err(GbceError::invalid_input(
            stock.ticker(),
            format!("market price must be a positive number, got {market_price}"),
        ));
    }

    let dividend = match stock.stock_type {
        StockType::Common => stock.last_dividend,
        StockType::Preferred => {
            let fixed = stock.fixed_dividend.ok_or_else(|| {
                GbceError::invalid_input(stock.ticker(), "preferred stock has no fixed dividend")
            })?;
            fixed * stock.par_value
        }
    };
    Ok(dividend / market_price)
}

/// Price / last dividend, not applicable when the stock pays no dividend.
pub fn price_earnings_ratio(stock: &Stock, market_price: f64) -> Metric {
    if stock.last_dividend == 0.0 {
        return Metric::NotApplicable;
    }
    Metric::Value(market_price / stock.last_dividend)
}

/// sum(price * quantity) / sum(quantity) over trades in `[from, to]`.
pub fn volume_weighted_stock_price(
    trades: Option<&[Trade]>,
    from: NaiveDateTime,
    to: NaiveDateTime,
) -> Metric {
    let Some(trades) = trades else {
        return Metric::NotApplicable;
    };

    let (notional, volume) = trades
        .iter()
        .filter(|t| t.is_within(from, to))
        .fold((0.0_f64, 0.0_f64), |(notional, volume), t| {
            (notional + t.notional(), volume + t.quantity() as f64)
        });

    if volume == 0.0 {
        return Metric::NotApplicable;
    }
    Metric::Value(notional / volume)
}

/// Start of the trailing `window` ending at `end`, saturating at the edges of
/// the representable calendar.
pub fn window_start(end: NaiveDateTime, window: Duration) -> NaiveDateTime {
    end.checked_sub_signed(window).unwrap_or(if window > Duration::zero() {
        NaiveDateTime::MIN
    } else {
        NaiveDateTime::MAX
    })
}

/// Unweighted mean trade price in `[from, to]`, `None` when no trade qualifies.
pub fn average_price(trades: &[Trade], from: NaiveDateTime, to: NaiveDateTime) -> Option<f64> {
    let (sum, n) = trades
        .iter()
        .filter(|t| t.is_within(from, to))
        .fold((0.0_f64, 0usize), |(sum, n), t| (sum + t.price(), n + 1));

    if n == 0 { None } else { Some(sum / n as f64) }
}

/// (x1 * x2 * ... * xn)^(1/n), `None` for an empty slice.
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let product: f64 = values.iter().product();
    Some(product.powf(1.0 / values.len() as f64))
}

/// Geometric mean of each ticker's average trade price over the trailing
/// `window` ending at `timestamp`. Tickers without trades in the window are
/// left out rather than counted as zero.
pub fn gbce_index(
    registry: &StockRegistry,
    ledger: &TradeLedger,
    timestamp: NaiveDateTime,
    window: Duration,
) -> Metric {
    let from = window_start(timestamp, window);

    let prices: Vec<f64> = registry
        .all()
        .filter_map(|(ticker, _)| ledger.trades_for(ticker))
        .filter_map(|trades| average_price(trades, from, timestamp))
        .collect();

    debug!(%from, to = %timestamp, tickers = prices.len(), "computing GBCE index");
    geometric_mean(&prices).into()
}
