//! CLI definition and dispatch.

use chrono::{Duration, Local, NaiveDateTime};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvTradeAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::{
    DEFAULT_INDEX_WINDOW_MINUTES, DEFAULT_VWSP_WINDOW_MINUTES, parse_stock_entry, validate_config,
    window_minutes,
};
use crate::domain::error::GbceError;
use crate::domain::metrics::Metric;
use crate::domain::quant::{PriceReport, Quant};
use crate::domain::registry::StockRegistry;
use crate::domain::seed::gbce_registry;
use crate::domain::timestamp::{TIMESTAMP_FORMAT_HINT, format_timestamp, parse_timestamp};
use crate::ports::config_port::ConfigPort;
use crate::ports::trade_port::TradeSource;

#[derive(Parser, Debug)]
#[command(name = "gbce", about = "Super Simple Stocks", version)]
pub struct Cli {
    /// INI file with extra stocks and report windows
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
    /// CSV file of trades to record before running the command
    #[arg(short, long, global = true)]
    pub trades: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Dividend yield, P/E, VWSP and GBCE index for a ticker
    PriceReport {
        /// stock ticker
        ticker: String,
        /// market price
        price: f64,
        /// report time (DD-MM-YYYY:HH:mm:sec:ms), defaults to now
        #[arg(long)]
        at: Option<String>,
    },
    /// Record a single trade
    RecordTrade {
        /// stock ticker
        ticker: String,
        /// DD-MM-YYYY:HH:mm:sec:ms
        timestamp: String,
        /// quantity of stocks in transaction
        quantity: u64,
        /// (B)uy or (S)ell
        #[arg(value_parser = ["B", "S"])]
        indicator: String,
        /// trade price
        price: f64,
    },
    /// List the stocks known to the exchange
    Stocks,
}

/// Trailing windows used by the price report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportWindows {
    pub vwsp: Duration,
    pub index: Duration,
}

impl Default for ReportWindows {
    fn default() -> Self {
        Self {
            vwsp: Duration::minutes(DEFAULT_VWSP_WINDOW_MINUTES),
            index: Duration::minutes(DEFAULT_INDEX_WINDOW_MINUTES),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LoadSummary {
    pub recorded: usize,
    pub skipped: usize,
}

pub fn run(cli: Cli) -> ExitCode {
    let config = match cli.config.as_ref().map(load_config).transpose() {
        Ok(c) => c,
        Err(code) => return code,
    };
    let config_port = config.as_ref().map(|c| c as &dyn ConfigPort);

    let (mut quant, windows) = match build_quant(config_port).and_then(|q| {
        let windows = build_report_windows(config_port)?;
        Ok((q, windows))
    }) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    if let Some(path) = &cli.trades {
        eprintln!("Loading trades from {}", path.display());
        match load_trades(&mut quant, &CsvTradeAdapter::new(path.clone())) {
            Ok(summary) => {
                eprintln!(
                    "Recorded {} trades ({} skipped)",
                    summary.recorded, summary.skipped
                );
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    match cli.command {
        Command::PriceReport { ticker, price, at } => {
            run_price_report(&quant, &ticker, price, at.as_deref(), windows)
        }
        Command::RecordTrade {
            ticker,
            timestamp,
            quantity,
            indicator,
            price,
        } => run_record_trade(&mut quant, &ticker, &timestamp, quantity, &indicator, price),
        Command::Stocks => {
            print!("{}", render_stocks(quant.registry()));
            ExitCode::SUCCESS
        }
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = GbceError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Builds the exchange: the GBCE seed set unless `[exchange] seed = false`,
/// then every `[stocks]` entry on top.
pub fn build_quant(config: Option<&dyn ConfigPort>) -> Result<Quant, GbceError> {
    let Some(config) = config else {
        return Ok(Quant::gbce());
    };
    validate_config(config)?;

    let mut registry = if config.get_bool("exchange", "seed", true) {
        gbce_registry()
    } else {
        StockRegistry::new()
    };
    for (ticker, value) in config.get_entries("stocks") {
        registry.add(parse_stock_entry(&ticker, &value)?);
    }
    Ok(Quant::new(registry))
}

pub fn build_report_windows(config: Option<&dyn ConfigPort>) -> Result<ReportWindows, GbceError> {
    let Some(config) = config else {
        return Ok(ReportWindows::default());
    };
    Ok(ReportWindows {
        vwsp: window_minutes(config, "vwsp_window_minutes", DEFAULT_VWSP_WINDOW_MINUTES)?,
        index: window_minutes(config, "index_window_minutes", DEFAULT_INDEX_WINDOW_MINUTES)?,
    })
}

/// Records every trade from `source`. Malformed input aborts the load;
/// trades the ledger refuses are skipped and counted.
pub fn load_trades(quant: &mut Quant, source: &dyn TradeSource) -> Result<LoadSummary, GbceError> {
    let mut summary = LoadSummary::default();
    for record in source.load_trades()? {
        match quant.record_trade(
            &record.ticker,
            record.timestamp,
            record.quantity,
            &record.indicator,
            record.price,
        ) {
            Ok(()) => summary.recorded += 1,
            Err(e) => {
                tracing::warn!(line = record.line, %e, "skipping trade");
                summary.skipped += 1;
            }
        }
    }
    Ok(summary)
}

fn run_price_report(
    quant: &Quant,
    ticker: &str,
    price: f64,
    at: Option<&str>,
    windows: ReportWindows,
) -> ExitCode {
    let at = match at {
        Some(raw) => match parse_timestamp(raw) {
            Ok(ts) => ts,
            Err(e) => {
                eprintln!("{e} (expected {TIMESTAMP_FORMAT_HINT})");
                return ExitCode::from(4);
            }
        },
        None => Local::now().naive_local(),
    };

    match quant.price_report(ticker, price, at, windows.vwsp, windows.index) {
        Ok(report) => {
            print!("{}", render_price_report(&report, at, windows));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_record_trade(
    quant: &mut Quant,
    ticker: &str,
    timestamp: &str,
    quantity: u64,
    indicator: &str,
    price: f64,
) -> ExitCode {
    match record_trade(quant, ticker, timestamp, quantity, indicator, price) {
        Ok(message) => {
            println!("{message}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            if let GbceError::IllegalTrade { .. } = e {
                println!("Error in recording trade for {ticker}");
            }
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

/// Parses the timestamp and records one trade, returning the confirmation line.
pub fn record_trade(
    quant: &mut Quant,
    ticker: &str,
    timestamp: &str,
    quantity: u64,
    indicator: &str,
    price: f64,
) -> Result<String, GbceError> {
    let ts = parse_timestamp(timestamp).map_err(|e| GbceError::InvalidInput {
        ticker: ticker.to_string(),
        reason: format!("{e} (expected {TIMESTAMP_FORMAT_HINT})"),
    })?;
    quant.record_trade(ticker, ts, quantity, indicator, price)?;
    Ok(format!("Trade recorded for {ticker}"))
}

fn metric_or(metric: Metric, sentinel: &str) -> String {
    metric
        .value()
        .map_or_else(|| sentinel.to_string(), |v| v.to_string())
}

pub fn render_price_report(report: &PriceReport, at: NaiveDateTime, windows: ReportWindows) -> String {
    let mut out = String::new();
    out.push_str("Price report\n");
    out.push_str("============\n\n");
    out.push_str(&format!("Ticker                       {:>20}\n", report.ticker));
    out.push_str(&format!("Market price                 {:>20}\n", report.market_price));
    out.push_str(&format!("Report time                  {:>20}\n", format_timestamp(&at)));
    out.push_str(&format!("Dividend yield               {:>20}\n", report.dividend_yield));
    out.push_str(&format!(
        "P/E                          {:>20}\n",
        metric_or(report.pe_ratio, "NA")
    ));
    out.push_str(&format!(
        "Volume Weighted Stock Price  {:>20}\n",
        metric_or(report.vwsp, "NA")
    ));
    out.push_str(&format!("   in past {} minutes\n", windows.vwsp.num_minutes()));
    out.push_str(&format!(
        "GBCE Index                   {:>20}\n",
        metric_or(report.gbce_index, "N/A")
    ));
    out.push_str(&format!("   in past {} minutes\n", windows.index.num_minutes()));
    out
}

pub fn render_stocks(registry: &StockRegistry) -> String {
    let mut out = format!(
        "{:<8} {:<10} {:>14} {:>15} {:>10}\n",
        "Ticker", "Type", "Last Dividend", "Fixed Dividend", "Par Value"
    );
    for (ticker, stock) in registry.all() {
        let fixed = stock
            .fixed_dividend
            .map(|f| format!("{}%", f * 100.0))
            .unwrap_or_default();
        out.push_str(&format!(
            "{:<8} {:<10} {:>14} {:>15} {:>10}\n",
            ticker,
            stock.stock_type.to_string(),
            stock.last_dividend,
            fixed,
            stock.par_value
        ));
    }
    out
}
