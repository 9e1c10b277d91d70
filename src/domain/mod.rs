//! Core domain types and logic.

pub mod stock;
pub mod registry;
pub mod trade;
pub mod ledger;
pub mod metrics;
pub mod quant;
pub mod seed;
pub mod timestamp;
pub mod config_validation;
pub mod error;
