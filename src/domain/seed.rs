//! Static GBCE seed data.

use crate::domain::registry::StockRegistry;
use crate::domain::stock::{Stock, StockType};

/// Registry holding the five GBCE sample stocks.
pub fn gbce_registry() -> StockRegistry {
    let mut registry = StockRegistry::new();
    registry.add(Stock::new("TEA").with_par_value(100.0));
    registry.add(Stock::new("POP").with_last_dividend(8.0).with_par_value(100.0));
    registry.add(Stock::new("ALE").with_last_dividend(23.0).with_par_value(60.0));
    registry.add(
        Stock::new("GIN")
            .with_type(StockType::Preferred)
            .with_last_dividend(8.0)
            .with_fixed_dividend(0.02)
            .with_par_value(100.0),
    );
    registry.add(Stock::new("JOE").with_last_dividend(13.0).with_par_value(250.0));
    registry
}
