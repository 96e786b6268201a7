//! Console walkthrough of the procurement model.
//!
//! Builds a supplier, places a two-line purchase order with it and prints each
//! line total followed by the order total.

use std::io::Write;

use anyhow::Context;
use chrono::Utc;
use rust_decimal::Decimal;

use acme_procurement::{ProductId, PurchaseOrder};
use acme_shared::{Address, Currency};
use acme_scm::Supplier;

pub const CURRENCY_VAR: &str = "ACME_ORDER_CURRENCY";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Settings for the walkthrough.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub currency: Currency,
}

impl DemoConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let raw = lookup(CURRENCY_VAR).unwrap_or_else(|| DEFAULT_CURRENCY.to_string());
        let currency = raw
            .parse::<Currency>()
            .with_context(|| format!("{CURRENCY_VAR}={raw:?} is not a usable currency"))?;
        Ok(Self { currency })
    }
}

/// Run the walkthrough, writing the report to `out`.
pub fn run(config: &DemoConfig, out: &mut impl Write) -> anyhow::Result<()> {
    let address = Address::new(
        "Supplier St",
        "123",
        "SupplierCity",
        "Supplier State",
        "12345",
        "United States",
    )?;
    let supplier = Supplier::new("SUP001", "Microsoft, Inc.", address)?;
    tracing::info!(supplier_id = %supplier.identifier(), address = %supplier.address(), "supplier registered");

    let mut order = PurchaseOrder::new(
        "PO001",
        supplier.identifier().clone(),
        Utc::now(),
        config.currency.as_str(),
    )?;
    order
        .add_item(ProductId::generate(), 10, Decimal::new(2599, 2))?
        .add_item(ProductId::generate(), 20, Decimal::new(1999, 2))?;
    tracing::info!(order_number = order.order_number(), items = order.len(), "purchase order created");

    writeln!(
        out,
        "Purchase Order {} created for Supplier {} in {}",
        order.order_number(),
        supplier.name(),
        order.currency()
    )?;
    for item in order.items() {
        writeln!(out, "Order Item Total: {}", item.item_total()?)?;
    }
    writeln!(out, "Total Order Amount: {}", order.order_total()?)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_lists_lines_and_total() {
        let config = DemoConfig::from_lookup(|_| None).unwrap();
        let mut out = Vec::new();
        run(&config, &mut out).unwrap();

        let report = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Purchase Order PO001 created for Supplier Microsoft, Inc. in USD",
                "Order Item Total: 259.90 USD",
                "Order Item Total: 399.80 USD",
                "Total Order Amount: 659.70 USD",
            ]
        );
    }

    #[test]
    fn currency_comes_from_environment_lookup() {
        let config = DemoConfig::from_lookup(|key| {
            (key == CURRENCY_VAR).then(|| "eur".to_string())
        })
        .unwrap();
        assert_eq!(config.currency.as_str(), "EUR");

        let mut out = Vec::new();
        run(&config, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().ends_with("Total Order Amount: 659.70 EUR\n"));
    }

    #[test]
    fn malformed_currency_is_a_config_error() {
        let err = DemoConfig::from_lookup(|_| Some("EURO".to_string())).unwrap_err();
        assert!(err.to_string().contains(CURRENCY_VAR));
    }
}
