use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::guard::{require_non_negative, require_present};
use acme_core::{DomainError, DomainResult, ValueObject};

use crate::currency::Currency;

/// A non-negative monetary amount in a single currency.
///
/// Amounts are fixed-point decimals so line totals such as `25.99 × 10` come
/// out as exactly `259.90`. `Money` deliberately has no arithmetic operators;
/// callers compute with [`Money::amount`] and build a new value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "MoneyRecord")]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Build money from a raw currency code.
    ///
    /// Fails with `InvalidValue` if the code is not 3 non-whitespace characters
    /// or the amount is negative.
    pub fn new(amount: Decimal, currency: &str) -> DomainResult<Self> {
        let currency = Currency::new(currency)?;
        Self::in_currency(amount, currency)
    }

    /// Build money in an already validated currency.
    pub fn in_currency(amount: Decimal, currency: Currency) -> DomainResult<Self> {
        let amount = require_non_negative("amount", amount, Decimal::ZERO)?;
        Ok(Self { amount, currency })
    }

    pub fn zero(currency: Currency) -> Self {
        Self {
            amount: Decimal::ZERO,
            currency,
        }
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }
}

impl ValueObject for Money {}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Wire shape of [`Money`]; every field optional so absence is reported as
/// `MissingArgument` instead of a serde error.
#[derive(Deserialize)]
struct MoneyRecord {
    amount: Option<Decimal>,
    currency: Option<String>,
}

impl TryFrom<MoneyRecord> for Money {
    type Error = DomainError;

    fn try_from(record: MoneyRecord) -> Result<Self, Self::Error> {
        let amount = require_present("amount", record.amount)?;
        let currency = require_present("currency", record.currency)?;
        Money::new(amount, &currency)
    }
}
