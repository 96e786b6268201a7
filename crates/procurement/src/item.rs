use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::guard::{require_positive, require_present};
use acme_core::{DomainError, DomainResult};
use acme_shared::Money;

use crate::product_id::ProductId;

/// Purchase order line: a product, how many units, and the price per unit.
///
/// Items belong to exactly one [`crate::PurchaseOrder`]; the order is the only
/// place they are created during normal use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderItemRecord")]
pub struct PurchaseOrderItem {
    product_id: ProductId,
    quantity: i64,
    unit_price: Money,
}

impl PurchaseOrderItem {
    /// Fails with `InvalidValue` if `quantity <= 0`.
    pub fn new(product_id: ProductId, quantity: i64, unit_price: Money) -> DomainResult<Self> {
        Ok(Self {
            product_id,
            quantity: require_positive("quantity", quantity)?,
            unit_price,
        })
    }

    pub fn product_id(&self) -> ProductId {
        self.product_id
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn unit_price(&self) -> &Money {
        &self.unit_price
    }

    /// `unit_price × quantity`, in the unit price's currency.
    pub fn item_total(&self) -> DomainResult<Money> {
        let amount = self
            .unit_price
            .amount()
            .checked_mul(Decimal::from(self.quantity))
            .ok_or_else(|| DomainError::invariant("purchase order item total overflow"))?;
        Money::in_currency(amount, self.unit_price.currency().clone())
    }
}

#[derive(Deserialize)]
struct PurchaseOrderItemRecord {
    product_id: Option<ProductId>,
    quantity: Option<i64>,
    unit_price: Option<Money>,
}

impl TryFrom<PurchaseOrderItemRecord> for PurchaseOrderItem {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderItemRecord) -> Result<Self, Self::Error> {
        PurchaseOrderItem::new(
            require_present("product_id", record.product_id)?,
            require_present("quantity", record.quantity)?,
            require_present("unit_price", record.unit_price)?,
        )
    }
}
