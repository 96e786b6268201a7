use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use acme_core::guard::{require_non_negative, require_positive, require_present, require_text};
use acme_core::{AggregateRoot, DomainError, DomainResult};
use acme_scm::SupplierId;
use acme_shared::{Currency, Money};

use crate::item::PurchaseOrderItem;
use crate::product_id::ProductId;

/// Aggregate root: PurchaseOrder.
///
/// Every item is priced in the order's own currency; [`PurchaseOrder::add_item`]
/// is the only way to grow the item list, so that invariant holds by
/// construction. Totals are computed on demand and never cached.
///
/// The order does no locking. `add_item` takes `&mut self`, so sharing an order
/// between threads requires the caller's own synchronization (e.g. a `Mutex`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PurchaseOrderRecord")]
pub struct PurchaseOrder {
    order_number: String,
    supplier_id: SupplierId,
    order_date: DateTime<Utc>,
    currency: Currency,
    items: Vec<PurchaseOrderItem>,
}

impl PurchaseOrder {
    /// Create an order with no items.
    ///
    /// Fails with `InvalidValue` if the order number is blank or the currency
    /// is not a 3-character code. The currency is stored uppercased.
    pub fn new(
        order_number: impl Into<String>,
        supplier_id: SupplierId,
        order_date: DateTime<Utc>,
        currency: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            order_number: require_text("order_number", order_number.into())?,
            supplier_id,
            order_date,
            currency: Currency::new(currency)?,
            items: Vec::new(),
        })
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }

    pub fn supplier_id(&self) -> &SupplierId {
        &self.supplier_id
    }

    pub fn order_date(&self) -> DateTime<Utc> {
        self.order_date
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Items in insertion order.
    pub fn items(&self) -> &[PurchaseOrderItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item priced in this order's currency.
    ///
    /// Fails with `InvalidValue` if `quantity <= 0` or `unit_price_amount < 0`;
    /// on failure the item list is left as it was. Returns `self` so appends
    /// can be chained with `?`.
    pub fn add_item(
        &mut self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<&mut Self> {
        let item = match self.price_item(product_id, quantity, unit_price_amount) {
            Ok(item) => item,
            Err(err) => {
                tracing::debug!(
                    order_number = %self.order_number,
                    %product_id,
                    quantity,
                    error = %err,
                    "purchase order item rejected"
                );
                return Err(err);
            }
        };

        tracing::debug!(
            order_number = %self.order_number,
            %product_id,
            quantity,
            unit_price = %item.unit_price(),
            "purchase order item added"
        );
        self.items.push(item);
        Ok(self)
    }

    /// Sum of every item total, in the order's currency. Zero when empty.
    pub fn order_total(&self) -> DomainResult<Money> {
        let total = self.items.iter().try_fold(Decimal::ZERO, |acc, item| {
            let line = item.item_total()?;
            acc.checked_add(line.amount())
                .ok_or_else(|| DomainError::invariant("purchase order total overflow"))
        })?;
        Money::in_currency(total, self.currency.clone())
    }

    fn price_item(
        &self,
        product_id: ProductId,
        quantity: i64,
        unit_price_amount: Decimal,
    ) -> DomainResult<PurchaseOrderItem> {
        let quantity = require_positive("quantity", quantity)?;
        let amount = require_non_negative("unit_price_amount", unit_price_amount, Decimal::ZERO)?;
        let unit_price = Money::in_currency(amount, self.currency.clone())?;
        PurchaseOrderItem::new(product_id, quantity, unit_price)
    }
}

impl AggregateRoot for PurchaseOrder {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.order_number
    }
}

/// Wire shape of a [`PurchaseOrder`]. Items are replayed through
/// [`PurchaseOrder::add_item`] so a stored order is validated exactly like a
/// freshly built one.
#[derive(Deserialize)]
struct PurchaseOrderRecord {
    order_number: Option<String>,
    supplier_id: Option<SupplierId>,
    order_date: Option<DateTime<Utc>>,
    currency: Option<String>,
    #[serde(default)]
    items: Vec<PurchaseOrderItem>,
}

impl TryFrom<PurchaseOrderRecord> for PurchaseOrder {
    type Error = DomainError;

    fn try_from(record: PurchaseOrderRecord) -> Result<Self, Self::Error> {
        let mut order = PurchaseOrder::new(
            require_present("order_number", record.order_number)?,
            require_present("supplier_id", record.supplier_id)?,
            require_present("order_date", record.order_date)?,
            &require_present("currency", record.currency)?,
        )?;

        for item in record.items {
            let unit_price = item.unit_price();
            if unit_price.currency() != order.currency() {
                return Err(DomainError::invalid(
                    "items",
                    format!(
                        "unit price currency {} does not match order currency {}",
                        unit_price.currency(),
                        order.currency()
                    ),
                ));
            }
            order.add_item(item.product_id(), item.quantity(), unit_price.amount())?;
        }

        Ok(order)
    }
}
