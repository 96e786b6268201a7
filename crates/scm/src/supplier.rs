use serde::{Deserialize, Serialize};

use acme_core::guard::{require_present, require_text};
use acme_core::{AggregateRoot, DomainError, DomainResult};
use acme_shared::Address;

use crate::supplier_id::SupplierId;

/// Aggregate root: Supplier.
///
/// Holds identity, display name and postal address. Suppliers are immutable
/// once built; there is no order history or status here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SupplierRecord")]
pub struct Supplier {
    identifier: SupplierId,
    name: String,
    address: Address,
}

impl Supplier {
    /// Fails with `InvalidValue` if the identifier or name is blank.
    pub fn new(
        identifier: impl Into<String>,
        name: impl Into<String>,
        address: Address,
    ) -> DomainResult<Self> {
        Ok(Self {
            identifier: SupplierId::new(identifier)?,
            name: require_text("name", name.into())?,
            address,
        })
    }

    pub fn identifier(&self) -> &SupplierId {
        &self.identifier
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Address {
        &self.address
    }
}

impl AggregateRoot for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.identifier
    }
}

#[derive(Deserialize)]
struct SupplierRecord {
    identifier: Option<String>,
    name: Option<String>,
    address: Option<Address>,
}

impl TryFrom<SupplierRecord> for Supplier {
    type Error = DomainError;

    fn try_from(record: SupplierRecord) -> Result<Self, Self::Error> {
        Supplier::new(
            require_present("identifier", record.identifier)?,
            require_present("name", record.name)?,
            require_present("address", record.address)?,
        )
    }
}
