use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use acme_core::{DomainError, DomainResult, ValueObject};

/// Product identifier as seen by procurement.
///
/// Wraps a UUID that is never nil.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Uuid", into = "Uuid")]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new(id: Uuid) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(DomainError::invalid("product_id", "cannot be an empty UUID"));
        }
        Ok(Self(id))
    }

    /// Create a fresh random identifier (UUIDv4, never nil).
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl ValueObject for ProductId {}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<Uuid> for ProductId {
    type Error = DomainError;

    fn try_from(value: Uuid) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProductId> for Uuid {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let uuid = Uuid::from_str(s)
            .map_err(|e| DomainError::invalid("product_id", e.to_string()))?;
        Self::new(uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nil_uuid_is_rejected() {
        let err = ProductId::new(Uuid::nil()).unwrap_err();
        assert_eq!(err.field(), Some("product_id"));
        assert!("00000000-0000-0000-0000-000000000000".parse::<ProductId>().is_err());
    }

    #[test]
    fn generated_ids_are_never_nil_and_distinct() {
        let a = ProductId::generate();
        let b = ProductId::generate();
        assert!(!a.as_uuid().is_nil());
        assert_ne!(a, b);
    }

    #[test]
    fn renders_raw_uuid() {
        let uuid = Uuid::from_u128(0x67e5_5044_10b1_426f_9247_bb68_0e5f_e0c8);
        let id = ProductId::new(uuid).unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(id.to_string().parse::<ProductId>().unwrap(), id);
    }

    #[test]
    fn malformed_text_is_invalid_value() {
        let err = "not-a-uuid".parse::<ProductId>().unwrap_err();
        assert!(matches!(err, DomainError::InvalidValue { .. }));
    }

    #[test]
    fn deserialization_rejects_nil() {
        let nil = format!("\"{}\"", Uuid::nil());
        assert!(serde_json::from_str::<ProductId>(&nil).is_err());
    }
}
