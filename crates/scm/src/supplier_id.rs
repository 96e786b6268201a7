use core::str::FromStr;
use serde::{Deserialize, Serialize};

use acme_core::guard::require_text;
use acme_core::{DomainError, DomainResult, ValueObject};

/// Supplier identifier (e.g. `"SUP001"`).
///
/// Wrapping the raw string keeps supplier identifiers from being mixed up with
/// order numbers or other free-form text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SupplierId(String);

impl SupplierId {
    pub fn new(identifier: impl Into<String>) -> DomainResult<Self> {
        Ok(Self(require_text("supplier_id", identifier.into())?))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for SupplierId {}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for SupplierId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for SupplierId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SupplierId> for String {
    fn from(value: SupplierId) -> Self {
        value.0
    }
}
