use serde::{Deserialize, Serialize};

use acme_core::guard::{require_present, require_text};
use acme_core::{DomainError, DomainResult, ValueObject};

/// An international postal address.
///
/// All six components are required. Formats differ between countries, so no
/// component is parsed or checked beyond being non-blank.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressRecord")]
pub struct Address {
    street: String,
    number: String,
    city: String,
    state_or_region: String,
    postal_code: String,
    country: String,
}

impl Address {
    /// Fails with `InvalidValue` naming the first blank component.
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        city: impl Into<String>,
        state_or_region: impl Into<String>,
        postal_code: impl Into<String>,
        country: impl Into<String>,
    ) -> DomainResult<Self> {
        Ok(Self {
            street: require_text("street", street.into())?,
            number: require_text("number", number.into())?,
            city: require_text("city", city.into())?,
            state_or_region: require_text("state_or_region", state_or_region.into())?,
            postal_code: require_text("postal_code", postal_code.into())?,
            country: require_text("country", country.into())?,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state_or_region(&self) -> &str {
        &self.state_or_region
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }
}

impl ValueObject for Address {}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} {}, {}, {}, {}, {}",
            self.street, self.number, self.city, self.state_or_region, self.postal_code, self.country
        )
    }
}

#[derive(Deserialize)]
struct AddressRecord {
    street: Option<String>,
    number: Option<String>,
    city: Option<String>,
    state_or_region: Option<String>,
    postal_code: Option<String>,
    country: Option<String>,
}

impl TryFrom<AddressRecord> for Address {
    type Error = DomainError;

    fn try_from(record: AddressRecord) -> Result<Self, Self::Error> {
        Address::new(
            require_present("street", record.street)?,
            require_present("number", record.number)?,
            require_present("city", record.city)?,
            require_present("state_or_region", record.state_or_region)?,
            require_present("postal_code", record.postal_code)?,
            require_present("country", record.country)?,
        )
    }
}
