use core::str::FromStr;
use serde::{Deserialize, Serialize};

use acme_core::{DomainError, DomainResult, ValueObject};

/// ISO 4217 style currency code.
///
/// Any three non-whitespace characters are accepted and stored uppercased, so
/// `"usd"`, `"Usd"` and `"USD"` all produce the same value. This is the only
/// place currency codes are normalized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Currency(String);

impl Currency {
    pub fn new(code: &str) -> DomainResult<Self> {
        let well_formed = code.chars().count() == 3 && !code.chars().any(char::is_whitespace);
        if !well_formed {
            return Err(DomainError::invalid("currency", "must be a valid 3-letter ISO code"));
        }
        Ok(Self(code.chars().map(uppercase_char).collect()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Uppercase without changing the character count; characters whose
/// uppercase form expands (e.g. `ß` to `SS`) are kept as they are.
fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Currency {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Currency {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Currency> for String {
    fn from(value: Currency) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lowercase_code_is_uppercased() {
        assert_eq!(Currency::new("eur").unwrap().as_str(), "EUR");
        assert_eq!("uSd".parse::<Currency>().unwrap().to_string(), "USD");
    }

    #[test]
    fn wrong_length_or_whitespace_is_rejected() {
        for code in ["", "US", "USDT", "   ", "U D", " US"] {
            let err = Currency::new(code).unwrap_err();
            assert_eq!(err.field(), Some("currency"), "code {code:?}");
        }
    }

    #[test]
    fn deserialization_validates() {
        let ok: Currency = serde_json::from_str("\"gbp\"").unwrap();
        assert_eq!(ok.as_str(), "GBP");
        assert!(serde_json::from_str::<Currency>("\"POUND\"").is_err());
    }

    #[test]
    fn expanding_uppercase_keeps_three_characters() {
        for (code, expected) in [("ßab", "ßAB"), ("ﬀx€", "ﬀX€"), ("éüñ", "ÉÜÑ")] {
            let currency = Currency::new(code).unwrap();
            assert_eq!(currency.as_str(), expected);
            assert_eq!(currency.as_str().chars().count(), 3);
        }
    }

    #[test]
    fn non_ascii_code_reads_back_after_serialization() {
        let currency = Currency::new("ßab").unwrap();
        let json = serde_json::to_string(&currency).unwrap();
        assert_eq!(serde_json::from_str::<Currency>(&json).unwrap(), currency);
    }

    proptest! {
        /// Property: any accepted code is stored as exactly 3 characters and
        /// survives a serialization round trip.
        #[test]
        fn stored_code_keeps_length(code in "\\PZ{3}") {
            if let Ok(currency) = Currency::new(&code) {
                prop_assert_eq!(currency.as_str().chars().count(), 3);
                let json = serde_json::to_string(&currency).unwrap();
                prop_assert_eq!(serde_json::from_str::<Currency>(&json).unwrap(), currency);
            }
        }

        #[test]
        fn stored_code_is_uppercased_input(code in "[a-zA-Z]{3}") {
            let currency = Currency::new(&code).unwrap();
            prop_assert_eq!(currency.as_str(), code.to_uppercase());
        }

        #[test]
        fn codes_of_other_lengths_fail(code in "[a-zA-Z]{0,2}|[a-zA-Z]{4,8}") {
            prop_assert!(Currency::new(&code).is_err());
        }
    }
}
