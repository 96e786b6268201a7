//! Argument guards shared by value-object and aggregate constructors.
//!
//! Each guard names the offending field in the returned [`DomainError`], so
//! callers can report exactly which input was rejected.

use crate::error::{DomainError, DomainResult};

/// Require a non-blank string. Returns the value unchanged on success.
pub fn require_text(field: &str, value: String) -> DomainResult<String> {
    if value.trim().is_empty() {
        return Err(DomainError::invalid(field, "cannot be empty or whitespace"));
    }
    Ok(value)
}

/// Require a strictly positive integer.
pub fn require_positive(field: &str, value: i64) -> DomainResult<i64> {
    if value <= 0 {
        return Err(DomainError::invalid(field, "must be greater than zero"));
    }
    Ok(value)
}

/// Require a value that is not below `zero`.
///
/// Generic so it covers decimal amounts without pulling a numeric crate into
/// the kernel.
pub fn require_non_negative<T: PartialOrd>(field: &str, value: T, zero: T) -> DomainResult<T> {
    if value < zero {
        return Err(DomainError::invalid(field, "must be a non-negative number"));
    }
    Ok(value)
}

/// Unwrap an optional input, reporting `MissingArgument` when absent.
pub fn require_present<T>(field: &str, value: Option<T>) -> DomainResult<T> {
    value.ok_or_else(|| DomainError::missing(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn blank_text_is_rejected() {
        for blank in ["", " ", "\t\n"] {
            let err = require_text("name", blank.to_string()).unwrap_err();
            assert_eq!(err.field(), Some("name"));
        }
    }

    #[test]
    fn text_is_returned_untrimmed() {
        assert_eq!(require_text("name", " Acme ".into()).unwrap(), " Acme ");
    }

    #[test]
    fn absent_value_is_missing_argument() {
        let err = require_present::<u8>("address", None).unwrap_err();
        assert_eq!(err, DomainError::missing("address"));
        assert_eq!(require_present("address", Some(3)).unwrap(), 3);
    }

    proptest! {
        #[test]
        fn positive_guard_matches_sign(value in any::<i64>()) {
            prop_assert_eq!(require_positive("quantity", value).is_ok(), value > 0);
        }

        #[test]
        fn non_negative_guard_matches_sign(value in any::<i64>()) {
            prop_assert_eq!(require_non_negative("amount", value, 0).is_ok(), value >= 0);
        }
    }
}
