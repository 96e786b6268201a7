//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// A value object has no identity of its own. Two instances holding the same
/// attributes are interchangeable, which is why the trait requires structural
/// `PartialEq` rather than any id accessor.
///
/// Value objects in this workspace validate everything in their constructor
/// and expose no setters: a `Money` or `Address` that exists is a valid one.
/// "Changing" a value means building a new one.
///
/// ```ignore
/// let a = Money::new(Decimal::new(2599, 2), "usd")?;
/// let b = Money::new(Decimal::new(2599, 2), "USD")?;
/// assert_eq!(a, b);
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
