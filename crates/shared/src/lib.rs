//! Shared kernel value objects (money, currencies, postal addresses).
//!
//! These types are used by more than one bounded context, so they live outside
//! both supply-chain and procurement.

pub mod address;
pub mod currency;
pub mod money;

pub use address::Address;
pub use currency::Currency;
pub use money::Money;
