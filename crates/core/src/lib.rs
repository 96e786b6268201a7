//! `acme-core` — domain kernel shared by every bounded context.
//!
//! This crate contains **pure domain** primitives: the error taxonomy, argument
//! guards and the aggregate/value-object traits. No IO, no infrastructure.

pub mod aggregate;
pub mod error;
pub mod guard;
pub mod value_object;

pub use aggregate::AggregateRoot;
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
