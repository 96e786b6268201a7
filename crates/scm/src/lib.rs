//! Supply-chain management domain module (suppliers).
//!
//! Suppliers are owned by this context; other contexts refer to them only
//! through [`SupplierId`].

pub mod supplier;
pub mod supplier_id;

pub use supplier::Supplier;
pub use supplier_id::SupplierId;
