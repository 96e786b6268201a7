//! Procurement domain module (purchase orders).
//!
//! Business rules for purchase orders, implemented purely as deterministic
//! in-memory domain logic (no IO, no storage). Suppliers are referenced by
//! [`acme_scm::SupplierId`] only; the supplier aggregate itself lives in the
//! supply-chain context.

pub mod item;
pub mod order;
pub mod product_id;

pub use item::PurchaseOrderItem;
pub use order::PurchaseOrder;
pub use product_id::ProductId;
