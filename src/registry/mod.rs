//! The contact registry and its identifier suppliers.

mod contact_registry;
mod id_supplier;

pub use contact_registry::ContactRegistry;
pub use id_supplier::{IdSupplier, SequentialIdSupplier, UuidIdSupplier};
