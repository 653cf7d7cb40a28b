//! Identifier generation for newly admitted contacts.

use crate::domain::ContactId;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Source of fresh contact identifiers.
///
/// The registry asks its supplier for one id per admitted contact. Suppliers
/// take `&self` so they can be shared, and must be `Send + Sync` so a
/// registry can sit behind a lock in [`SharedContactRegistry`].
///
/// [`SharedContactRegistry`]: crate::repositories::SharedContactRegistry
pub trait IdSupplier: Send + Sync + fmt::Debug {
    /// Produce the next identifier.
    fn next_id(&self) -> ContactId;
}

/// Random v4 UUID identifiers. This is the default supplier.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdSupplier;

impl IdSupplier for UuidIdSupplier {
    fn next_id(&self) -> ContactId {
        ContactId::from(Uuid::new_v4())
    }
}

/// Deterministic identifiers of the form `contact-1`, `contact-2`, ...
#[derive(Debug, Default)]
pub struct SequentialIdSupplier {
    next: AtomicU64,
}

impl SequentialIdSupplier {
    pub const PREFIX: &'static str = "contact-";

    pub fn new() -> Self {
        Self::default()
    }
}

impl IdSupplier for SequentialIdSupplier {
    fn next_id(&self) -> ContactId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ContactId::numbered(Self::PREFIX, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_uuid_supplier_ids_parse_as_uuid() {
        let supplier = UuidIdSupplier;
        let id = supplier.next_id();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn test_uuid_supplier_ids_are_unique() {
        let supplier = UuidIdSupplier;
        let ids: HashSet<ContactId> = (0..1000).map(|_| supplier.next_id()).collect();
        assert_eq!(ids.len(), 1000);
    }

    #[test]
    fn test_sequential_supplier_counts_from_one() {
        let supplier = SequentialIdSupplier::new();
        assert_eq!(supplier.next_id().as_str(), "contact-1");
        assert_eq!(supplier.next_id().as_str(), "contact-2");
        assert_eq!(supplier.next_id().as_str(), "contact-3");
    }
}
