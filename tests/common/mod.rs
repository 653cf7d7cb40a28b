//! Shared setup and assertions for registry integration tests.

use contact_registry::{ContactRef, ContactRegistry, SequentialIdSupplier};
use std::collections::HashSet;

pub mod fixtures;

/// Create a fresh registry with deterministic ids.
///
/// Each test builds its own registry, so no state leaks between scenarios.
#[allow(dead_code)]
pub fn setup_registry() -> ContactRegistry {
    ContactRegistry::with_id_supplier(Box::new(SequentialIdSupplier::new()))
}

/// Assert that exactly one contact carries the given field values.
pub fn assert_single_contact(contacts: &[ContactRef], first: &str, last: &str, phone: &str) {
    assert_eq!(contacts.len(), 1, "Expected exactly one contact");
    assert!(
        contacts.iter().any(|c| c.has_fields(first, last, phone)),
        "No contact matches {} {} {}",
        first,
        last,
        phone
    );
}

/// Assert that every contact id is distinct.
#[allow(dead_code)]
pub fn assert_unique_ids(contacts: &[ContactRef]) {
    let ids: HashSet<_> = contacts.iter().map(|c| c.id().clone()).collect();
    assert_eq!(ids.len(), contacts.len(), "Contact ids are not unique");
}
