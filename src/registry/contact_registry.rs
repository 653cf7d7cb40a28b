//! The in-memory contact registry.

use super::id_supplier::{IdSupplier, SequentialIdSupplier, UuidIdSupplier};
use crate::config::{Config, IdStrategy};
use crate::domain::{ContactField, ContactId};
use crate::error::{RegistryError, RegistryResult};
use crate::models::{Contact, ContactRef, NewContact};
use crate::observability::{MetricsSnapshot, RegistryMetrics};
use std::collections::HashSet;
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Ordered, validated store of contacts.
///
/// A registry starts empty and only grows: [`add`](Self::add) appends one
/// contact per successful call, and [`get_all_contacts`](Self::get_all_contacts)
/// returns every admitted contact in admission order. Structurally identical
/// inputs are admitted as separate contacts with distinct ids.
///
/// # Example
///
/// ```
/// use contact_registry::ContactRegistry;
///
/// let mut registry = ContactRegistry::new();
/// registry.add_contact("John", "Doe", "0123456789").unwrap();
///
/// let contacts = registry.get_all_contacts();
/// assert_eq!(contacts.len(), 1);
/// assert!(contacts[0].has_fields("John", "Doe", "0123456789"));
/// ```
#[derive(Debug)]
pub struct ContactRegistry {
    contacts: Vec<ContactRef>,
    issued_ids: HashSet<ContactId>,
    id_supplier: Box<dyn IdSupplier>,
    metrics: RegistryMetrics,
}

/// Validation helper functions.
impl ContactRegistry {
    /// Check one required field, returning its owned value.
    fn validate_field(field: ContactField, value: Option<String>) -> RegistryResult<String> {
        match value {
            None => Err(RegistryError::InvalidArgument {
                field,
                reason: "is missing".to_string(),
            }),
            Some(v) if v.is_empty() => Err(RegistryError::InvalidArgument {
                field,
                reason: "cannot be empty".to_string(),
            }),
            Some(v) => Ok(v),
        }
    }
}

impl ContactRegistry {
    /// Create an empty registry issuing random UUID identifiers.
    pub fn new() -> Self {
        Self::with_id_supplier(Box::new(UuidIdSupplier))
    }

    /// Create an empty registry with a custom identifier supplier.
    pub fn with_id_supplier(id_supplier: Box<dyn IdSupplier>) -> Self {
        Self {
            contacts: Vec::new(),
            issued_ids: HashSet::new(),
            id_supplier,
            metrics: RegistryMetrics::new(),
        }
    }

    /// Create an empty registry using the configured id strategy.
    pub fn from_config(config: &Config) -> Self {
        let id_supplier: Box<dyn IdSupplier> = match config.id_strategy {
            IdStrategy::Uuid => Box::new(UuidIdSupplier),
            IdStrategy::Sequential => Box::new(SequentialIdSupplier::new()),
        };
        Self::with_id_supplier(id_supplier)
    }

    /// Add a contact from three field values.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArgument` naming the first empty field,
    /// or `RegistryError::DuplicateId` if the supplier repeats an id. The
    /// registry is unchanged on failure.
    pub fn add_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> RegistryResult<ContactRef> {
        self.add(NewContact::new(first_name, last_name, phone_number))
    }

    /// Add a contact from an insertion input whose fields may be absent.
    ///
    /// Fields are checked in order first name, last name, phone number.
    /// Values are stored as given: only absent or zero-length values are
    /// rejected, and no format rule is applied to the phone number.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::InvalidArgument` naming the first missing or
    /// empty field, or `RegistryError::DuplicateId` if the supplier repeats
    /// an id. The registry is unchanged on failure.
    pub fn add(&mut self, new_contact: NewContact) -> RegistryResult<ContactRef> {
        match self.try_add(new_contact) {
            Ok(contact) => {
                self.metrics.track_added();
                debug!(contact_id = %contact.id(), total = self.contacts.len(), "Contact added");
                Ok(contact)
            }
            Err(e) => {
                self.metrics.track_rejected(e.field());
                match &e {
                    RegistryError::InvalidArgument { field, .. } => {
                        warn!(field = %field, "Rejected contact: {}", e);
                    }
                    RegistryError::DuplicateId(id) => {
                        error!(contact_id = %id, "Identifier supplier repeated an id");
                    }
                }
                Err(e)
            }
        }
    }

    fn try_add(&mut self, new_contact: NewContact) -> RegistryResult<ContactRef> {
        let NewContact {
            first_name,
            last_name,
            phone_number,
        } = new_contact;

        let first_name = Self::validate_field(ContactField::FirstName, first_name)?;
        let last_name = Self::validate_field(ContactField::LastName, last_name)?;
        let phone_number = Self::validate_field(ContactField::PhoneNumber, phone_number)?;

        let id = self.id_supplier.next_id();
        if self.issued_ids.contains(&id) {
            return Err(RegistryError::DuplicateId(id));
        }

        let contact = Arc::new(Contact::new(id.clone(), first_name, last_name, phone_number));
        self.issued_ids.insert(id);
        self.contacts.push(Arc::clone(&contact));
        Ok(contact)
    }

    /// All stored contacts in admission order.
    ///
    /// The returned vector is a snapshot: later insertions do not change it.
    pub fn get_all_contacts(&self) -> Vec<ContactRef> {
        self.contacts.clone()
    }

    /// Number of stored contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// Admission and rejection counts since construction.
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl Default for ContactRegistry {
    fn default() -> Self {
        Self::new()
    }
}
