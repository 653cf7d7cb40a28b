//! Contact model representing a person stored in the registry.

use crate::domain::ContactId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared reference to a Contact.
///
/// The registry hands out `ContactRef`s so that views returned to callers
/// share storage with the registry while staying immutable.
pub type ContactRef = Arc<Contact>;

/// A contact admitted by the registry.
///
/// Contacts are only created by [`ContactRegistry`](crate::ContactRegistry)
/// after validation, so every field is guaranteed non-empty. They are never
/// mutated after creation.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    id: ContactId,
    first_name: String,
    last_name: String,
    phone_number: String,
}

impl Contact {
    pub(crate) fn new(
        id: ContactId,
        first_name: String,
        last_name: String,
        phone_number: String,
    ) -> Self {
        Self {
            id,
            first_name,
            last_name,
            phone_number,
        }
    }

    /// Registry-assigned unique identifier.
    pub fn id(&self) -> &ContactId {
        &self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Whether this contact carries exactly the given field values.
    pub fn has_fields(&self, first_name: &str, last_name: &str, phone_number: &str) -> bool {
        self.first_name == first_name
            && self.last_name == last_name
            && self.phone_number == phone_number
    }
}

/// Input for a registry insertion.
///
/// Every field is optional so that absent values can be expressed; the
/// registry rejects `None` and empty values alike.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct NewContact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
}

impl NewContact {
    /// Build an insertion input with all three fields present.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            phone_number: Some(phone_number.into()),
        }
    }
}
