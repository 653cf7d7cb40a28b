use crate::error::RegistryResult;
use crate::models::{ContactRef, NewContact};
use async_trait::async_trait;

/// Repository for admitting and listing contacts.
///
/// Abstracts over how a registry is shared so callers holding an
/// `Arc<dyn ContactRepository>` need not know about its locking.
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Add a contact from three field values.
    async fn add_contact(
        &self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> RegistryResult<ContactRef>;

    /// Add a contact from an insertion input whose fields may be absent.
    async fn add(&self, new_contact: NewContact) -> RegistryResult<ContactRef>;

    /// All stored contacts in admission order.
    async fn get_all_contacts(&self) -> Vec<ContactRef>;

    /// Number of stored contacts.
    async fn len(&self) -> usize;

    /// Whether no contact has been admitted yet.
    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
