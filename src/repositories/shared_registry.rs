use crate::error::RegistryResult;
use crate::models::{ContactRef, NewContact};
use crate::observability::MetricsSnapshot;
use crate::registry::ContactRegistry;
use crate::repositories::traits::ContactRepository;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Contact repository backed by a lock-guarded [`ContactRegistry`].
///
/// Clones share the same registry. Each insertion runs validation, id
/// generation and append under a single write lock, so concurrent callers
/// still observe unique ids and a consistent admission order.
#[derive(Debug, Clone)]
pub struct SharedContactRegistry {
    registry: Arc<RwLock<ContactRegistry>>,
}

impl SharedContactRegistry {
    /// Wrap an existing registry.
    pub fn new(registry: ContactRegistry) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
        }
    }

    /// Admission and rejection counts of the underlying registry.
    pub async fn metrics(&self) -> MetricsSnapshot {
        self.registry.read().await.metrics()
    }
}

impl Default for SharedContactRegistry {
    fn default() -> Self {
        Self::new(ContactRegistry::new())
    }
}

#[async_trait]
impl ContactRepository for SharedContactRegistry {
    async fn add_contact(
        &self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> RegistryResult<ContactRef> {
        let mut registry = self.registry.write().await;
        registry.add_contact(first_name, last_name, phone_number)
    }

    async fn add(&self, new_contact: NewContact) -> RegistryResult<ContactRef> {
        let mut registry = self.registry.write().await;
        registry.add(new_contact)
    }

    async fn get_all_contacts(&self) -> Vec<ContactRef> {
        self.registry.read().await.get_all_contacts()
    }

    async fn len(&self) -> usize {
        self.registry.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_shared_registry_starts_empty() {
        let repo = SharedContactRegistry::default();
        assert!(repo.is_empty().await);
        assert!(repo.get_all_contacts().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let repo = SharedContactRegistry::default();
        let other = repo.clone();

        repo.add_contact("John", "Doe", "0123456789").await.unwrap();

        assert_eq!(other.len().await, 1);
        assert_eq!(other.metrics().await.contacts_added, 1);
    }

    #[tokio::test]
    async fn test_rejection_leaves_shared_state_unchanged() {
        let repo = SharedContactRegistry::default();
        let err = repo.add(NewContact::default()).await.unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!(repo.len().await, 0);
        assert_eq!(repo.metrics().await.contacts_rejected, 1);
    }
}
