//! Admission metrics for a registry.

use crate::domain::ContactField;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for insertions admitted and rejected by one registry.
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    contacts_added: AtomicU64,
    contacts_rejected: AtomicU64,
}

/// Point-in-time copy of [`RegistryMetrics`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub contacts_added: u64,
    pub contacts_rejected: u64,
}

impl RegistryMetrics {
    /// Create a new set of zeroed counters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a successful insertion.
    pub fn track_added(&self) {
        self.contacts_added.fetch_add(1, Ordering::Relaxed);
    }

    /// Track a rejected insertion.
    pub fn track_rejected(&self, field: Option<ContactField>) {
        self.contacts_rejected.fetch_add(1, Ordering::Relaxed);

        tracing::trace!(field = ?field, "Insertion rejected");
    }

    pub fn contacts_added(&self) -> u64 {
        self.contacts_added.load(Ordering::Relaxed)
    }

    pub fn contacts_rejected(&self) -> u64 {
        self.contacts_rejected.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            contacts_added: self.contacts_added(),
            contacts_rejected: self.contacts_rejected(),
        }
    }
}
