use contact_registry::{ContactId, IdSupplier, SequentialIdSupplier};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Supplier that returns the same id every time.
///
/// Used to exercise the registry's duplicate-id guard.
#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct FixedIdSupplier {
    id: ContactId,
}

#[allow(dead_code)]
impl FixedIdSupplier {
    pub fn new(id: &str) -> Self {
        Self {
            id: ContactId::new(id).unwrap(),
        }
    }
}

impl IdSupplier for FixedIdSupplier {
    fn next_id(&self) -> ContactId {
        self.id.clone()
    }
}

/// Sequential supplier that counts how often it was asked for an id.
///
/// Clones share the counter, so a test can keep one clone for inspection
/// while the registry owns the other.
#[allow(dead_code)]
#[derive(Debug, Clone, Default)]
pub struct RecordingIdSupplier {
    inner: Arc<SequentialIdSupplier>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl RecordingIdSupplier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdSupplier for RecordingIdSupplier {
    fn next_id(&self) -> ContactId {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.next_id()
    }
}
