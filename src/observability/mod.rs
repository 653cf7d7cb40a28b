//! Observability for the contact registry.
//!
//! Structured logging setup and per-registry admission counters.

pub mod logging;
pub mod metrics;

pub use logging::init_logging;
pub use metrics::{MetricsSnapshot, RegistryMetrics};
