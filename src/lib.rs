//! Contact Registry - an in-memory store of validated contacts.
//!
//! The registry admits contacts whose first name, last name and phone number
//! are all present and non-empty, assigns each a unique identifier, and lists
//! them back in admission order.
//!
//! # Architecture
//!
//! - **domain**: Value objects (`ContactId`, `ContactField`)
//! - **models**: The `Contact` record and the `NewContact` insertion input
//! - **registry**: `ContactRegistry` and pluggable identifier suppliers
//! - **repositories**: Async, lock-guarded access for concurrent callers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Logging setup and admission metrics

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod registry;
pub mod repositories;

pub use config::{Config, Environment, IdStrategy};
pub use domain::{ContactField, ContactId};
pub use error::{ConfigError, RegistryError, RegistryResult};
pub use models::{Contact, ContactRef, NewContact};
pub use registry::{ContactRegistry, IdSupplier, SequentialIdSupplier, UuidIdSupplier};
pub use repositories::{ContactRepository, SharedContactRegistry};
