//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for domain concepts like
//! contact IDs and the names of required contact fields. Value objects
//! validate at construction time so invalid data cannot be represented.

pub mod contact_id;
pub mod errors;
pub mod field;

pub use contact_id::ContactId;
pub use errors::ValidationError;
pub use field::ContactField;
