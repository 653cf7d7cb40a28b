//! Error types for the contact registry.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactField, ContactId};
use thiserror::Error;

/// Errors that can occur when inserting into the registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A required contact field was missing or empty
    #[error("Invalid argument: {field} {reason}")]
    InvalidArgument { field: ContactField, reason: String },

    /// The identifier supplier produced an id that was already issued
    #[error("Duplicate contact id: {0}")]
    DuplicateId(ContactId),
}

impl RegistryError {
    /// The offending field, if this is a validation failure.
    pub fn field(&self) -> Option<ContactField> {
        match self {
            Self::InvalidArgument { field, .. } => Some(*field),
            Self::DuplicateId(_) => None,
        }
    }

    /// Whether this error is an `InvalidArgument` failure.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RegistryError
pub type RegistryResult<T> = Result<T, RegistryError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
