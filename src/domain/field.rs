//! Names of the required contact fields.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A required field of a contact, used to report which input was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    FirstName,
    LastName,
    PhoneNumber,
}

impl ContactField {
    /// All required fields, in validation order.
    pub const ALL: [ContactField; 3] = [Self::FirstName, Self::LastName, Self::PhoneNumber];

    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "first name",
            Self::LastName => "last name",
            Self::PhoneNumber => "phone number",
        }
    }
}

impl fmt::Display for ContactField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_display() {
        assert_eq!(ContactField::FirstName.to_string(), "first name");
        assert_eq!(ContactField::LastName.to_string(), "last name");
        assert_eq!(ContactField::PhoneNumber.to_string(), "phone number");
    }

    #[test]
    fn test_field_validation_order() {
        assert_eq!(
            ContactField::ALL,
            [
                ContactField::FirstName,
                ContactField::LastName,
                ContactField::PhoneNumber
            ]
        );
    }

    #[test]
    fn test_field_serialization() {
        let json = serde_json::to_string(&ContactField::PhoneNumber).unwrap();
        assert_eq!(json, "\"phoneNumber\"");
    }
}
