// File: signup-form/src/field.rs
// Purpose: The fixed set of registration fields and the rule each one is checked against

use std::fmt;

use serde::{Deserialize, Serialize};
use signup_validation_core as validation;

/// Message shown on the confirm-password field when the two passwords differ
pub const PASSWORD_MISMATCH_MESSAGE: &str = "Passwords do not match";

/// Identifier of a tracked field, matching the input element's `id` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
}

impl FieldId {
    /// All tracked fields in form order
    pub const ALL: [FieldId; 5] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::Password,
        FieldId::ConfirmPassword,
    ];

    /// The element id used to look the field up in the form
    pub fn as_str(self) -> &'static str {
        match self {
            FieldId::FirstName => "first-name",
            FieldId::LastName => "last-name",
            FieldId::Email => "email",
            FieldId::Password => "password",
            FieldId::ConfirmPassword => "confirm-password",
        }
    }

    /// Position of the field in [`FieldId::ALL`] and [`REGISTRATION_FIELDS`]
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validator applied to a field's trimmed value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// ASCII letters only
    Name,
    /// Permissive RFC 2822 address
    Email,
    /// At least 8 characters
    PasswordLength,
    /// Equal to the trimmed password value
    MatchesPassword,
}

impl Rule {
    /// Runs the rule against a trimmed value
    ///
    /// `password` is the trimmed value of the password field; only
    /// [`Rule::MatchesPassword`] looks at it.
    pub fn check(self, value: &str, password: &str) -> bool {
        match self {
            Rule::Name => validation::is_valid_name(value),
            Rule::Email => validation::is_valid_email(value),
            Rule::PasswordLength => validation::is_password_long_enough(value),
            Rule::MatchesPassword => validation::passwords_match(password, value),
        }
    }
}

/// Static description of one tracked field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub required_message: &'static str,
    pub invalid_message: &'static str,
    pub rule: Rule,
}

/// The registration form's fields, in form order
pub const REGISTRATION_FIELDS: [FieldDescriptor; 5] = [
    FieldDescriptor {
        id: FieldId::FirstName,
        required_message: "First name is required",
        invalid_message: "Invalid first name",
        rule: Rule::Name,
    },
    FieldDescriptor {
        id: FieldId::LastName,
        required_message: "Last name is required",
        invalid_message: "Invalid last name",
        rule: Rule::Name,
    },
    FieldDescriptor {
        id: FieldId::Email,
        required_message: "Email is required",
        invalid_message: "Provide a valid email address",
        rule: Rule::Email,
    },
    FieldDescriptor {
        id: FieldId::Password,
        required_message: "Password is required",
        invalid_message: "Password must be at least 8 characters",
        rule: Rule::PasswordLength,
    },
    FieldDescriptor {
        id: FieldId::ConfirmPassword,
        required_message: "Confirm Password is required",
        invalid_message: PASSWORD_MISMATCH_MESSAGE,
        rule: Rule::MatchesPassword,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_order_matches_ids() {
        for (index, descriptor) in REGISTRATION_FIELDS.iter().enumerate() {
            assert_eq!(descriptor.id.index(), index);
            assert_eq!(FieldId::ALL[index], descriptor.id);
        }
    }

    #[test]
    fn test_field_id_strings() {
        assert_eq!(FieldId::FirstName.as_str(), "first-name");
        assert_eq!(FieldId::ConfirmPassword.to_string(), "confirm-password");
    }

    #[test]
    fn test_rules() {
        assert!(Rule::Name.check("John", ""));
        assert!(!Rule::Name.check("John2", ""));
        assert!(Rule::Email.check("john@doe.com", ""));
        assert!(!Rule::Email.check("john@", ""));
        assert!(Rule::PasswordLength.check("password1", ""));
        assert!(!Rule::PasswordLength.check("pass", ""));
        assert!(Rule::MatchesPassword.check("password1", "password1"));
        assert!(!Rule::MatchesPassword.check("password2", "password1"));
    }
}
