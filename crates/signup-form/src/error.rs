// File: signup-form/src/error.rs
// Purpose: Setup errors raised while binding the validator to a document

use thiserror::Error;

use crate::field::FieldId;

/// Failure to resolve the form or one of its fields at construction time
///
/// Validation failures are never reported through this type; they are a
/// normal outcome and only show up as inline field state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("no form matches selector `{selector}`")]
    MissingForm { selector: String },

    #[error("form has no `#{field}` field")]
    MissingField { field: FieldId },

    #[error("field `#{field}` has no parent container")]
    MissingContainer { field: FieldId },
}
