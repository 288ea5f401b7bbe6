// File: signup-form/src/lib.rs
// Purpose: Main entry point for the signup form controller

//! # signup-form
//!
//! Validates the five-field registration form (first name, last name, email,
//! password, confirm password) against a host document, paints each field's
//! container with `success` / `error` state and only submits the form once
//! every field passes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use signup_form::{FormValidator, ValidatorConfig};
//!
//! let validator = Rc::new(FormValidator::new(document, ValidatorConfig::default())?);
//! validator.init_form();
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod field;
pub mod validator;

pub use config::ValidatorConfig;
pub use dom::{Document, SubmitEvent, SubmitListener};
pub use error::FormError;
pub use field::{FieldDescriptor, FieldId, Rule, PASSWORD_MISMATCH_MESSAGE, REGISTRATION_FIELDS};
pub use validator::{FailureCause, FormValidator, ValidationOutcome, ValidationReport};

#[cfg(feature = "memory")]
pub use dom::memory::{MemoryDocument, MemoryEvent, NodeId};
