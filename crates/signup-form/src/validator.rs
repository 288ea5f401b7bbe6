// File: signup-form/src/validator.rs
// Purpose: Binds the registration fields to a document and runs the validation pass

use std::cell::Cell;
use std::rc::Rc;

use serde::Serialize;
use signup_validation_core::{passwords_match, trim_value};

use crate::config::ValidatorConfig;
use crate::dom::{Document, SubmitEvent};
use crate::error::FormError;
use crate::field::{FieldDescriptor, FieldId, PASSWORD_MISMATCH_MESSAGE, REGISTRATION_FIELDS};

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FailureCause {
    /// Trimmed value was empty
    Empty,
    /// Value was present but the field's rule rejected it
    Invalid,
    /// Confirmation differs from the password
    Mismatch,
}

/// Result for one field in one validation pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationOutcome {
    pub field: FieldId,
    pub is_valid: bool,
    /// Text written to the error slot (empty on success)
    pub message: String,
    pub cause: Option<FailureCause>,
}

impl ValidationOutcome {
    fn success(field: FieldId) -> Self {
        Self {
            field,
            is_valid: true,
            message: String::new(),
            cause: None,
        }
    }

    fn failure(field: FieldId, message: &str, cause: FailureCause) -> Self {
        Self {
            field,
            is_valid: false,
            message: message.to_string(),
            cause: Some(cause),
        }
    }
}

/// Everything one validation pass decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    /// One outcome per field, in form order
    outcomes: Vec<ValidationOutcome>,
    pub passwords_match: bool,
    /// Whether the pass ended in a trusted submit
    pub submitted: bool,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.submitted
    }

    /// One outcome per field, in form order
    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    pub fn outcome(&self, field: FieldId) -> &ValidationOutcome {
        &self.outcomes[field.index()]
    }

    /// Fields that ended the pass in the error state
    pub fn failed_fields(&self) -> Vec<FieldId> {
        self.outcomes
            .iter()
            .filter(|o| !o.is_valid)
            .map(|o| o.field)
            .collect()
    }
}

/// A descriptor resolved against the document
struct BoundField<E> {
    descriptor: FieldDescriptor,
    input: E,
    container: E,
}

/// Validator for the registration form
///
/// Construction resolves the form, every field's input and every input's
/// container up front, so later passes never meet a missing element.
pub struct FormValidator<D: Document> {
    document: D,
    config: ValidatorConfig,
    form: D::Form,
    fields: Vec<BoundField<D::Element>>,
    listening: Cell<bool>,
}

impl<D: Document> FormValidator<D> {
    /// Bind the validator to the form in `document`
    pub fn new(document: D, config: ValidatorConfig) -> Result<Self, FormError> {
        let form = document
            .query_form(&config.form_selector)
            .ok_or_else(|| FormError::MissingForm {
                selector: config.form_selector.clone(),
            })?;

        let fields = REGISTRATION_FIELDS
            .iter()
            .map(|descriptor| -> Result<BoundField<D::Element>, FormError> {
                let field = descriptor.id;
                let input = document
                    .field_in_form(&form, field.as_str())
                    .ok_or(FormError::MissingField { field })?;
                let container = document
                    .parent(&input)
                    .ok_or(FormError::MissingContainer { field })?;
                Ok(BoundField {
                    descriptor: *descriptor,
                    input,
                    container,
                })
            })
            .collect::<Result<Vec<_>, FormError>>()?;

        tracing::debug!("Form validator bound to `{}`", config.form_selector);

        Ok(Self {
            document,
            config,
            form,
            fields,
            listening: Cell::new(false),
        })
    }

    pub fn document(&self) -> &D {
        &self.document
    }

    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// Whether the submit interceptor has been registered
    pub fn is_listening(&self) -> bool {
        self.listening.get()
    }

    /// Entry point for a user-initiated submit
    ///
    /// Suppresses the host's own submission and runs the validation pass.
    pub fn attempt_submit(&self, event: &D::Event) -> ValidationReport {
        event.prevent_default();
        self.validate_inputs()
    }

    /// Submit the form directly, bypassing the interceptor
    pub fn trusted_submit(&self) {
        tracing::info!("All fields valid, submitting form");
        self.document.submit(&self.form);
    }

    /// Validate every field, paint the result and submit if everything passed
    pub fn validate_inputs(&self) -> ValidationReport {
        let password = self.trimmed(FieldId::Password);
        let confirm_password = self.trimmed(FieldId::ConfirmPassword);

        let mut outcomes: Vec<ValidationOutcome> = self
            .fields
            .iter()
            .map(|field| {
                let descriptor = &field.descriptor;
                let raw = self.document.value(&field.input);
                let value = trim_value(&raw);

                let outcome = if value.is_empty() {
                    // The invalid message is shown for empty values too.
                    ValidationOutcome::failure(
                        descriptor.id,
                        descriptor.invalid_message,
                        FailureCause::Empty,
                    )
                } else if descriptor.rule.check(value, &password) {
                    ValidationOutcome::success(descriptor.id)
                } else {
                    ValidationOutcome::failure(
                        descriptor.id,
                        descriptor.invalid_message,
                        FailureCause::Invalid,
                    )
                };

                self.paint(field, descriptor.invalid_message, outcome.is_valid);
                tracing::debug!("Field {} valid: {}", descriptor.id, outcome.is_valid);
                outcome
            })
            .collect();

        // Equality check on the confirmation overrides its per-field result.
        let passwords_match = passwords_match(&password, &confirm_password);
        self.paint(
            self.bound(FieldId::ConfirmPassword),
            PASSWORD_MISMATCH_MESSAGE,
            passwords_match,
        );
        outcomes[FieldId::ConfirmPassword.index()] = if passwords_match {
            ValidationOutcome::success(FieldId::ConfirmPassword)
        } else {
            ValidationOutcome::failure(
                FieldId::ConfirmPassword,
                PASSWORD_MISMATCH_MESSAGE,
                FailureCause::Mismatch,
            )
        };

        let all_success = self
            .fields
            .iter()
            .all(|field| self.document.has_class(&field.container, &self.config.success_class));

        let submitted = all_success && passwords_match;
        if submitted {
            self.trusted_submit();
        } else {
            tracing::debug!("Submission withheld");
        }

        ValidationReport {
            outcomes,
            passwords_match,
            submitted,
        }
    }

    /// Paint a field's container as success or error
    ///
    /// Writes `message` (or nothing on success) into the container's error
    /// slot when it has one, and flips the success and error classes.
    pub fn set_status(&self, field: FieldId, message: &str, is_success: bool) {
        self.paint(self.bound(field), message, is_success);
    }

    pub fn set_error(&self, field: FieldId, message: &str) {
        self.set_status(field, message, false);
    }

    pub fn set_success(&self, field: FieldId) {
        self.set_status(field, "", true);
    }

    fn paint(&self, field: &BoundField<D::Element>, message: &str, is_success: bool) {
        let container = &field.container;

        if let Some(slot) = self
            .document
            .query_within(container, &self.config.error_slot_selector)
        {
            self.document
                .set_text(&slot, if is_success { "" } else { message });
        }

        self.document
            .toggle_class(container, &self.config.success_class, is_success);
        self.document
            .toggle_class(container, &self.config.error_class, !is_success);
    }

    fn bound(&self, field: FieldId) -> &BoundField<D::Element> {
        &self.fields[field.index()]
    }

    fn trimmed(&self, field: FieldId) -> String {
        let raw = self.document.value(&self.bound(field).input);
        trim_value(&raw).to_string()
    }
}

impl<D: Document + 'static> FormValidator<D> {
    /// Register the submit interceptor on the form
    ///
    /// Only the first call registers; later calls return `false` and leave the
    /// form with a single listener.
    pub fn init_form(self: &Rc<Self>) -> bool {
        if self.listening.replace(true) {
            tracing::warn!("Submit interceptor already registered, ignoring");
            return false;
        }

        let validator = Rc::clone(self);
        self.document.add_submit_listener(
            &self.form,
            Box::new(move |event: &D::Event| {
                validator.attempt_submit(event);
            }),
        );
        true
    }
}
