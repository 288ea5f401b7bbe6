//! Shared page fixture for the form validator tests

#![allow(dead_code)]

use signup_form::{Document, FieldId, MemoryDocument, NodeId};

/// The registration page as the stylesheet expects it:
///
/// ```html
/// <form id="form">
///   <div class="input-control">
///     <input id="first-name"> <div class="error"></div>
///   </div>
///   ...
/// </form>
/// ```
pub struct Page {
    pub doc: MemoryDocument,
    pub form: NodeId,
}

impl Page {
    pub fn new() -> Self {
        Self::build(&FieldId::ALL, true)
    }

    /// Page whose containers carry no error slot
    pub fn without_error_slots() -> Self {
        Self::build(&FieldId::ALL, false)
    }

    /// Page containing only the given fields
    pub fn with_fields(fields: &[FieldId]) -> Self {
        Self::build(fields, true)
    }

    fn build(fields: &[FieldId], error_slots: bool) -> Self {
        let doc = MemoryDocument::new();
        let body = doc.create_element("body");
        let form = doc.create_element("form");
        doc.set_id(form, "form");
        doc.append_child(body, form);

        for field in fields {
            let control = doc.create_element("div");
            doc.add_class(control, "input-control");
            doc.append_child(form, control);

            let input = doc.create_element("input");
            doc.set_id(input, field.as_str());
            doc.append_child(control, input);

            if error_slots {
                let slot = doc.create_element("div");
                doc.add_class(slot, "error");
                doc.append_child(control, slot);
            }
        }

        Self { doc, form }
    }

    pub fn input(&self, field: FieldId) -> NodeId {
        self.doc
            .element_by_id(field.as_str())
            .expect("field is on the page")
    }

    pub fn container(&self, field: FieldId) -> NodeId {
        self.doc
            .parent(&self.input(field))
            .expect("field has a container")
    }

    pub fn type_into(&self, field: FieldId, value: &str) {
        self.doc.set_value(self.input(field), value);
    }

    pub fn fill(&self, first: &str, last: &str, email: &str, password: &str, confirm: &str) {
        self.type_into(FieldId::FirstName, first);
        self.type_into(FieldId::LastName, last);
        self.type_into(FieldId::Email, email);
        self.type_into(FieldId::Password, password);
        self.type_into(FieldId::ConfirmPassword, confirm);
    }

    pub fn message(&self, field: FieldId) -> String {
        let slot = self
            .doc
            .query_within(&self.container(field), ".error")
            .expect("container has an error slot");
        self.doc.text(slot)
    }

    pub fn is_success(&self, field: FieldId) -> bool {
        let container = self.container(field);
        self.doc.has_class(&container, "success") && !self.doc.has_class(&container, "error")
    }

    pub fn is_error(&self, field: FieldId) -> bool {
        let container = self.container(field);
        self.doc.has_class(&container, "error") && !self.doc.has_class(&container, "success")
    }
}
