//! Browser tests for the page binding
//!
//! These need a real DOM. Run them with the start hook disabled, since it
//! would try to wire a form before any test has built one:
//!
//! ```text
//! wasm-pack test --headless --firefox crates/signup-validation/wasm -- --no-default-features
//! ```

#![cfg(target_arch = "wasm32")]

use signup_form::{FieldId, ValidatorConfig, PASSWORD_MISMATCH_MESSAGE};
use signup_validation_wasm::{init_form_validation, SignupForm};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{Element, Event, EventInit, HtmlFormElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web_sys::Document {
    web_sys::window().unwrap().document().unwrap()
}

/// Append a registration form with id `form_id` to the page
///
/// Native submissions go to a hidden frame so the test page stays put.
fn build_form(form_id: &str, values: [&str; 5]) -> HtmlFormElement {
    let doc = document();
    let body = doc.body().unwrap();
    let sink = format!("{}-sink", form_id);

    let frame = doc.create_element("iframe").unwrap();
    frame.set_attribute("name", &sink).unwrap();
    body.append_child(&frame).unwrap();

    let form: HtmlFormElement = doc.create_element("form").unwrap().dyn_into().unwrap();
    form.set_id(form_id);
    form.set_attribute("action", "about:blank").unwrap();
    form.set_attribute("target", &sink).unwrap();

    for (field, value) in FieldId::ALL.iter().zip(values) {
        let control = doc.create_element("div").unwrap();
        control.set_class_name("input-control");

        let input: HtmlInputElement = doc.create_element("input").unwrap().dyn_into().unwrap();
        input.set_id(field.as_str());
        input.set_value(value);

        let slot = doc.create_element("div").unwrap();
        slot.set_class_name("error");

        control.append_child(&input).unwrap();
        control.append_child(&slot).unwrap();
        form.append_child(&control).unwrap();
    }

    body.append_child(&form).unwrap();
    form
}

fn wire(form_id: &str) -> Result<SignupForm, JsValue> {
    let config = ValidatorConfig {
        form_selector: format!("#{}", form_id),
        ..ValidatorConfig::default()
    };
    init_form_validation(serde_wasm_bindgen::to_value(&config).unwrap())
}

/// Dispatch a cancelable submit event, as a user submission would
fn submit(form: &HtmlFormElement) -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    let event = Event::new_with_event_init_dict("submit", &init).unwrap();
    form.dispatch_event(&event).unwrap();
    event
}

fn container(form: &HtmlFormElement, field: FieldId) -> Element {
    form.query_selector(&format!("#{}", field.as_str()))
        .unwrap()
        .unwrap()
        .parent_element()
        .unwrap()
}

fn message(form: &HtmlFormElement, field: FieldId) -> String {
    container(form, field)
        .query_selector(".error")
        .unwrap()
        .unwrap()
        .text_content()
        .unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_valid_submission_paints_every_field_success() {
    let form = build_form(
        "signup-valid",
        ["John", "Doe", "john@doe.com", "password1", "password1"],
    );
    let handle = wire("signup-valid").unwrap();
    assert!(handle.is_listening());

    let event = submit(&form);

    assert!(event.default_prevented());
    for field in FieldId::ALL {
        let classes = container(&form, field).class_list();
        assert!(classes.contains("success"), "{field} should be success");
        assert!(!classes.contains("error"), "{field} should not be error");
        assert_eq!(message(&form, field), "");
    }
}

#[wasm_bindgen_test]
fn test_mismatched_confirmation_shows_message() {
    let form = build_form(
        "signup-mismatch",
        ["John", "Doe", "john@doe.com", "password1", "password2"],
    );
    wire("signup-mismatch").unwrap();

    let event = submit(&form);

    assert!(event.default_prevented());
    let confirm = container(&form, FieldId::ConfirmPassword).class_list();
    assert!(confirm.contains("error"));
    assert!(!confirm.contains("success"));
    assert_eq!(message(&form, FieldId::ConfirmPassword), PASSWORD_MISMATCH_MESSAGE);
    assert!(container(&form, FieldId::Password).class_list().contains("success"));
}

#[wasm_bindgen_test]
fn test_invalid_name_blocks_submission() {
    let form = build_form(
        "signup-invalid",
        ["Anna Marie", "Doe", "john@doe.com", "password1", "password1"],
    );
    wire("signup-invalid").unwrap();

    let event = submit(&form);

    assert!(event.default_prevented());
    assert!(container(&form, FieldId::FirstName).class_list().contains("error"));
    assert_eq!(message(&form, FieldId::FirstName), "Invalid first name");
}

#[wasm_bindgen_test]
fn test_second_init_reuses_the_binding() {
    let form = build_form(
        "signup-twice",
        ["", "Doe", "john@doe.com", "password1", "password1"],
    );
    let first = wire("signup-twice").unwrap();
    let second = wire("signup-twice").unwrap();

    assert!(first.is_same_binding(&second));
    assert!(second.is_listening());

    let event = submit(&form);
    assert!(event.default_prevented());
    assert_eq!(message(&form, FieldId::FirstName), "Invalid first name");
}

#[wasm_bindgen_test]
fn test_missing_form_is_an_error() {
    let err = wire("signup-nowhere").err().unwrap();
    assert_eq!(
        err.as_string().unwrap(),
        "no form matches selector `#signup-nowhere`"
    );
}
