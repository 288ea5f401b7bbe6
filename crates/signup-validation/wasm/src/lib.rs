//! Signup Validation WASM
//!
//! Runs the registration form validator in the browser.
//! The page's DOM is reached through `web-sys`; the validation logic is the
//! same `signup-form` controller the native tests exercise.

use std::cell::RefCell;
use std::rc::Rc;

use signup_form::{Document, FormValidator, SubmitEvent, SubmitListener, ValidatorConfig};
use signup_validation_core as validation;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Element, Event, HtmlElement, HtmlFormElement, HtmlInputElement};

/// Set panic hook for better error messages in the browser, then wire the
/// validator to the page unless `autostart` is disabled
#[wasm_bindgen(start)]
pub fn init() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "autostart")]
    init_form_validation(JsValue::UNDEFINED)?;

    Ok(())
}

/// Browser submit event
pub struct WebSubmitEvent(Event);

impl SubmitEvent for WebSubmitEvent {
    fn prevent_default(&self) {
        self.0.prevent_default();
    }
}

/// The page's `document`, seen through the validator's host interface
#[derive(Clone)]
pub struct WebDocument {
    document: web_sys::Document,
}

impl WebDocument {
    pub fn new(document: web_sys::Document) -> Self {
        Self { document }
    }

    /// The document of the current window
    pub fn from_window() -> Result<Self, JsValue> {
        web_sys::window()
            .and_then(|window| window.document())
            .map(Self::new)
            .ok_or_else(|| JsValue::from_str("No document available"))
    }
}

impl Document for WebDocument {
    type Form = HtmlFormElement;
    type Element = Element;
    type Event = WebSubmitEvent;

    fn query_form(&self, selector: &str) -> Option<HtmlFormElement> {
        self.document
            .query_selector(selector)
            .ok()
            .flatten()
            .and_then(|element| element.dyn_into::<HtmlFormElement>().ok())
    }

    fn field_in_form(&self, form: &HtmlFormElement, id: &str) -> Option<Element> {
        form.query_selector(&format!("#{}", id)).ok().flatten()
    }

    fn parent(&self, element: &Element) -> Option<Element> {
        element.parent_element()
    }

    fn query_within(&self, container: &Element, selector: &str) -> Option<Element> {
        container.query_selector(selector).ok().flatten()
    }

    fn value(&self, input: &Element) -> String {
        input
            .dyn_ref::<HtmlInputElement>()
            .map(HtmlInputElement::value)
            .unwrap_or_default()
    }

    fn set_text(&self, element: &Element, text: &str) {
        match element.dyn_ref::<HtmlElement>() {
            Some(html) => html.set_inner_text(text),
            None => element.set_text_content(Some(text)),
        }
    }

    fn toggle_class(&self, element: &Element, class: &str, force: bool) {
        if let Err(err) = element.class_list().toggle_with_force(class, force) {
            console::error_2(&JsValue::from_str("Failed to toggle class"), &err);
        }
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn add_submit_listener(
        &self,
        form: &HtmlFormElement,
        listener: SubmitListener<WebSubmitEvent>,
    ) {
        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| {
            listener(&WebSubmitEvent(event));
        });

        if let Err(err) =
            form.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())
        {
            console::error_2(&JsValue::from_str("Failed to register submit listener"), &err);
        }

        // The listener lives as long as the page.
        closure.forget();
    }

    fn submit(&self, form: &HtmlFormElement) {
        if let Err(err) = form.submit() {
            console::error_2(&JsValue::from_str("Form submission failed"), &err);
        }
    }
}

type WebValidator = Rc<FormValidator<WebDocument>>;

thread_local! {
    // Forms wired on this page, each with the validator listening on it
    static BOUND_FORMS: RefCell<Vec<(HtmlFormElement, WebValidator)>> = RefCell::new(Vec::new());
}

fn bound_validator(form: &HtmlFormElement) -> Option<WebValidator> {
    BOUND_FORMS.with(|forms| {
        forms
            .borrow()
            .iter()
            .find(|(bound, _)| bound == form)
            .map(|(_, validator)| Rc::clone(validator))
    })
}

/// Handle to the validator wired to the page
#[wasm_bindgen]
pub struct SignupForm {
    validator: WebValidator,
}

impl SignupForm {
    /// Whether both handles drive the same validator
    pub fn is_same_binding(&self, other: &SignupForm) -> bool {
        Rc::ptr_eq(&self.validator, &other.validator)
    }
}

#[wasm_bindgen]
impl SignupForm {
    /// Run a validation pass now, as a submit would
    ///
    /// Returns the report (`outcomes`, `passwordsMatch`, `submitted`).
    pub fn validate(&self) -> Result<JsValue, JsValue> {
        let report = self.validator.validate_inputs();
        Ok(serde_wasm_bindgen::to_value(&report)?)
    }

    #[wasm_bindgen(getter, js_name = isListening)]
    pub fn is_listening(&self) -> bool {
        self.validator.is_listening()
    }
}

/// Bind the validator to the page's form and intercept its submission
///
/// A form is wired at most once per page. Later calls for the same form
/// (including one made after `autostart` ran) return the existing handle and
/// register no further listener; their config is ignored.
///
/// # Arguments
/// * `config` - optional object with `formSelector`, `errorSlotSelector`,
///   `successClass`, `errorClass`
///
/// # Example (JavaScript)
/// ```javascript
/// const form = initFormValidation({ formSelector: '#signup' });
/// ```
#[wasm_bindgen(js_name = initFormValidation)]
pub fn init_form_validation(config: JsValue) -> Result<SignupForm, JsValue> {
    let config: ValidatorConfig = if config.is_undefined() || config.is_null() {
        ValidatorConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse config: {}", e)))?
    };

    let document = WebDocument::from_window()?;
    let form = document.query_form(&config.form_selector);
    if let Some(validator) = form.as_ref().and_then(bound_validator) {
        console::warn_1(&JsValue::from_str(&format!(
            "Form validation already initialized for `{}`",
            config.form_selector
        )));
        return Ok(SignupForm { validator });
    }

    let validator = FormValidator::new(document, config).map_err(|err| {
        let message = JsValue::from_str(&err.to_string());
        console::error_1(&message);
        message
    })?;

    let validator = Rc::new(validator);
    validator.init_form();
    if let Some(form) = form {
        BOUND_FORMS.with(|forms| forms.borrow_mut().push((form, Rc::clone(&validator))));
    }

    Ok(SignupForm { validator })
}

/// Quick name validation
#[wasm_bindgen(js_name = isValidName)]
pub fn is_valid_name_js(name: &str) -> bool {
    validation::is_valid_name(validation::trim_value(name))
}

/// Quick email validation
#[wasm_bindgen(js_name = isValidEmail)]
pub fn is_valid_email_js(email: &str) -> bool {
    validation::is_valid_email(validation::trim_value(email))
}

/// Quick password length validation
#[wasm_bindgen(js_name = isPasswordLongEnough)]
pub fn is_password_long_enough_js(password: &str) -> bool {
    validation::is_password_long_enough(validation::trim_value(password))
}

/// Compare a password and its confirmation after trimming both
#[wasm_bindgen(js_name = passwordsMatch)]
pub fn passwords_match_js(password: &str, confirm_password: &str) -> bool {
    validation::passwords_match(
        validation::trim_value(password),
        validation::trim_value(confirm_password),
    )
}
