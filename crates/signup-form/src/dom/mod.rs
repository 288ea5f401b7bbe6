//! Host document abstraction
//!
//! The validator never talks to a browser directly. Everything it needs from
//! the page goes through [`Document`], so the same controller runs against
//! `web-sys` in the browser and against [`memory::MemoryDocument`] in tests.

#[cfg(feature = "memory")]
pub mod memory;

/// A submit event delivered to a registered listener
pub trait SubmitEvent {
    /// Stop the browser's own form submission
    fn prevent_default(&self);
}

/// Callback invoked for every submit event on a form
pub type SubmitListener<E> = Box<dyn Fn(&E)>;

/// Operations the validator performs on the page
///
/// Handles are cheap to clone references into the host's tree. Methods take
/// `&self`; hosts mutate through interior references the way DOM handles do.
pub trait Document {
    type Form;
    type Element: Clone;
    type Event: SubmitEvent;

    /// First form matching `selector`
    fn query_form(&self, selector: &str) -> Option<Self::Form>;

    /// Element with the given `id` inside `form`
    fn field_in_form(&self, form: &Self::Form, id: &str) -> Option<Self::Element>;

    /// Immediate parent element
    fn parent(&self, element: &Self::Element) -> Option<Self::Element>;

    /// First descendant of `container` matching `selector`
    fn query_within(&self, container: &Self::Element, selector: &str) -> Option<Self::Element>;

    /// Current value of an input control
    fn value(&self, input: &Self::Element) -> String;

    /// Replace an element's rendered text
    fn set_text(&self, element: &Self::Element, text: &str);

    /// Add (`force == true`) or remove a class
    fn toggle_class(&self, element: &Self::Element, class: &str, force: bool);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Register a listener for the form's submit event
    fn add_submit_listener(&self, form: &Self::Form, listener: SubmitListener<Self::Event>);

    /// Native submission; does not dispatch a submit event
    fn submit(&self, form: &Self::Form);
}
