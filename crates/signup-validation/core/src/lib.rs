//! Signup Validation Core
//!
//! Context-free validator functions for the registration form.
//! Used by the form controller and re-exported to JavaScript by the WASM crate.

pub mod email;
pub mod password;
pub mod string;

// Re-export all validators
pub use email::*;
pub use password::*;
pub use string::*;
