//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

use crate::string::JS_WHITESPACE_CLASS;

// Local part: dot-atom or quoted string.
// Domain: bracketed IPv4 literal or dotted labels ending in a 2+ letter TLD.
// Whitespace and "any character" follow JavaScript's `\s` and `.`.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:{}@"]+"#, JS_WHITESPACE_CLASS);
    let pattern = format!(
        concat!(
            r#"^(({atom}(\.{atom})*)|("[^\n\r\x{{2028}}\x{{2029}}]+"))"#,
            r"@((\[[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\])",
            r"|(([a-zA-Z0-9-]+\.)+[a-zA-Z]{{2,}}))$",
        ),
        atom = atom,
    );
    Regex::new(&pattern).unwrap()
});

/// Validates email format
///
/// Permissive RFC 2822 style check. Matching is case-insensitive: the
/// address is lowercased before it is tested.
///
/// # Examples
/// ```
/// use signup_validation_core::is_valid_email;
/// assert!(is_valid_email("user@example.com"));
/// assert!(is_valid_email("user@[192.168.1.1]"));
/// assert!(!is_valid_email("plainaddress"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(&email.to_lowercase())
}
