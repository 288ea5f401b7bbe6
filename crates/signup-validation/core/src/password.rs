//! Password validation functions

/// Minimum password length accepted by the signup form
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Checks the password is at least [`MIN_PASSWORD_LENGTH`] long
///
/// Length is counted in UTF-16 code units, the same unit an input element's
/// `value.length` reports in the browser. There is no upper bound and no
/// character class requirement.
pub fn is_password_long_enough(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LENGTH
}

/// Checks that the password and its confirmation are identical
///
/// Both values are expected to be trimmed already.
pub fn passwords_match(password: &str, confirm_password: &str) -> bool {
    password == confirm_password
}
