//! String validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Name validation regex (ASCII letters only)
static NAME_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z]+$").unwrap());

/// Validates a first or last name
///
/// Accepts one or more ASCII letters. Spaces, hyphens, digits and
/// non-ASCII letters are rejected.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// ECMAScript WhiteSpace and LineTerminator code points, as a regex class body
///
/// This is the set JavaScript's `\s` and `String.prototype.trim` use. It
/// differs from Unicode `White_Space`: U+FEFF is included, U+0085 is not.
pub const JS_WHITESPACE_CLASS: &str = concat!(
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}",
    r"\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}",
);

/// Whether `c` is ECMAScript WhiteSpace or a LineTerminator
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims a raw input value the way the browser's `String.prototype.trim` does
pub fn trim_value(value: &str) -> &str {
    value.trim_matches(is_js_whitespace)
}
