//! Character-class criteria - uppercase, lowercase, digit, special.
//!
//! All classes are ASCII-only: letters and digits outside A-Z/a-z/0-9
//! never satisfy a criterion.

/// The fixed set of characters accepted by the special-character criterion.
pub const SPECIAL_CHARS: &str = "@$!%*?&";

/// At least one ASCII uppercase letter (A-Z).
pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

/// At least one ASCII lowercase letter (a-z).
pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

/// At least one ASCII digit (0-9).
pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

/// At least one character from [`SPECIAL_CHARS`].
pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
