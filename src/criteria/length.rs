//! Length criterion - checks password minimum length.

/// Minimum password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Checks if the password is at least [`MIN_LENGTH`] characters long.
///
/// Counted in Unicode scalar values, not bytes.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
