//! Password scoring criteria
//!
//! Each criterion is an explicit character-class predicate worth one point.

mod classes;
mod length;

pub use classes::{SPECIAL_CHARS, has_digit, has_lowercase, has_special, has_uppercase};
pub use length::{MIN_LENGTH, meets_min_length};

/// One of the five scoring criteria.
///
/// [`Criterion::ALL`] fixes the order unmet criteria are reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    /// At least [`MIN_LENGTH`] characters.
    Length,
    /// At least one ASCII uppercase letter (A-Z).
    Uppercase,
    /// At least one ASCII lowercase letter (a-z).
    Lowercase,
    /// At least one ASCII digit (0-9).
    Digit,
    /// At least one character from [`SPECIAL_CHARS`].
    Special,
}

impl Criterion {
    /// Every criterion, in reporting order.
    pub const ALL: [Criterion; 5] = [
        Criterion::Length,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Special,
    ];

    /// Checks whether the password meets this criterion.
    pub fn is_satisfied(self, password: &str) -> bool {
        match self {
            Criterion::Length => meets_min_length(password),
            Criterion::Uppercase => has_uppercase(password),
            Criterion::Lowercase => has_lowercase(password),
            Criterion::Digit => has_digit(password),
            Criterion::Special => has_special(password),
        }
    }

    /// Human-readable description used in `Missing: ...` feedback.
    pub fn description(self) -> &'static str {
        match self {
            Criterion::Length => "at least 8 characters",
            Criterion::Uppercase => "uppercase letter",
            Criterion::Lowercase => "lowercase letter",
            Criterion::Digit => "number",
            Criterion::Special => "special character (@$!%*?&)",
        }
    }
}
