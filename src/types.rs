//! Evaluation result types.

use std::fmt;

use crate::criteria::Criterion;

/// Overall classification of a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strength {
    /// Present in the denylist of commonly used passwords.
    Common,
    /// Score 0-2.
    Weak,
    /// Score 3-4.
    Medium,
    /// Score 5: every criterion met.
    Strong,
}

impl Strength {
    /// Classifies a criteria score in `0..=5`.
    pub fn from_score(score: u8) -> Strength {
        match score {
            0..=2 => Strength::Weak,
            3..=4 => Strength::Medium,
            _ => Strength::Strong,
        }
    }
}

/// Outcome of evaluating a single password.
///
/// Built fresh per call by [`evaluate`](crate::evaluate). Rendering with
/// `Display` yields the user-facing feedback line.
///
/// Invariants: `Common` and `Strong` carry an empty `missing` list;
/// otherwise `score + missing.len() == 5` and `missing` preserves
/// [`Criterion::ALL`] order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// Overall classification.
    pub strength: Strength,
    /// Number of satisfied criteria, `0..=5`. Always 0 for `Common`.
    pub score: u8,
    /// Unmet criteria in reporting order.
    pub missing: Vec<Criterion>,
}

impl Evaluation {
    fn feedback(&self) -> String {
        let descriptions: Vec<&str> = self.missing.iter().map(|c| c.description()).collect();
        descriptions.join(", ")
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.strength {
            Strength::Common => write!(f, "Commonly used password!"),
            Strength::Weak => write!(f, "Weak Password! Missing: {}", self.feedback()),
            Strength::Medium => write!(f, "Medium Password! Missing: {}", self.feedback()),
            Strength::Strong => write!(f, "Strong Password! Nice Going!"),
        }
    }
}
