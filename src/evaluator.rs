//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::Criterion;
use crate::denylist::Denylist;
use crate::types::{Evaluation, Strength};

/// Evaluates a candidate password against the denylist and the five
/// scoring criteria.
///
/// Denylist membership short-circuits: a commonly used password reports
/// neither score nor missing criteria. Otherwise each satisfied criterion
/// adds one point and the score classifies the password as Weak (0-2),
/// Medium (3-4) or Strong (5).
///
/// Total over all input strings, including empty ones; never fails.
pub fn evaluate(password: &SecretString, denylist: &Denylist) -> Evaluation {
    let pwd = password.expose_secret();

    if denylist.contains(pwd) {
        #[cfg(feature = "tracing")]
        tracing::debug!("password rejected: denylist hit");

        return Evaluation {
            strength: Strength::Common,
            score: 0,
            missing: Vec::new(),
        };
    }

    let mut score: u8 = 0;
    let mut missing = Vec::new();

    for criterion in Criterion::ALL {
        if criterion.is_satisfied(pwd) {
            score += 1;
        } else {
            missing.push(criterion);
        }
    }

    let strength = Strength::from_score(score);

    #[cfg(feature = "tracing")]
    tracing::debug!(score, ?strength, "password evaluated");

    Evaluation {
        strength,
        score,
        missing,
    }
}
