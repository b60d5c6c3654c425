//! Entropy estimation and crack-time projection.
//!
//! Charset-size model: each character class present in the password widens
//! the assumed search alphabet.

/// Size of the assumed search alphabet for a password.
///
/// Counts the full ASCII punctuation pool for symbols, wider than the
/// special-character scoring criterion.
pub fn charset_size(password: &str) -> u32 {
    let mut size = 0;
    if password.chars().any(|c| c.is_ascii_lowercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_uppercase()) {
        size += 26;
    }
    if password.chars().any(|c| c.is_ascii_digit()) {
        size += 10;
    }
    if password.chars().any(|c| c.is_ascii_punctuation()) {
        size += 32;
    }
    size
}

/// Estimated entropy in bits: `length * log2(charset size)`.
///
/// Returns `0.0` when no known character class is present.
pub fn entropy_bits(password: &str) -> f64 {
    let size = charset_size(password);
    if size == 0 {
        return 0.0;
    }
    password.chars().count() as f64 * f64::from(size).log2()
}

/// An attacker profile with a sustained guessing rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrackSpeed {
    /// Scenario name shown to the user.
    pub label: &'static str,
    /// Sustained guesses per second.
    pub guesses_per_second: f64,
}

impl CrackSpeed {
    /// Attacker profiles used for crack-time projection.
    pub const SCENARIOS: [CrackSpeed; 3] = [
        CrackSpeed {
            label: "Online (throttled, e.g. login attempts)",
            guesses_per_second: 1e2,
        },
        CrackSpeed {
            label: "Offline GPU (single modern GPU)",
            guesses_per_second: 1e9,
        },
        CrackSpeed {
            label: "Large offline cluster / botnet",
            guesses_per_second: 1e14,
        },
    ];

    /// Mean seconds to find the password: half the keyspace at this rate.
    ///
    /// Saturates to infinity once the exponent leaves f64 range.
    pub fn mean_crack_seconds(&self, bits: f64) -> f64 {
        let avg_attempts_log2 = bits.max(0.0) - 1.0;
        if avg_attempts_log2 >= 1000.0 {
            return f64::INFINITY;
        }
        avg_attempts_log2.exp2() / self.guesses_per_second
    }
}

/// Formats a duration in seconds for humans.
pub fn format_duration(seconds: f64) -> String {
    const MINUTE: f64 = 60.0;
    const HOUR: f64 = 3_600.0;
    const DAY: f64 = 86_400.0;
    const YEAR: f64 = 31_536_000.0;

    if seconds < 1.0 {
        return "less than 1 second".to_string();
    }
    if seconds < MINUTE {
        return format!("{} second(s)", seconds as u64);
    }
    if seconds < HOUR {
        return format!("{} minute(s)", (seconds / MINUTE) as u64);
    }
    if seconds < DAY {
        return format!("{} hour(s)", (seconds / HOUR) as u64);
    }
    if seconds < YEAR {
        return format!("{} day(s)", (seconds / DAY) as u64);
    }

    let years = seconds / YEAR;
    if years < 1000.0 {
        format!("{years:.1} year(s)")
    } else {
        format!("{years:.0} year(s)")
    }
}
