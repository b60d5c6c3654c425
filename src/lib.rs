//! Common-password detection and strength feedback
//!
//! Checks a candidate password against a denylist of commonly used
//! passwords and five character-class criteria, producing a
//! classification with a human-readable feedback line.
//!
//! # Features
//!
//! - `cli` (default): Builds the interactive `pwd-checker` binary
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_DENYLIST_PATH`: Custom path to denylist file
//!   (default: `./assets/denylist.txt`)
//!
//! # Example
//!
//! ```rust
//! use pwd_checker::{Denylist, Strength, evaluate};
//! use secrecy::SecretString;
//!
//! // Load from a file with Denylist::from_file, or build one in place
//! let denylist: Denylist = ["password", "123456"].into_iter().collect();
//!
//! let candidate = SecretString::new("Abcdef1!".to_string().into());
//! let evaluation = evaluate(&candidate, &denylist);
//!
//! assert_eq!(evaluation.strength, Strength::Strong);
//! println!("{evaluation}");
//! ```

// Internal modules
mod criteria;
mod denylist;
mod entropy;
mod evaluator;
mod types;

// Public API
pub use criteria::{Criterion, SPECIAL_CHARS};
pub use denylist::{Denylist, DenylistError};
pub use entropy::{CrackSpeed, charset_size, entropy_bits, format_duration};
pub use evaluator::evaluate;
pub use types::{Evaluation, Strength};
