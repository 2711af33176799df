//! Short code generation.
//!
//! Codes are drawn uniformly from the 62-character alphanumeric alphabet, giving
//! 62^6 (about 5.7 * 10^10) possible values. Uniqueness is not guaranteed here; the
//! caller checks the store and retries.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of generated codes.
pub const GENERATED_CODE_LENGTH: usize = 6;

/// Generates a random 6-character alphanumeric code.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_CODE_LENGTH)
        .map(char::from)
        .collect()
}
