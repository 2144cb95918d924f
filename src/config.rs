//! Password policy preferences.
//!
//! Preferences are fixed at startup; a malformed configuration is fatal
//! and surfaces as [`ConfigError`] when the rule set is built.

use thiserror::Error;

/// Minimum length applied when the configured value is zero (unset).
pub const DEFAULT_MIN_LENGTH: usize = 8;

/// Largest minimum length a policy may require.
pub const MAX_MIN_LENGTH: usize = 256;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum length must be at least 1")]
    MinLengthZero,
    #[error("minimum length {0} exceeds the supported maximum of {MAX_MIN_LENGTH}")]
    MinLengthTooLarge(usize),
}

/// Which rules the policy enforces and how.
///
/// `min_length == 0` means unset; the rule-set builder substitutes
/// [`DEFAULT_MIN_LENGTH`]. The specials rule is active only when
/// `allow_special_characters` is `false`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPreferences {
    pub min_length: usize,
    pub require_uppercase: bool,
    pub require_digit: bool,
    pub allow_special_characters: bool,
}

impl Default for PasswordPreferences {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            require_uppercase: true,
            require_digit: true,
            allow_special_characters: false,
        }
    }
}
