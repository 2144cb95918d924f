//! Confirmation match checking.

use secrecy::{ExposeSecret, SecretString};

/// True iff the two values are exactly equal. Two empty strings match; any
/// require-non-empty policy belongs to the form controller, not here.
pub fn matches(primary: &SecretString, confirmation: &SecretString) -> bool {
    primary.expose_secret() == confirmation.expose_secret()
}
