//! Password rules
//!
//! Each rule judges a single aspect of password acceptability.

mod digit;
mod length;
mod specials;
mod uppercase;

pub use digit::DigitRule;
pub use length::LengthRule;
pub use specials::{SPECIAL_CHARACTERS, SpecialsRule};
pub use uppercase::UppercaseRule;

use std::fmt;

use secrecy::SecretString;

use crate::config::ConfigError;

/// Closed vocabulary of rule identifiers. The string form doubles as the
/// per-rule UI marker id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RuleName {
    Length,
    Uppercase,
    Digit,
    Specials,
}

impl RuleName {
    pub fn as_str(&self) -> &'static str {
        match self {
            RuleName::Length => "length",
            RuleName::Uppercase => "uppercase",
            RuleName::Digit => "digit",
            RuleName::Specials => "specials",
        }
    }
}

impl fmt::Display for RuleName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static, human-readable description of a rule, independent of any
/// particular password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleDescription {
    pub code: &'static str,
    pub message: String,
}

/// A single named predicate over a password.
///
/// An unmet rule is a state, not an error: `assert` never fails. Every rule
/// treats an empty password as unmet.
pub trait PasswordRule {
    fn name(&self) -> RuleName;

    /// Checks the rule's own configuration. Runs once, at rule-set build.
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }

    /// Judges the password against this rule.
    fn assert(&self, password: &SecretString) -> bool;

    fn explain(&self) -> RuleDescription;
}
