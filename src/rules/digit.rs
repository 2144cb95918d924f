//! Digit rule - requires at least one digit.

use secrecy::{ExposeSecret, SecretString};

use super::{PasswordRule, RuleDescription, RuleName};

#[derive(Debug, Clone, Default)]
pub struct DigitRule;

impl PasswordRule for DigitRule {
    fn name(&self) -> RuleName {
        RuleName::Digit
    }

    fn assert(&self, password: &SecretString) -> bool {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return false;
        }
        pwd.chars().any(|c| c.is_ascii_digit())
    }

    fn explain(&self) -> RuleDescription {
        RuleDescription {
            code: "digit",
            message: "Password must contain at least one digit".to_string(),
        }
    }
}
