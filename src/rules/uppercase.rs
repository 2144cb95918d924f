//! Uppercase rule - requires at least one uppercase letter.

use secrecy::{ExposeSecret, SecretString};

use super::{PasswordRule, RuleDescription, RuleName};

#[derive(Debug, Clone, Default)]
pub struct UppercaseRule;

impl PasswordRule for UppercaseRule {
    fn name(&self) -> RuleName {
        RuleName::Uppercase
    }

    fn assert(&self, password: &SecretString) -> bool {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return false;
        }
        pwd.chars().any(|c| c.is_uppercase())
    }

    fn explain(&self) -> RuleDescription {
        RuleDescription {
            code: "uppercase",
            message: "Password must contain at least one uppercase letter".to_string(),
        }
    }
}
