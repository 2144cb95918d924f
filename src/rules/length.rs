//! Length rule - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{PasswordRule, RuleDescription, RuleName};
use crate::config::{ConfigError, MAX_MIN_LENGTH};

#[derive(Debug, Clone)]
pub struct LengthRule {
    min_length: usize,
}

impl LengthRule {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }
}

impl PasswordRule for LengthRule {
    fn name(&self) -> RuleName {
        RuleName::Length
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.min_length == 0 {
            return Err(ConfigError::MinLengthZero);
        }
        if self.min_length > MAX_MIN_LENGTH {
            return Err(ConfigError::MinLengthTooLarge(self.min_length));
        }
        Ok(())
    }

    fn assert(&self, password: &SecretString) -> bool {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return false;
        }
        pwd.len() >= self.min_length
    }

    fn explain(&self) -> RuleDescription {
        RuleDescription {
            code: "length",
            message: format!("Password must be at least {} characters", self.min_length),
        }
    }
}
