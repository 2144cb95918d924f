//! Specials rule - forbids special characters when configured to.

use secrecy::{ExposeSecret, SecretString};

use super::{PasswordRule, RuleDescription, RuleName};

/// The special-character set: printable ASCII punctuation plus space.
pub const SPECIAL_CHARACTERS: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~ "##;

#[derive(Debug, Clone)]
pub struct SpecialsRule {
    allow: bool,
}

impl SpecialsRule {
    pub fn new(allow: bool) -> Self {
        Self { allow }
    }

    fn contains_special(pwd: &str) -> bool {
        pwd.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
    }
}

impl PasswordRule for SpecialsRule {
    fn name(&self) -> RuleName {
        RuleName::Specials
    }

    /// An empty password is unmet even in the permissive branch.
    fn assert(&self, password: &SecretString) -> bool {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return false;
        }
        if !self.allow && Self::contains_special(pwd) {
            return false;
        }
        true
    }

    fn explain(&self) -> RuleDescription {
        let message = if self.allow {
            "Password may contain special characters".to_string()
        } else {
            "Password should not contain special characters".to_string()
        };
        RuleDescription {
            code: "special",
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specials_rule_disallowed_with_special() {
        let rule = SpecialsRule::new(false);
        let pwd = SecretString::new("abc!def".to_string().into());
        assert!(!rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_disallowed_with_space() {
        let rule = SpecialsRule::new(false);
        let pwd = SecretString::new("abc def".to_string().into());
        assert!(!rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_disallowed_clean() {
        let rule = SpecialsRule::new(false);
        let pwd = SecretString::new("Abc123".to_string().into());
        assert!(rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_allowed_with_special() {
        let rule = SpecialsRule::new(true);
        let pwd = SecretString::new("abc!def".to_string().into());
        assert!(rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_empty_password_disallowed() {
        let rule = SpecialsRule::new(false);
        let pwd = SecretString::new("".to_string().into());
        assert!(!rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_empty_password_allowed() {
        // Inherited asymmetry: empty input is unmet in both branches.
        let rule = SpecialsRule::new(true);
        let pwd = SecretString::new("".to_string().into());
        assert!(!rule.assert(&pwd));
    }

    #[test]
    fn test_specials_rule_explain_varies_with_allow() {
        assert_eq!(
            SpecialsRule::new(false).explain().message,
            "Password should not contain special characters"
        );
        assert_eq!(
            SpecialsRule::new(true).explain().message,
            "Password may contain special characters"
        );
        assert_eq!(SpecialsRule::new(false).explain().code, "special");
    }
}
