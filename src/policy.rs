//! Active rule set construction.

use crate::config::{ConfigError, DEFAULT_MIN_LENGTH, PasswordPreferences};
use crate::rules::{
    DigitRule, LengthRule, PasswordRule, RuleDescription, SpecialsRule, UppercaseRule,
};

/// The rules enabled by the current preferences, in display order.
pub struct ActiveRuleSet {
    rules: Vec<Box<dyn PasswordRule>>,
}

impl ActiveRuleSet {
    /// Builds the active rule set once from preferences.
    ///
    /// The length rule is always present; a zero minimum falls back to
    /// [`DEFAULT_MIN_LENGTH`]. Uppercase and digit rules are included when
    /// required. The specials rule is included only when special characters
    /// are disallowed; when they are permitted the rule is omitted entirely,
    /// not evaluated and ignored.
    pub fn build(prefs: &PasswordPreferences) -> Result<Self, ConfigError> {
        let min_length = if prefs.min_length == 0 {
            DEFAULT_MIN_LENGTH
        } else {
            prefs.min_length
        };

        let mut rules: Vec<Box<dyn PasswordRule>> = vec![Box::new(LengthRule::new(min_length))];
        if prefs.require_uppercase {
            rules.push(Box::new(UppercaseRule));
        }
        if prefs.require_digit {
            rules.push(Box::new(DigitRule));
        }
        if !prefs.allow_special_characters {
            rules.push(Box::new(SpecialsRule::new(false)));
        }

        let rule_set = Self::from_rules(rules)?;

        #[cfg(feature = "tracing")]
        tracing::debug!("active rule set built with {} rules", rule_set.len());

        Ok(rule_set)
    }

    /// Assembles a rule set from explicit rules, validating each one.
    pub fn from_rules(rules: Vec<Box<dyn PasswordRule>>) -> Result<Self, ConfigError> {
        for rule in &rules {
            rule.validate()?;
        }
        Ok(Self { rules })
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn PasswordRule> {
        self.rules.iter().map(|rule| rule.as_ref())
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule descriptions in display order, for seeding the requirements list.
    pub fn descriptions(&self) -> Vec<RuleDescription> {
        self.iter().map(|rule| rule.explain()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleName;

    fn names(rule_set: &ActiveRuleSet) -> Vec<RuleName> {
        rule_set.iter().map(|rule| rule.name()).collect()
    }

    #[test]
    fn test_build_all_rules_active() {
        let prefs = PasswordPreferences {
            min_length: 6,
            require_uppercase: true,
            require_digit: true,
            allow_special_characters: false,
        };
        let rule_set = ActiveRuleSet::build(&prefs).unwrap();
        assert_eq!(
            names(&rule_set),
            vec![
                RuleName::Length,
                RuleName::Uppercase,
                RuleName::Digit,
                RuleName::Specials
            ]
        );
    }

    #[test]
    fn test_build_length_only() {
        let prefs = PasswordPreferences {
            min_length: 10,
            require_uppercase: false,
            require_digit: false,
            allow_special_characters: true,
        };
        let rule_set = ActiveRuleSet::build(&prefs).unwrap();
        assert_eq!(names(&rule_set), vec![RuleName::Length]);
    }

    #[test]
    fn test_build_specials_omitted_when_allowed() {
        let prefs = PasswordPreferences {
            allow_special_characters: true,
            ..PasswordPreferences::default()
        };
        let rule_set = ActiveRuleSet::build(&prefs).unwrap();
        assert!(!names(&rule_set).contains(&RuleName::Specials));
    }

    #[test]
    fn test_build_zero_min_length_defaults() {
        let prefs = PasswordPreferences {
            min_length: 0,
            require_uppercase: false,
            require_digit: false,
            allow_special_characters: true,
        };
        let rule_set = ActiveRuleSet::build(&prefs).unwrap();
        let description = &rule_set.descriptions()[0];
        assert_eq!(
            description.message,
            format!("Password must be at least {DEFAULT_MIN_LENGTH} characters")
        );
    }

    #[test]
    fn test_build_rejects_oversized_min_length() {
        let prefs = PasswordPreferences {
            min_length: 100_000,
            ..PasswordPreferences::default()
        };
        let result = ActiveRuleSet::build(&prefs);
        assert_eq!(result.err(), Some(ConfigError::MinLengthTooLarge(100_000)));
    }

    #[test]
    fn test_from_rules_empty() {
        let rule_set = ActiveRuleSet::from_rules(Vec::new()).unwrap();
        assert!(rule_set.is_empty());
        assert_eq!(rule_set.len(), 0);
    }

    #[test]
    fn test_descriptions_in_display_order() {
        let prefs = PasswordPreferences {
            min_length: 6,
            require_uppercase: true,
            require_digit: true,
            allow_special_characters: false,
        };
        let rule_set = ActiveRuleSet::build(&prefs).unwrap();
        let codes: Vec<&str> = rule_set
            .descriptions()
            .iter()
            .map(|d| d.code)
            .collect();
        assert_eq!(codes, vec!["length", "uppercase", "digit", "special"]);
    }
}
