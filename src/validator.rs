//! Password validation against the active rule set.

use secrecy::SecretString;

use crate::policy::ActiveRuleSet;
use crate::rules::RuleName;

/// Outcome of a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleVerdict {
    pub name: RuleName,
    pub met: bool,
}

/// One verdict per active rule, in display order. Always complete: a fresh
/// result carries exactly one entry for every rule in the set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    verdicts: Vec<RuleVerdict>,
}

impl ValidationResult {
    pub fn verdicts(&self) -> &[RuleVerdict] {
        &self.verdicts
    }

    pub fn get(&self, name: RuleName) -> Option<bool> {
        self.verdicts
            .iter()
            .find(|verdict| verdict.name == name)
            .map(|verdict| verdict.met)
    }

    /// True iff every active rule is met. Trivially true for an empty set.
    pub fn all_met(&self) -> bool {
        self.verdicts.iter().all(|verdict| verdict.met)
    }
}

/// Evaluates every active rule independently, with no short-circuiting.
/// Pure: the same rule set and password always yield the same result.
pub fn evaluate(rule_set: &ActiveRuleSet, password: &SecretString) -> ValidationResult {
    let verdicts = rule_set
        .iter()
        .map(|rule| RuleVerdict {
            name: rule.name(),
            met: rule.assert(password),
        })
        .collect();

    ValidationResult { verdicts }
}
