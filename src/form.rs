//! Form controller - the form-validity state machine.
//!
//! Owns the two field values and the derived UI state, and exposes explicit
//! event methods so the machine can be driven and tested without any UI
//! binding. All work is synchronous and runs to completion per event.

use secrecy::{ExposeSecret, SecretString};

use crate::config::{ConfigError, PasswordPreferences};
use crate::matcher;
use crate::policy::ActiveRuleSet;
use crate::rules::RuleName;
use crate::strength::{StrengthScorer, StrengthTier, ZxcvbnScorer, classify};
use crate::validator::{self, ValidationResult};

/// Per-rule UI marker state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleMarker {
    Met,
    Unmet,
}

impl RuleMarker {
    pub fn as_class(&self) -> &'static str {
        match self {
            RuleMarker::Met => "met",
            RuleMarker::Unmet => "unmet",
        }
    }
}

/// Confirmation-field sub-state. `Unset` holds until the field is first
/// edited or focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationState {
    Unset,
    Mismatched,
    Matched,
}

/// Primary-field state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryState {
    Empty,
    Invalid,
    Valid,
}

/// Everything the UI needs after an event, derived fresh each time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// One marker per active rule, in display order.
    pub markers: Vec<(RuleName, RuleMarker)>,
    pub strength: StrengthTier,
    pub confirmation: ConfirmationState,
    /// True iff every rule is met and the two fields match.
    pub submit_enabled: bool,
}

/// Result of a submission attempt. The caller must suppress the default
/// form-submission action in both cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Accepted,
    Rejected,
}

pub struct FormController<S: StrengthScorer = ZxcvbnScorer> {
    rule_set: ActiveRuleSet,
    scorer: S,
    primary: SecretString,
    confirmation: SecretString,
    confirmation_touched: bool,
    validation: ValidationResult,
    strength: StrengthTier,
}

impl FormController<ZxcvbnScorer> {
    /// Builds a controller with the default zxcvbn scorer.
    pub fn new(prefs: &PasswordPreferences) -> Result<Self, ConfigError> {
        Self::with_scorer(prefs, ZxcvbnScorer)
    }
}

impl<S: StrengthScorer> FormController<S> {
    /// Builds the rule set from preferences and runs the initial pass over
    /// empty input, so the first view already shows every rule unmet.
    pub fn with_scorer(prefs: &PasswordPreferences, scorer: S) -> Result<Self, ConfigError> {
        let rule_set = ActiveRuleSet::build(prefs)?;
        let primary = SecretString::new(String::new().into());
        let validation = validator::evaluate(&rule_set, &primary);

        Ok(Self {
            rule_set,
            scorer,
            primary,
            confirmation: SecretString::new(String::new().into()),
            confirmation_touched: false,
            validation,
            strength: StrengthTier::VeryWeak,
        })
    }

    pub fn rule_set(&self) -> &ActiveRuleSet {
        &self.rule_set
    }

    pub fn primary_state(&self) -> PrimaryState {
        if self.primary.expose_secret().is_empty() {
            PrimaryState::Empty
        } else if self.validation.all_met() {
            PrimaryState::Valid
        } else {
            PrimaryState::Invalid
        }
    }

    fn confirmation_state(&self) -> ConfirmationState {
        if !self.confirmation_touched {
            ConfirmationState::Unset
        } else if matcher::matches(&self.primary, &self.confirmation) {
            ConfirmationState::Matched
        } else {
            ConfirmationState::Mismatched
        }
    }

    /// Current view, recomputed from the owned state. Never stale: the
    /// submit flag and confirmation state are re-derived on every call.
    pub fn view(&self) -> FormView {
        let markers = self
            .validation
            .verdicts()
            .iter()
            .map(|verdict| {
                let marker = if verdict.met {
                    RuleMarker::Met
                } else {
                    RuleMarker::Unmet
                };
                (verdict.name, marker)
            })
            .collect();

        FormView {
            markers,
            strength: self.strength,
            confirmation: self.confirmation_state(),
            submit_enabled: self.validation.all_met()
                && matcher::matches(&self.primary, &self.confirmation),
        }
    }

    /// Re-runs the validator and classifier, then re-derives the
    /// confirmation state: a primary edit can break a previously matching
    /// confirmation without the confirmation field being touched.
    pub fn on_primary_changed(&mut self, value: SecretString) -> FormView {
        self.primary = value;
        self.validation = validator::evaluate(&self.rule_set, &self.primary);
        let score = self.scorer.score(&self.primary);
        self.strength = classify(&self.primary, score);
        self.view()
    }

    /// Re-checks the match only; never re-runs the validator.
    pub fn on_confirmation_changed(&mut self, value: SecretString) -> FormView {
        self.confirmation = value;
        self.confirmation_touched = true;
        self.view()
    }

    /// Focus-in counts as touching the field.
    pub fn on_confirmation_focus(&mut self) -> FormView {
        self.confirmation_touched = true;
        self.view()
    }

    /// Re-validates and re-checks the match from the current field values.
    /// The accept signal is the return value and fires exactly once per
    /// successful call; a rejected attempt has no side effect.
    pub fn on_submit(&mut self) -> SubmitOutcome {
        self.validation = validator::evaluate(&self.rule_set, &self.primary);
        let accepted =
            self.validation.all_met() && matcher::matches(&self.primary, &self.confirmation);

        if accepted {
            #[cfg(feature = "tracing")]
            tracing::info!("password submission accepted");
            SubmitOutcome::Accepted
        } else {
            #[cfg(feature = "tracing")]
            tracing::info!("password submission rejected");
            SubmitOutcome::Rejected
        }
    }
}
