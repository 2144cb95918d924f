//! Password rule enforcement library
//!
//! This library provides composable password rules, a configuration-driven
//! validator, a strength classifier over the zxcvbn score, and a form
//! controller that gates submission on all rules passing and the two
//! password fields matching.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_enforce::{FormController, PasswordPreferences, SubmitOutcome};
//! use secrecy::SecretString;
//!
//! let prefs = PasswordPreferences {
//!     min_length: 6,
//!     require_uppercase: true,
//!     require_digit: true,
//!     allow_special_characters: false,
//! };
//!
//! let mut form = FormController::new(&prefs).expect("valid preferences");
//!
//! let view = form.on_primary_changed(SecretString::new("Abc123".to_string().into()));
//! assert!(view.markers.iter().all(|(_, m)| m.as_class() == "met"));
//!
//! form.on_confirmation_changed(SecretString::new("Abc123".to_string().into()));
//! assert_eq!(form.on_submit(), SubmitOutcome::Accepted);
//! ```

// Internal modules
mod config;
mod form;
mod matcher;
mod policy;
mod rules;
mod strength;
mod validator;

// Public API
pub use config::{ConfigError, DEFAULT_MIN_LENGTH, MAX_MIN_LENGTH, PasswordPreferences};
pub use form::{
    ConfirmationState, FormController, FormView, PrimaryState, RuleMarker, SubmitOutcome,
};
pub use matcher::matches;
pub use policy::ActiveRuleSet;
pub use rules::{
    DigitRule, LengthRule, PasswordRule, RuleDescription, RuleName, SPECIAL_CHARACTERS,
    SpecialsRule, UppercaseRule,
};
pub use strength::{Score, StrengthScorer, StrengthTier, ZxcvbnScorer, classify};
pub use validator::{RuleVerdict, ValidationResult, evaluate};
