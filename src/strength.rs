//! Strength classification over the external 0-4 score.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

pub use zxcvbn::Score;

/// Discrete strength buckets, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Good,
    Better,
    Optimal,
}

impl StrengthTier {
    /// Stable string form, used as the strength-meter class.
    pub fn as_class(&self) -> &'static str {
        match self {
            StrengthTier::VeryWeak => "very-weak",
            StrengthTier::Weak => "weak",
            StrengthTier::Good => "good",
            StrengthTier::Better => "better",
            StrengthTier::Optimal => "optimal",
        }
    }
}

impl fmt::Display for StrengthTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_class())
    }
}

/// Maps the external score to a tier. Zero-length input is always
/// [`StrengthTier::VeryWeak`], whatever the score says.
pub fn classify(password: &SecretString, score: Score) -> StrengthTier {
    if password.expose_secret().is_empty() {
        return StrengthTier::VeryWeak;
    }
    match score {
        Score::Zero => StrengthTier::VeryWeak,
        Score::One => StrengthTier::Weak,
        Score::Two => StrengthTier::Good,
        Score::Three => StrengthTier::Better,
        Score::Four => StrengthTier::Optimal,
        // The scorer contract guarantees 0-4.
        _ => unreachable!("strength score outside the 0-4 contract"),
    }
}

/// The external scoring collaborator, an opaque synchronous oracle.
pub trait StrengthScorer {
    fn score(&self, password: &SecretString) -> Score;
}

/// Default scorer backed by the zxcvbn estimator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZxcvbnScorer;

impl StrengthScorer for ZxcvbnScorer {
    fn score(&self, password: &SecretString) -> Score {
        let pwd = password.expose_secret();
        if pwd.is_empty() {
            return Score::Zero;
        }
        zxcvbn::zxcvbn(pwd, &[]).score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_classify_empty_forces_very_weak() {
        assert_eq!(classify(&secret(""), Score::Four), StrengthTier::VeryWeak);
        assert_eq!(classify(&secret(""), Score::Zero), StrengthTier::VeryWeak);
    }

    #[test]
    fn test_classify_score_mapping() {
        let pwd = secret("x");
        assert_eq!(classify(&pwd, Score::Zero), StrengthTier::VeryWeak);
        assert_eq!(classify(&pwd, Score::One), StrengthTier::Weak);
        assert_eq!(classify(&pwd, Score::Two), StrengthTier::Good);
        assert_eq!(classify(&pwd, Score::Three), StrengthTier::Better);
        assert_eq!(classify(&pwd, Score::Four), StrengthTier::Optimal);
    }

    #[test]
    fn test_tier_classes() {
        assert_eq!(StrengthTier::VeryWeak.as_class(), "very-weak");
        assert_eq!(StrengthTier::Optimal.as_class(), "optimal");
        assert_eq!(format!("{}", StrengthTier::Good), "good");
    }

    #[test]
    fn test_tier_ordering() {
        assert!(StrengthTier::VeryWeak < StrengthTier::Weak);
        assert!(StrengthTier::Better < StrengthTier::Optimal);
    }

    #[test]
    fn test_zxcvbn_scorer_empty_input() {
        assert_eq!(ZxcvbnScorer.score(&secret("")), Score::Zero);
    }

    #[test]
    fn test_zxcvbn_scorer_weak_input() {
        let score = ZxcvbnScorer.score(&secret("password"));
        assert!(score <= Score::One);
    }

    #[test]
    fn test_zxcvbn_scorer_strong_input() {
        let score = ZxcvbnScorer.score(&secret("correct horse battery staple 42 Q!"));
        assert!(score >= Score::Three);
    }
}
