//! Polarity of a piece of text about program semantics

use serde::{Deserialize, Serialize};

/// Whether text asserts defined/safe or undefined/erroneous behavior
///
/// Polarity is the backbone of entailment classification: a positive claim
/// against a negative axiom on the same topic is a contradiction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Polarity {
    /// Asserts defined, safe, or valid behavior
    Positive,

    /// Asserts undefined, erroneous, or invalid behavior
    Negative,

    /// Purely descriptive text with no safety assertion
    Neutral,
}

impl Polarity {
    /// Get the polarity name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::Positive => "positive",
            Polarity::Negative => "negative",
            Polarity::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Polarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
