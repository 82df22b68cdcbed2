//! Entailment classification result

use crate::Relation;
use serde::{Deserialize, Serialize};

/// Result of classifying the relationship between one claim and one axiom
///
/// Immutable; the classifier produces a fresh result per (claim, axiom)
/// pair. `relation` is always one of `Supports`, `Contradicts`, or
/// `RelatedTo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntailmentResult {
    /// The classified relationship
    pub relation: Relation,

    /// Classification confidence in [0, 1]
    pub confidence: f64,

    /// Human-readable justification for the verdict
    pub explanation: String,
}

impl EntailmentResult {
    /// Create a new entailment result
    pub fn new(relation: Relation, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            relation,
            confidence,
            explanation: explanation.into(),
        }
    }
}
