//! Proof chains - ordered evidence from a claim to foundational axioms

use crate::{AxiomRecord, Relation};
use serde::{Deserialize, Serialize};

/// A single evidentiary step in a proof chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofStep {
    /// Identifier of the cited axiom
    pub axiom_id: String,

    /// Content of the cited axiom
    pub content: String,

    /// Formal specification of the cited axiom
    pub formal_spec: String,

    /// Semantics module the axiom was extracted from
    pub module: String,

    /// Provenance layer tag
    pub layer: String,

    /// Confidence of the cited axiom in [0, 1]
    pub confidence: f64,

    /// How this step relates to the claim (or, for `DependsOn`, to the
    /// previous step)
    pub relation: Relation,
}

impl ProofStep {
    /// Build a step citing the given axiom record
    pub fn from_axiom(axiom: &AxiomRecord, relation: Relation) -> Self {
        Self {
            axiom_id: axiom.id.clone(),
            content: axiom.content.clone(),
            formal_spec: axiom.formal_spec.clone(),
            module: axiom.module.clone(),
            layer: axiom.layer.clone(),
            confidence: axiom.confidence,
            relation,
        }
    }
}

/// An ordered evidence sequence for a claim
///
/// Steps are kept in insertion order (evidentiary order). The chain
/// confidence is the minimum step confidence once any step is present, and
/// zero for an empty chain; `push_step` maintains this invariant on every
/// append.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProofChain {
    /// The claim this chain supports or relates to
    pub claim: String,

    /// Evidence steps in insertion order
    pub steps: Vec<ProofStep>,

    /// Whether the chain terminates in a foundation-layer axiom
    pub grounded: bool,

    /// Combined confidence: `min` over step confidences, 0 when empty
    pub confidence: f64,

    /// Human-readable summary of the chain
    pub explanation: String,
}

impl ProofChain {
    /// Create an empty, ungrounded chain for a claim
    pub fn new(claim: impl Into<String>) -> Self {
        Self {
            claim: claim.into(),
            steps: Vec::new(),
            grounded: false,
            confidence: 0.0,
            explanation: String::new(),
        }
    }

    /// Append a step and recompute the chain confidence
    pub fn push_step(&mut self, step: ProofStep) {
        self.steps.push(step);
        self.confidence = self
            .steps
            .iter()
            .map(|s| s.confidence)
            .fold(f64::INFINITY, f64::min);
    }

    /// Number of steps in the chain
    pub fn depth(&self) -> usize {
        self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn step(id: &str, confidence: f64) -> ProofStep {
        ProofStep {
            axiom_id: id.to_string(),
            content: String::new(),
            formal_spec: String::new(),
            module: String::new(),
            layer: String::new(),
            confidence,
            relation: Relation::Supports,
        }
    }

    #[test]
    fn test_empty_chain_has_zero_confidence() {
        let chain = ProofChain::new("claim");
        assert_eq!(chain.confidence, 0.0);
        assert_eq!(chain.depth(), 0);
        assert!(!chain.grounded);
    }

    #[test]
    fn test_push_step_takes_minimum_confidence() {
        let mut chain = ProofChain::new("claim");

        chain.push_step(step("a1", 0.9));
        assert_eq!(chain.confidence, 0.9);

        chain.push_step(step("a2", 0.6));
        assert_eq!(chain.confidence, 0.6);

        // A higher-confidence step must not raise the chain confidence
        chain.push_step(step("a3", 0.95));
        assert_eq!(chain.confidence, 0.6);
    }

    #[test]
    fn test_steps_keep_insertion_order() {
        let mut chain = ProofChain::new("claim");
        chain.push_step(step("first", 1.0));
        chain.push_step(step("second", 1.0));

        let ids: Vec<&str> = chain.steps.iter().map(|s| s.axiom_id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second"]);
    }
}
