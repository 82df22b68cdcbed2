//! Detected contradictions between claims and axioms

use serde::{Deserialize, Serialize};

/// How a contradiction was established
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContradictionKind {
    /// A claim phrase directly opposed by an axiom phrase
    Direct,

    /// Safety-asserting claim language against danger language in the axiom
    Semantic,

    /// Opposition implied by modality (e.g. "no check" vs "must check")
    Implied,

    /// Established by the entailment classifier's cascade
    Entailment,
}

impl ContradictionKind {
    /// Get the kind name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ContradictionKind::Direct => "direct",
            ContradictionKind::Semantic => "semantic",
            ContradictionKind::Implied => "implied",
            ContradictionKind::Entailment => "entailment",
        }
    }
}

impl std::fmt::Display for ContradictionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A detected contradiction between a claim and an axiom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction {
    /// The claim under validation
    pub claim: String,

    /// Identifier of the contradicting axiom
    pub axiom_id: String,

    /// Content of the contradicting axiom
    pub axiom_content: String,

    /// Formal specification of the contradicting axiom
    pub formal_spec: String,

    /// How the contradiction was established
    pub kind: ContradictionKind,

    /// Detection confidence in [0, 1]
    pub confidence: f64,

    /// Human-readable justification
    pub explanation: String,
}
