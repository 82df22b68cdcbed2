//! Validation verdicts produced by the top-level validator

use crate::{Contradiction, ProofChain};
use serde::{Deserialize, Serialize};

/// Verdict for one validated claim
///
/// Created fresh per call and never persisted by the core. The invariant
/// `is_valid == (no contradiction at or above the validity threshold)` is
/// established by the detector and carried here unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The claim that was validated
    pub claim: String,

    /// Whether the claim survived contradiction detection
    pub is_valid: bool,

    /// Overall confidence in the verdict, in [0, 1]
    pub confidence: f64,

    /// Contradictions found, highest confidence first
    pub contradictions: Vec<Contradiction>,

    /// Evidence chain assembled for the claim
    pub proof_chain: ProofChain,

    /// Human-readable summary of the verdict
    pub explanation: String,

    /// Advisory warnings (undefined behavior, security sensitivity, ...)
    pub warnings: Vec<String>,
}
