//! Top-level claim validation against the axiom knowledge base

use crate::{ContradictionDetector, ProofChainGenerator, ReasoningConfig};
use tracing::debug;
use veracity_domain::traits::{AxiomSearch, DependencyGraph};
use veracity_domain::{Contradiction, ProofChain, ValidationResult};

/// Claim keywords that mark security-sensitive territory
const SECURITY_KEYWORDS: &[&str] = &["overflow", "buffer", "pointer", "null", "bounds"];

/// Validates claims by combining contradiction detection with proof-chain
/// grounding
///
/// Stateless between calls; every validation issues a bounded number of
/// read-only queries and produces a fresh [`ValidationResult`]. Collaborator
/// failures degrade to a low-confidence UNCERTAIN verdict - `validate` never
/// fails for that reason.
pub struct AxiomValidator<S: AxiomSearch, G: DependencyGraph> {
    detector: ContradictionDetector<S>,
    generator: ProofChainGenerator<S, G>,
    config: ReasoningConfig,
}

impl<S: AxiomSearch + Clone, G: DependencyGraph> AxiomValidator<S, G> {
    /// Create a validator over the given backends
    pub fn new(search: S, graph: G, config: ReasoningConfig) -> Self {
        Self {
            detector: ContradictionDetector::new(search.clone(), config.clone()),
            generator: ProofChainGenerator::new(search, graph, config.clone()),
            config,
        }
    }
}

impl<S: AxiomSearch, G: DependencyGraph> AxiomValidator<S, G> {
    /// Create a validator from pre-built components
    pub fn from_parts(
        detector: ContradictionDetector<S>,
        generator: ProofChainGenerator<S, G>,
        config: ReasoningConfig,
    ) -> Self {
        Self {
            detector,
            generator,
            config,
        }
    }

    /// Validate a single claim
    pub fn validate(&self, claim: &str) -> ValidationResult {
        let (is_valid, contradictions) = self.detector.validate_claim(claim);
        let proof_chain = self.generator.generate(claim);

        let confidence = self.overall_confidence(&contradictions, &proof_chain);
        let explanation = Self::explain(is_valid, &contradictions, &proof_chain);
        let warnings = Self::warnings(claim, &contradictions);

        debug!(claim, is_valid, confidence, "claim validated");

        ValidationResult {
            claim: claim.to_string(),
            is_valid,
            confidence,
            contradictions,
            proof_chain,
            explanation,
            warnings,
        }
    }

    /// Validate every claim-sized sentence in a text
    ///
    /// Splits on sentence punctuation and skips fragments too short to be
    /// meaningful claims.
    pub fn validate_text(&self, text: &str) -> Vec<ValidationResult> {
        text.split(['.', '!', '?'])
            .map(str::trim)
            .filter(|sentence| sentence.len() > self.config.min_claim_len)
            .map(|sentence| self.validate(sentence))
            .collect()
    }

    /// Contradiction-only fast path: true if the claim appears valid
    pub fn quick_check(&self, claim: &str) -> bool {
        let (is_valid, _) = self.detector.validate_claim(claim);
        is_valid
    }

    fn overall_confidence(
        &self,
        contradictions: &[Contradiction],
        proof_chain: &ProofChain,
    ) -> f64 {
        if let Some(strongest) = contradictions
            .iter()
            .map(|c| c.confidence)
            .reduce(f64::max)
        {
            return 1.0 - strongest;
        }

        if proof_chain.grounded {
            proof_chain.confidence
        } else if !proof_chain.steps.is_empty() {
            // Supporting axioms without grounding carry less weight
            proof_chain.confidence * self.config.ungrounded_scale
        } else {
            0.3
        }
    }

    fn explain(
        is_valid: bool,
        contradictions: &[Contradiction],
        proof_chain: &ProofChain,
    ) -> String {
        if !is_valid && !contradictions.is_empty() {
            let top = &contradictions[0];
            return format!(
                "INVALID: The claim contradicts formal semantics. The axiom '{}' \
                 states: {}. Contradiction type: {}.",
                top.axiom_id, top.axiom_content, top.kind
            );
        }

        if is_valid && proof_chain.grounded {
            return format!(
                "VALID: The claim is grounded in formal semantics. {}",
                proof_chain.explanation
            );
        }

        if is_valid && !proof_chain.steps.is_empty() {
            return format!(
                "LIKELY VALID: Found supporting axioms but claim is not directly \
                 grounded. {}",
                proof_chain.explanation
            );
        }

        if is_valid {
            return "UNCERTAIN: No contradictions found, but no supporting axioms \
                    were found either. Exercise caution."
                .to_string();
        }

        "UNCERTAIN: Could not definitively validate or contradict this claim \
         against the axiom knowledge base."
            .to_string()
    }

    fn warnings(claim: &str, contradictions: &[Contradiction]) -> Vec<String> {
        let mut warnings = Vec::new();

        if contradictions
            .iter()
            .any(|c| c.axiom_content.to_lowercase().contains("undefined"))
        {
            warnings.push(
                "WARNING: This claim may involve undefined behavior in C/C++.".to_string(),
            );
        }

        if contradictions
            .iter()
            .any(|c| c.axiom_content.to_lowercase().contains("implementation"))
        {
            warnings.push(
                "WARNING: This may depend on implementation-defined behavior.".to_string(),
            );
        }

        let claim_lower = claim.to_lowercase();
        if SECURITY_KEYWORDS.iter().any(|kw| claim_lower.contains(kw)) {
            warnings.push(
                "WARNING: This claim involves security-sensitive operations.".to_string(),
            );
        }

        warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_domain::AxiomRecord;
    use veracity_kb::MemoryKb;

    fn validator(kb: &MemoryKb) -> AxiomValidator<&MemoryKb, &MemoryKb> {
        AxiomValidator::new(kb, kb, ReasoningConfig::default())
    }

    fn foundation_axiom(id: &str, content: &str) -> AxiomRecord {
        let mut axiom = AxiomRecord::new(id, content);
        axiom.layer = "c11_core".to_string();
        axiom.module = "C-SEMANTICS".to_string();
        axiom
    }

    #[test]
    fn test_invalid_claim_confidence_complements_contradiction() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom("ovf", "Signed integer overflow"));

        let result = validator(&kb).validate("Signed integer overflow wraps around");

        assert!(!result.is_valid);
        assert!(result.explanation.starts_with("INVALID"));
        let strongest = result
            .contradictions
            .iter()
            .map(|c| c.confidence)
            .fold(0.0, f64::max);
        assert!((result.confidence - (1.0 - strongest)).abs() < 1e-9);
    }

    #[test]
    fn test_valid_grounded_claim() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom(
            "ovf",
            "Signed integer overflow is undefined behavior",
        ));

        let result = validator(&kb).validate("Signed integer overflow is undefined behavior");

        assert!(result.is_valid);
        assert!(result.proof_chain.grounded);
        assert_eq!(result.confidence, result.proof_chain.confidence);
        assert!(result.explanation.starts_with("VALID"));
    }

    #[test]
    fn test_supported_but_ungrounded_claim_scales_confidence() {
        let mut kb = MemoryKb::new();
        let mut axiom = AxiomRecord::new("lib", "vector elements are stored contiguously");
        axiom.layer = "library".to_string();
        axiom.confidence = 0.9;
        kb.add_axiom(axiom);

        let result = validator(&kb).validate("vector elements are stored contiguously");

        assert!(result.is_valid);
        assert!(!result.proof_chain.grounded);
        assert!((result.confidence - 0.9 * 0.8).abs() < 1e-9);
        assert!(result.explanation.starts_with("LIKELY VALID"));
    }

    #[test]
    fn test_no_evidence_is_uncertain() {
        let kb = MemoryKb::new();

        let result = validator(&kb).validate("Memory allocation returns a pointer");

        assert!(result.is_valid);
        assert_eq!(result.confidence, 0.3);
        assert!(result.explanation.contains("UNCERTAIN"));
    }

    #[test]
    fn test_validity_invariant_against_threshold() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom(
            "null_ub",
            "Dereferencing a null pointer is undefined behavior",
        ));

        let result = validator(&kb).validate("Dereferencing a null pointer is safe");
        let has_strong = result.contradictions.iter().any(|c| c.confidence >= 0.8);
        assert_eq!(result.is_valid, !has_strong);
        assert!(!result.is_valid);
    }

    #[test]
    fn test_warnings_trigger_independently() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom(
            "null_ub",
            "Dereferencing a null pointer is undefined behavior",
        ));

        let result = validator(&kb).validate("Dereferencing a null pointer is safe");

        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("undefined behavior")));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("security-sensitive")));
    }

    #[test]
    fn test_implementation_defined_warning() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom(
            "shift",
            "Right shift of negative values is implementation-defined and invalid to rely on",
        ));

        let result = validator(&kb).validate("Right shift of negative values is valid everywhere");
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("implementation-defined")));
    }

    #[test]
    fn test_validate_text_splits_and_skips_fragments() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom("ovf", "Signed integer overflow"));

        let results = validator(&kb).validate_text(
            "Signed integer overflow wraps around. Yes! Division by zero returns zero.",
        );

        // "Yes" is below the fragment threshold
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].claim, "Signed integer overflow wraps around");
        assert_eq!(results[1].claim, "Division by zero returns zero");
    }

    #[test]
    fn test_quick_check_matches_validate_verdict() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom("ovf", "Signed integer overflow"));

        // Built from pre-assembled components, like an embedding caller would
        let config = ReasoningConfig::default();
        let v = AxiomValidator::from_parts(
            crate::ContradictionDetector::new(&kb, config.clone()),
            crate::ProofChainGenerator::new(&kb, &kb, config.clone()),
            config,
        );
        assert!(!v.quick_check("Signed integer overflow wraps around"));
        assert!(v.quick_check("Signed integer overflow is undefined behavior"));
    }

    #[test]
    fn test_collaborator_failure_floor() {
        let mut kb = MemoryKb::new();
        kb.add_axiom(foundation_axiom("ovf", "Signed integer overflow"));
        kb.take_search_offline();
        kb.take_graph_offline();

        let result = validator(&kb).validate("Signed integer overflow wraps around");

        // Worst observable outcome: uncertain, never a failure
        assert!(result.is_valid);
        assert_eq!(result.confidence, 0.3);
        assert!(result.explanation.contains("UNCERTAIN"));
    }

    #[test]
    fn test_empty_claim_resolves_uncertain() {
        let kb = MemoryKb::new();
        let result = validator(&kb).validate("");
        assert!(result.is_valid);
        assert_eq!(result.confidence, 0.3);
    }
}
