//! Entailment classification between claims and axioms
//!
//! Determines whether an axiom SUPPORTS, CONTRADICTS, or is merely
//! RELATED_TO a claim. The key insight is that both sides have polarity:
//! positive text asserts defined/safe behavior ("wraps around", "is safe"),
//! negative text asserts undefined/error behavior ("undefined", "must not").
//! Conflicting polarity on a shared topic is a contradiction.

use once_cell::sync::Lazy;
use regex::Regex;
use veracity_analyzers::{
    extract_action_category, extract_numeric_assertions, extract_polarity, extract_topics,
    implicit_hazard, numeric_conflict,
};
use veracity_domain::{AxiomRecord, EntailmentResult, Polarity, Relation};

/// Module-name markers for axioms extracted from error contexts
const ERROR_MODULE_MARKERS: &[&str] = &["ERROR", "VIOLATION", "UB", "UNDEFINED"];

/// Opposition pairs: a claim pattern and an axiom pattern that cannot both
/// hold, with the canned explanation for the pair
static SEMANTIC_OPPOSITIONS: Lazy<Vec<(Regex, Regex, &'static str)>> = Lazy::new(|| {
    let table: &[(&str, &str, &str)] = &[
        // Pass count: single vs multi
        (r"\bsingle.?pass\b", r"\bmulti.?pass\b", "single-pass contradicts multi-pass"),
        (r"\bmulti.?pass\b", r"\bsingle.?pass\b", "multi-pass contradicts single-pass"),
        // Direction: reverse vs increasing/forward
        (r"\breverse\s+order\b", r"\bincreasing\b", "reverse order contradicts increasing order"),
        (r"\breverse\s+order\b", r"\bforward\b", "reverse order contradicts forward order"),
        (r"\bincreasing\b", r"\breverse\b", "increasing contradicts reverse"),
        // Pairing: without vs must be paired
        (
            r"\bwithout\s+matching\b",
            r"\bmust\s+be\s+paired\b",
            "without matching contradicts must be paired",
        ),
        (
            r"\bwithout\s+matching\b",
            r"\brequires.*matching\b",
            "without matching contradicts requires matching",
        ),
        (
            r"\bcan\s+be\s+used\s+without\b",
            r"\bmust\s+be\s+paired\b",
            "can be used without contradicts must be paired",
        ),
        // Valid/invalid
        (r"\binvalid\b", r"\bvalid\b", "invalid contradicts valid"),
        (r"\bvalid\b", r"\binvalid\b", "valid contradicts invalid"),
        // Safety against undefined behavior
        (r"\bis\s+safe\b", r"\binvalid pointer\b", "is safe contradicts invalid pointer error"),
        (r"\bis\s+safe\b", r"\bundefined\s+behavior\b", "is safe contradicts undefined behavior"),
        (
            r"\bcompletely\s+safe\b",
            r"\bundefined\s+behavior\b",
            "completely safe contradicts UB",
        ),
    ];

    table
        .iter()
        .map(|(claim_pattern, axiom_pattern, explanation)| {
            (
                Regex::new(&format!("(?i){}", claim_pattern))
                    .expect("opposition pattern must compile"),
                Regex::new(&format!("(?i){}", axiom_pattern))
                    .expect("opposition pattern must compile"),
                *explanation,
            )
        })
        .collect()
});

/// Classifies the relationship between a claim and an axiom
///
/// The decision cascade runs in a fixed order - override rules, topic gate,
/// action conflict, numeric conflict, opposition pairs, polarity
/// cross-product - and the first matching rule wins. Reordering changes
/// outcomes on ambiguous inputs, so the order is part of the contract.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntailmentClassifier;

impl EntailmentClassifier {
    /// Create a new classifier
    pub fn new() -> Self {
        Self
    }

    /// Determine whether `axiom` supports, contradicts, or merely relates
    /// to `claim`
    pub fn classify(&self, claim: &str, axiom: &AxiomRecord) -> EntailmentResult {
        let claim_polarity = extract_polarity(claim);
        let mut axiom_polarity = extract_polarity(&axiom.content);

        // Axioms from error contexts are implicitly negative
        if Self::is_error_axiom(axiom) {
            axiom_polarity = Polarity::Negative;
        }

        // Terse axioms naming a hazard are negative even without an explicit
        // "undefined" keyword
        if axiom_polarity == Polarity::Neutral && implicit_hazard(&axiom.content) {
            axiom_polarity = Polarity::Negative;
        }

        // Numeric conflicts are strong signals that need no topic overlap,
        // so they are computed up front to let them pass the gate below
        let claim_numerics = extract_numeric_assertions(claim);
        let mut axiom_numerics = extract_numeric_assertions(&axiom.content);
        axiom_numerics.extend(extract_numeric_assertions(&axiom.formal_spec));
        let numeric_clash = numeric_conflict(&claim_numerics, &axiom_numerics);

        // Topic gate: overlap is a precondition for any stronger verdict
        let claim_topics = extract_topics(claim);
        let axiom_topics = extract_topics(&axiom.content);
        let topics_overlap = claim_topics.intersection(&axiom_topics).next().is_some();

        if !topics_overlap && numeric_clash.is_none() {
            return EntailmentResult::new(
                Relation::RelatedTo,
                0.3,
                "No topic overlap between claim and axiom",
            );
        }

        // Incompatible action categories contradict even when both sides
        // read as positive ("moves" vs "is a cast")
        let claim_action = extract_action_category(claim);
        let axiom_action = extract_action_category(&axiom.content);
        if let (Some(claim_action), Some(axiom_action)) = (claim_action, axiom_action) {
            if claim_action != axiom_action {
                return EntailmentResult::new(
                    Relation::Contradicts,
                    0.85,
                    format!(
                        "Claim describes {} action but axiom describes {} action - \
                         these are semantically incompatible",
                        claim_action, axiom_action
                    ),
                );
            }
        }

        if let Some(detail) = numeric_clash {
            return EntailmentResult::new(
                Relation::Contradicts,
                0.9,
                format!("Numeric contradiction: {}", detail),
            );
        }

        if let Some(opposition) = Self::semantic_opposition(claim, &axiom.content) {
            return EntailmentResult::new(
                Relation::Contradicts,
                0.88,
                format!("Semantic opposition: {}", opposition),
            );
        }

        match (claim_polarity, axiom_polarity) {
            (Polarity::Positive, Polarity::Negative) => EntailmentResult::new(
                Relation::Contradicts,
                0.9,
                "Claim asserts positive behavior, but axiom indicates an error/UB condition",
            ),
            (Polarity::Negative, Polarity::Negative) => EntailmentResult::new(
                Relation::Supports,
                0.8,
                "Both claim and axiom indicate undefined/error behavior",
            ),
            (Polarity::Positive, Polarity::Positive) => EntailmentResult::new(
                Relation::Supports,
                0.7,
                "Both claim and axiom assert positive behavior",
            ),
            (Polarity::Negative, Polarity::Positive) => EntailmentResult::new(
                Relation::Contradicts,
                0.7,
                "Claim asserts error/UB but axiom indicates defined behavior",
            ),
            _ => EntailmentResult::new(
                Relation::RelatedTo,
                0.5,
                "Topic overlap but no clear polarity conflict",
            ),
        }
    }

    fn is_error_axiom(axiom: &AxiomRecord) -> bool {
        if axiom.is_error_context() {
            return true;
        }
        let module = axiom.module.to_uppercase();
        ERROR_MODULE_MARKERS.iter().any(|m| module.contains(m))
    }

    fn semantic_opposition(claim: &str, axiom_content: &str) -> Option<&'static str> {
        SEMANTIC_OPPOSITIONS
            .iter()
            .find(|(claim_pattern, axiom_pattern, _)| {
                claim_pattern.is_match(claim) && axiom_pattern.is_match(axiom_content)
            })
            .map(|(_, _, explanation)| *explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use veracity_domain::ViolationRef;

    fn classifier() -> EntailmentClassifier {
        EntailmentClassifier::new()
    }

    fn axiom(content: &str) -> AxiomRecord {
        AxiomRecord::new("test_axiom", content)
    }

    #[test]
    fn test_wraps_around_contradicts_terse_overflow_axiom() {
        let result = classifier().classify(
            "Signed integer overflow wraps around",
            &axiom("Signed integer overflow"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.85);
    }

    #[test]
    fn test_twos_complement_contradicts_ub_axiom() {
        let result = classifier().classify(
            "Signed integer overflow uses two's complement",
            &axiom("Signed integer overflow is undefined behavior"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
    }

    #[test]
    fn test_ub_claim_supported_by_terse_axiom() {
        let result = classifier().classify(
            "Signed integer overflow is undefined behavior",
            &axiom("Signed integer overflow"),
        );
        assert_eq!(result.relation, Relation::Supports);
        assert!((result.confidence - 0.8).abs() < 1e-9);
    }

    #[test]
    fn test_ub_claim_supported_by_must_not_axiom() {
        let result = classifier().classify(
            "Dereferencing null is undefined behavior",
            &axiom("pointer must not be null"),
        );
        assert_eq!(result.relation, Relation::Supports);
    }

    #[test]
    fn test_safe_claim_contradicts_precondition_axiom() {
        // "Operation requires:" phrasing is a hazard guard; the negative
        // indicator wins over the "is valid" inside it
        let result = classifier().classify(
            "Dereferencing a null pointer is safe",
            &axiom("Operation requires: must not be a null pointer"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.8);
    }

    #[test]
    fn test_no_topic_overlap_is_related_to() {
        let result = classifier().classify(
            "Memory allocation returns a pointer",
            &axiom("Array bounds checking"),
        );
        assert_eq!(result.relation, Relation::RelatedTo);
        assert!((result.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_neutral_polarity_with_overlap_is_related_to() {
        let result = classifier().classify(
            "The function returns an integer",
            &axiom("Integer conversion rules"),
        );
        // "returns" makes the claim positive but the axiom stays neutral
        assert_eq!(result.relation, Relation::RelatedTo);
        assert!((result.confidence - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_violated_by_forces_negative_axiom_polarity() {
        let mut record = axiom("Division by zero");
        record.violated_by.push(ViolationRef {
            code: "E0001".to_string(),
            error_type: "UNDEF".to_string(),
            message: String::new(),
        });

        let result = classifier().classify("Division by zero returns zero", &record);
        assert_eq!(result.relation, Relation::Contradicts);
    }

    #[test]
    fn test_error_module_forces_negative_axiom_polarity() {
        let mut record = axiom("Buffer access");
        record.module = "ERROR-MEMORY".to_string();

        let result = classifier().classify("Buffer overflow is safe", &record);
        assert_eq!(result.relation, Relation::Contradicts);
    }

    #[test]
    fn test_action_category_conflict_move_vs_cast() {
        let result = classifier().classify(
            "std::move moves object to new location",
            &axiom("std::move is a cast (static_cast<remove_reference_t<T>&&>(t))"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.8);
        assert!(
            result.explanation.contains("transfer") || result.explanation.contains("syntactic")
        );
    }

    #[test]
    fn test_action_category_conflict_copy_vs_cast() {
        let result = classifier().classify(
            "std::move performs a deep copy of the object",
            &axiom("std::move is a cast to rvalue reference"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.8);
    }

    #[test]
    fn test_same_action_category_is_not_a_conflict() {
        let result = classifier().classify(
            "std::forward is a cast operation",
            &axiom("std::forward is static_cast<T&&>(arg)"),
        );
        assert!(result.relation != Relation::Contradicts || result.confidence < 0.8);
    }

    #[test]
    fn test_numeric_conflict_bypasses_topic_gate() {
        // Neither text triggers a shared topic; the size() conflict must
        // still be detected
        let result = classifier().classify(
            "span has size() == 1",
            &axiom("postcond(span()): size() == 0 && data() == nullptr"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.85);
        assert!(result.explanation.contains("size()"));
    }

    #[test]
    fn test_numeric_conflict_reads_formal_spec() {
        let mut record = axiom("Default-constructed span is empty");
        record.formal_spec = "size() == 0".to_string();

        let result = classifier().classify("span has size() == 1", &record);
        assert_eq!(result.relation, Relation::Contradicts);
    }

    #[test]
    fn test_lemmatized_gerund_reaches_polarity_conflict() {
        let result = classifier().classify(
            "Dereferencing a null pointer is safe",
            &axiom("null pointer dereference is undefined"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
    }

    #[test]
    fn test_double_delete_claim_contradicts_state_descriptor_axiom() {
        let result = classifier().classify(
            "Double delete is safe",
            &axiom("Called free on memory that was already freed"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!(result.confidence >= 0.8);
    }

    #[test]
    fn test_semantic_opposition_single_pass_vs_multi_pass() {
        let result = classifier().classify(
            "InputIterator guarantees single-pass traversal",
            &axiom("ForwardIterator supports multi-pass traversal"),
        );
        assert_eq!(result.relation, Relation::Contradicts);
        assert!((result.confidence - 0.88).abs() < 1e-9);
    }

    #[test]
    fn test_empty_claim_is_related_to() {
        let result = classifier().classify("", &axiom("Signed integer overflow"));
        assert_eq!(result.relation, Relation::RelatedTo);
        assert!((result.confidence - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_always_in_unit_interval() {
        let cases = [
            ("Signed integer overflow wraps around", "Signed integer overflow"),
            ("Dereferencing a null pointer is safe", "pointer must not be null"),
            ("span has size() == 1", "size() == 0"),
            ("", ""),
            ("The function returns an integer", "Integer conversion rules"),
        ];
        for (claim, content) in cases {
            let result = classifier().classify(claim, &axiom(content));
            assert!(
                (0.0..=1.0).contains(&result.confidence),
                "confidence out of range for claim {:?}",
                claim
            );
        }
    }
}
