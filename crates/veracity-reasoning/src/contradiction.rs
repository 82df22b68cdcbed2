//! Contradiction detection between claims and the knowledge base

use crate::{EntailmentClassifier, ReasoningConfig};
use std::collections::HashSet;
use tracing::{debug, warn};
use veracity_domain::traits::AxiomSearch;
use veracity_domain::{AxiomRecord, Contradiction, ContradictionKind, Relation};

/// Legacy phrase table: a hit contradicts when the claim contains the first
/// phrase and the axiom content contains the second
const CONTRADICTION_PATTERNS: &[(&str, &str, ContradictionKind)] = &[
    ("is safe", "undefined behavior", ContradictionKind::Direct),
    ("is defined", "undefined", ContradictionKind::Direct),
    ("is valid", "invalid", ContradictionKind::Direct),
    ("can overflow", "must not overflow", ContradictionKind::Direct),
    ("no check", "must check", ContradictionKind::Implied),
    ("always", "not always", ContradictionKind::Semantic),
    ("never", "may", ContradictionKind::Semantic),
    ("guaranteed", "undefined", ContradictionKind::Direct),
];

/// Known dangerous claims that frequently contradict C/C++ semantics
const DANGEROUS_CLAIMS: &[&str] = &[
    "signed integer overflow is defined",
    "null pointer dereference is safe",
    "buffer overflow is harmless",
    "uninitialized variables have default values",
    "casting pointer to integer is always safe",
    "division by zero returns zero",
    "array bounds are not checked",
];

/// Claim language that asserts safety
const SAFETY_ASSERTIONS: &[&str] = &["is safe", "is defined", "is valid", "is allowed", "is harmless"];

/// Axiom language that warns of danger
const DANGER_WARNINGS: &[&str] = &["undefined", "unsafe", "invalid", "not allowed", "dangerous"];

/// Detects contradictions between a claim and the axiom knowledge base
///
/// Three passes feed one merged result: a dangerous-claim pass over derived
/// search terms, a light safety-vs-danger heuristic over the raw-claim hits,
/// and an entailment pass running the full classifier over those same hits.
/// Search failures degrade to "no contradictions found" rather than failing
/// the caller.
pub struct ContradictionDetector<S: AxiomSearch> {
    search: S,
    classifier: EntailmentClassifier,
    config: ReasoningConfig,
}

impl<S: AxiomSearch> ContradictionDetector<S> {
    /// Create a detector over the given search backend
    pub fn new(search: S, config: ReasoningConfig) -> Self {
        Self {
            search,
            classifier: EntailmentClassifier::new(),
            config,
        }
    }

    /// Detect contradictions for a claim, highest confidence first
    pub fn detect(&self, claim: &str) -> Vec<Contradiction> {
        let mut contradictions = Vec::new();

        if self.is_dangerous_claim(claim) {
            for axiom in self.search_for_contradictions(claim) {
                if let Some(contradiction) = self.analyze_hit(claim, &axiom) {
                    contradictions.push(contradiction);
                }
            }
        }

        contradictions.extend(self.raw_claim_passes(claim));

        let merged = Self::dedup_by_axiom(contradictions);
        debug!(claim, count = merged.len(), "contradiction detection finished");
        merged
    }

    /// Validate a claim: valid iff no contradiction reaches the configured
    /// threshold
    pub fn validate_claim(&self, claim: &str) -> (bool, Vec<Contradiction>) {
        let contradictions = self.detect(claim);
        let is_valid = !contradictions
            .iter()
            .any(|c| c.confidence >= self.config.contradiction_threshold);
        (is_valid, contradictions)
    }

    /// Search, degrading to an empty result set when the backend is down
    fn degraded_search(&self, query: &str, limit: usize) -> Vec<AxiomRecord> {
        match self.search.search(query, limit) {
            Ok(hits) => hits,
            Err(e) => {
                warn!(query, error = %e, "search unavailable, degrading to empty result");
                Vec::new()
            }
        }
    }

    fn is_dangerous_claim(&self, claim: &str) -> bool {
        let claim_lower = claim.to_lowercase();
        DANGEROUS_CLAIMS
            .iter()
            .any(|dangerous| Self::fuzzy_match(&claim_lower, dangerous))
    }

    /// Fuzzy match: at least 60% of the pattern's words appear in the text
    fn fuzzy_match(text: &str, pattern: &str) -> bool {
        let pattern_words: HashSet<&str> = pattern.split_whitespace().collect();
        let text_words: HashSet<&str> = text.split_whitespace().collect();

        let common = pattern_words.intersection(&text_words).count();
        common as f64 >= pattern_words.len() as f64 * 0.6
    }

    fn search_for_contradictions(&self, claim: &str) -> Vec<AxiomRecord> {
        let mut results = Vec::new();
        for term in self.contradiction_terms(claim) {
            results.extend(self.degraded_search(&term, self.config.term_search_limit));
        }
        results
    }

    /// The claim itself plus fixed negation phrases for each hazard topic it
    /// mentions
    fn contradiction_terms(&self, claim: &str) -> Vec<String> {
        let claim_lower = claim.to_lowercase();
        let mut terms = vec![claim_lower.clone()];

        if claim_lower.contains("overflow") {
            terms.push("overflow undefined behavior".to_string());
        }
        if claim_lower.contains("pointer") {
            terms.push("null pointer undefined".to_string());
        }
        if claim_lower.contains("division") || claim_lower.contains("divide") {
            terms.push("division by zero undefined".to_string());
        }
        if claim_lower.contains("array") || claim_lower.contains("buffer") {
            terms.push("array bounds undefined".to_string());
        }
        if claim_lower.contains("uninitialized") {
            terms.push("uninitialized undefined behavior".to_string());
        }

        terms
    }

    /// Apply the legacy phrase table to one search hit
    fn analyze_hit(&self, claim: &str, axiom: &AxiomRecord) -> Option<Contradiction> {
        let claim_lower = claim.to_lowercase();
        let content_lower = axiom.content.to_lowercase();

        for (claim_phrase, axiom_phrase, kind) in CONTRADICTION_PATTERNS {
            if claim_lower.contains(claim_phrase) && content_lower.contains(axiom_phrase) {
                return Some(Contradiction {
                    claim: claim.to_string(),
                    axiom_id: axiom.id.clone(),
                    axiom_content: axiom.content.clone(),
                    formal_spec: axiom.formal_spec.clone(),
                    kind: *kind,
                    confidence: 0.9,
                    explanation: format!(
                        "The claim asserts '{}', but the axiom '{}' states that this \
                         involves '{}'. Formal specification: {}",
                        claim_phrase, axiom.id, axiom_phrase, axiom.formal_spec
                    ),
                });
            }
        }

        None
    }

    /// Entailment and safety-heuristic passes over the raw-claim search hits
    fn raw_claim_passes(&self, claim: &str) -> Vec<Contradiction> {
        let mut contradictions = Vec::new();
        let claim_lower = claim.to_lowercase();

        for axiom in self.degraded_search(claim, self.config.search_limit) {
            let entailment = self.classifier.classify(claim, &axiom);
            if entailment.relation == Relation::Contradicts {
                contradictions.push(Contradiction {
                    claim: claim.to_string(),
                    axiom_id: axiom.id.clone(),
                    axiom_content: axiom.content.clone(),
                    formal_spec: axiom.formal_spec.clone(),
                    kind: ContradictionKind::Entailment,
                    confidence: entailment.confidence,
                    explanation: entailment.explanation,
                });
            }

            if Self::semantically_contradicts(&claim_lower, &axiom) {
                contradictions.push(Contradiction {
                    claim: claim.to_string(),
                    axiom_id: axiom.id.clone(),
                    axiom_content: axiom.content.clone(),
                    formal_spec: axiom.formal_spec.clone(),
                    kind: ContradictionKind::Semantic,
                    confidence: 0.7,
                    explanation: format!("The axiom states: {}", axiom.content),
                });
            }
        }

        contradictions
    }

    /// Safety-asserting claim against danger language in the axiom
    ///
    /// A claim that itself asserts UB and an axiom confirming it is support,
    /// not contradiction, so only the safe-vs-dangerous direction fires.
    fn semantically_contradicts(claim_lower: &str, axiom: &AxiomRecord) -> bool {
        let content_lower = axiom.content.to_lowercase();

        let claim_asserts_safety = SAFETY_ASSERTIONS.iter().any(|p| claim_lower.contains(p));
        let axiom_warns_danger = DANGER_WARNINGS.iter().any(|w| content_lower.contains(w));
        if claim_asserts_safety && axiom_warns_danger {
            return true;
        }

        if claim_lower.contains("never")
            && (content_lower.contains("may") || content_lower.contains("can"))
        {
            return true;
        }

        if claim_lower.contains("always") && content_lower.contains("not always") {
            return true;
        }

        false
    }

    /// Keep the highest-confidence contradiction per axiom, sorted by
    /// confidence descending with axiom id breaking ties
    fn dedup_by_axiom(mut contradictions: Vec<Contradiction>) -> Vec<Contradiction> {
        contradictions.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then_with(|| a.axiom_id.cmp(&b.axiom_id))
        });

        let mut seen = HashSet::new();
        contradictions.retain(|c| seen.insert(c.axiom_id.clone()));
        contradictions
    }
}
