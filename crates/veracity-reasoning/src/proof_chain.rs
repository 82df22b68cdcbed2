//! Proof-chain generation - grounding claims in foundational axioms

use crate::{ReasoningConfig, ReasoningError};
use std::collections::HashSet;
use tracing::{debug, warn};
use veracity_domain::traits::{AxiomSearch, DependencyGraph};
use veracity_domain::{AxiomRecord, ProofChain, ProofStep, Relation};

/// Builds evidence chains from a claim down to foundation-layer axioms
///
/// Candidates come from the search backend; groundedness is established
/// either directly (the first step already sits on a foundation layer) or by
/// walking dependency edges until a foundation-layer axiom is reached. The
/// first reachable foundation axiom wins - the collaborator's breadth-first
/// ordering makes that choice deterministic.
pub struct ProofChainGenerator<S: AxiomSearch, G: DependencyGraph> {
    search: S,
    graph: G,
    config: ReasoningConfig,
}

impl<S: AxiomSearch, G: DependencyGraph> ProofChainGenerator<S, G> {
    /// Create a generator over the given backends
    pub fn new(search: S, graph: G, config: ReasoningConfig) -> Self {
        Self {
            search,
            graph,
            config,
        }
    }

    /// Generate a proof chain for a claim
    pub fn generate(&self, claim: &str) -> ProofChain {
        let mut chain = ProofChain::new(claim);

        let candidates = match self.search.search(claim, self.config.search_limit) {
            Ok(hits) => hits,
            Err(e) => {
                warn!(claim, error = %e, "search unavailable, returning ungrounded chain");
                Vec::new()
            }
        };

        if candidates.is_empty() {
            chain.explanation = "No relevant axioms found for this claim.".to_string();
            return chain;
        }

        for candidate in &candidates {
            if chain.depth() >= self.config.max_supporting_steps {
                break;
            }
            if self.matches(claim, candidate) {
                chain.push_step(ProofStep::from_axiom(candidate, Relation::Supports));
            }
        }

        // Nothing cleared the match bar; cite the top-ranked hit as related
        if chain.steps.is_empty() {
            chain.push_step(ProofStep::from_axiom(&candidates[0], Relation::RelatedTo));
        }

        self.ground(&mut chain);
        chain.explanation = self.explain(&chain);

        debug!(
            claim,
            depth = chain.depth(),
            grounded = chain.grounded,
            "proof chain generated"
        );
        chain
    }

    /// Find axioms that support a claim
    pub fn find_supporting_axioms(
        &self,
        claim: &str,
        limit: usize,
    ) -> Result<Vec<AxiomRecord>, ReasoningError> {
        self.search
            .search(claim, limit)
            .map_err(|e| ReasoningError::Search(e.to_string()))
    }

    /// Find axioms that might contradict a claim by searching negated
    /// variants of it
    pub fn find_contradicting_axioms(
        &self,
        claim: &str,
        limit: usize,
    ) -> Result<Vec<AxiomRecord>, ReasoningError> {
        let mut seen = HashSet::new();
        let mut contradicting = Vec::new();

        for term in Self::negate_claim(claim) {
            let results = self
                .search
                .search(&term, limit)
                .map_err(|e| ReasoningError::Search(e.to_string()))?;
            for record in results {
                if seen.insert(record.id.clone()) {
                    contradicting.push(record);
                }
            }
        }

        contradicting.truncate(limit);
        Ok(contradicting)
    }

    /// Whether a candidate is close enough to count as supporting evidence
    ///
    /// Prefers the vector-search similarity when the hit carries a distance;
    /// falls back to shared-keyword counting otherwise.
    fn matches(&self, claim: &str, candidate: &AxiomRecord) -> bool {
        if let Some(similarity) = candidate.similarity() {
            return similarity >= self.config.match_threshold;
        }

        let claim_lower = claim.to_lowercase();
        let content_lower = candidate.content.to_lowercase();
        let claim_words: HashSet<&str> = claim_lower.split_whitespace().collect();
        let content_words: HashSet<&str> = content_lower.split_whitespace().collect();

        claim_words.intersection(&content_words).count() >= 2
    }

    /// Establish groundedness for the chain's first step
    fn ground(&self, chain: &mut ProofChain) {
        let first = match chain.steps.first() {
            Some(step) => step.clone(),
            None => return,
        };

        if self.config.is_foundation(&first.layer) {
            chain.grounded = true;
            return;
        }

        let reachable = match self
            .graph
            .dependencies(&first.axiom_id, self.config.max_proof_depth)
        {
            Ok(reachable) => reachable,
            Err(e) => {
                warn!(
                    axiom_id = %first.axiom_id,
                    error = %e,
                    "graph unavailable, leaving chain ungrounded"
                );
                return;
            }
        };

        // First reachable foundation axiom wins, not the shortest path; the
        // breadth-first ordering keeps the choice reproducible
        if let Some(foundation) = reachable
            .iter()
            .find(|axiom| self.config.is_foundation(&axiom.layer))
        {
            chain.push_step(ProofStep::from_axiom(foundation, Relation::DependsOn));
            chain.grounded = true;
        }
    }

    fn explain(&self, chain: &ProofChain) -> String {
        let step = match chain.steps.first() {
            Some(step) => step,
            None => return "No proof chain generated.".to_string(),
        };

        if chain.grounded {
            format!(
                "This claim is grounded in formal semantics ({}). The axiom '{}' from \
                 module {} states: {}",
                step.layer, step.axiom_id, step.module, step.content
            )
        } else {
            format!(
                "This claim relates to the axiom '{}' (confidence: {}): {}",
                step.axiom_id, step.confidence, step.content
            )
        }
    }

    /// Generate negated variants of a claim for contradiction search
    fn negate_claim(claim: &str) -> Vec<String> {
        let claim_lower = claim.to_lowercase();
        let mut negations = Vec::new();

        if claim_lower.contains("is safe") {
            negations.push(claim_lower.replace("is safe", "is unsafe"));
            negations.push(claim_lower.replace("is safe", "undefined behavior"));
        }
        if claim_lower.contains("defined") && !claim_lower.contains("undefined") {
            negations.push(claim_lower.replace("defined", "undefined"));
        }
        if claim_lower.contains("valid") {
            negations.push(claim_lower.replace("valid", "invalid"));
        }
        if claim_lower.contains("can") {
            negations.push(claim_lower.replace("can", "cannot"));
        }
        if claim_lower.contains("will") {
            negations.push(claim_lower.replace("will", "will not"));
        }

        negations.push(format!("not {}", claim));
        negations.push(format!("undefined behavior {}", claim));

        negations
    }
}
