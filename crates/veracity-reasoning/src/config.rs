//! Reasoning configuration

use crate::ReasoningError;
use serde::{Deserialize, Serialize};

fn default_contradiction_threshold() -> f64 {
    0.8
}

fn default_match_threshold() -> f64 {
    0.4
}

fn default_search_limit() -> usize {
    10
}

fn default_term_search_limit() -> usize {
    5
}

fn default_max_supporting_steps() -> usize {
    3
}

fn default_max_proof_depth() -> usize {
    5
}

fn default_ungrounded_scale() -> f64 {
    0.8
}

fn default_min_claim_len() -> usize {
    10
}

fn default_foundation_layers() -> Vec<String> {
    [
        "c11_core",
        "c11_stdlib",
        "cpp_core",
        "cpp_stdlib",
        "cpp20_language",
        "cpp20_stdlib",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

/// Configuration for the reasoning components
///
/// Injected into each component's constructor; every field has a default so
/// a partial TOML document configures only what it names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReasoningConfig {
    /// Contradictions at or above this confidence invalidate a claim
    #[serde(default = "default_contradiction_threshold")]
    pub contradiction_threshold: f64,

    /// Minimum `1 / (1 + distance)` similarity for a search hit to count as
    /// a supporting match
    #[serde(default = "default_match_threshold")]
    pub match_threshold: f64,

    /// Result limit for the primary claim searches
    #[serde(default = "default_search_limit")]
    pub search_limit: usize,

    /// Result limit for each derived contradiction-term search
    #[serde(default = "default_term_search_limit")]
    pub term_search_limit: usize,

    /// Maximum supporting steps added to a proof chain
    #[serde(default = "default_max_supporting_steps")]
    pub max_supporting_steps: usize,

    /// Maximum dependency-edge distance for the grounding traversal
    #[serde(default = "default_max_proof_depth")]
    pub max_proof_depth: usize,

    /// Confidence scale applied to supported-but-ungrounded verdicts
    #[serde(default = "default_ungrounded_scale")]
    pub ungrounded_scale: f64,

    /// Sentence fragments at or below this length are not validated
    #[serde(default = "default_min_claim_len")]
    pub min_claim_len: usize,

    /// Layer tags treated as ground truth
    #[serde(default = "default_foundation_layers")]
    pub foundation_layers: Vec<String>,
}

impl Default for ReasoningConfig {
    fn default() -> Self {
        Self {
            contradiction_threshold: default_contradiction_threshold(),
            match_threshold: default_match_threshold(),
            search_limit: default_search_limit(),
            term_search_limit: default_term_search_limit(),
            max_supporting_steps: default_max_supporting_steps(),
            max_proof_depth: default_max_proof_depth(),
            ungrounded_scale: default_ungrounded_scale(),
            min_claim_len: default_min_claim_len(),
            foundation_layers: default_foundation_layers(),
        }
    }
}

impl ReasoningConfig {
    /// A strict configuration: lower bar for invalidating contradictions,
    /// higher bar for supporting matches
    pub fn strict() -> Self {
        Self {
            contradiction_threshold: 0.7,
            match_threshold: 0.5,
            ..Self::default()
        }
    }

    /// A permissive configuration: only near-certain contradictions
    /// invalidate, weak matches still count as support
    pub fn permissive() -> Self {
        Self {
            contradiction_threshold: 0.9,
            match_threshold: 0.3,
            ..Self::default()
        }
    }

    /// Parse a configuration from a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self, ReasoningError> {
        toml::from_str(text).map_err(|e| ReasoningError::Config(e.to_string()))
    }

    /// Whether a layer tag is treated as ground truth
    pub fn is_foundation(&self, layer: &str) -> bool {
        self.foundation_layers.iter().any(|l| l == layer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ReasoningConfig::default();
        assert_eq!(config.contradiction_threshold, 0.8);
        assert_eq!(config.search_limit, 10);
        assert_eq!(config.max_proof_depth, 5);
        assert!(config.is_foundation("c11_core"));
        assert!(config.is_foundation("cpp20_stdlib"));
        assert!(!config.is_foundation("library"));
    }

    #[test]
    fn test_strict_and_permissive() {
        assert_eq!(ReasoningConfig::strict().contradiction_threshold, 0.7);
        assert_eq!(ReasoningConfig::permissive().contradiction_threshold, 0.9);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = ReasoningConfig::from_toml_str(
            r#"
            contradiction_threshold = 0.75
            foundation_layers = ["k_semantics"]
            "#,
        )
        .unwrap();

        assert_eq!(config.contradiction_threshold, 0.75);
        assert!(config.is_foundation("k_semantics"));
        assert!(!config.is_foundation("c11_core"));
        // Unnamed fields keep their defaults
        assert_eq!(config.search_limit, 10);
    }

    #[test]
    fn test_invalid_toml_is_a_config_error() {
        let err = ReasoningConfig::from_toml_str("contradiction_threshold = ").unwrap_err();
        assert!(matches!(err, crate::ReasoningError::Config(_)));
    }
}
