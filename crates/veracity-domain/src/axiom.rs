//! Axiom records as supplied by the knowledge-base collaborators

use serde::{Deserialize, Serialize};

fn default_confidence() -> f64 {
    1.0
}

/// Reference to an error raised when an axiom is violated
///
/// Axioms extracted from error catalogs carry these references; a non-empty
/// `violated_by` list marks the axiom as coming from an error context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViolationRef {
    /// Catalog code, e.g. "CEMX1"
    #[serde(default)]
    pub code: String,

    /// Error class, e.g. "UNDEF" or "CV"
    #[serde(default)]
    pub error_type: String,

    /// Human-readable violation message
    #[serde(default)]
    pub message: String,
}

/// A formal-semantics axiom retrieved from the knowledge base
///
/// Records are read-only to the reasoning core. Every optional field carries
/// a serde default so a partially-populated search hit deserializes to a
/// neutral record instead of aborting the whole result set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxiomRecord {
    /// Stable identifier assigned by the knowledge base
    pub id: String,

    /// Human-readable statement of the axiom
    #[serde(default)]
    pub content: String,

    /// Formal specification text (e.g. a requires clause)
    #[serde(default)]
    pub formal_spec: String,

    /// Provenance layer tag (e.g. "c11_core")
    #[serde(default)]
    pub layer: String,

    /// Semantics module the axiom was extracted from
    #[serde(default)]
    pub module: String,

    /// Extraction confidence in [0, 1]
    #[serde(default = "default_confidence")]
    pub confidence: f64,

    /// Errors raised when this axiom is violated; non-empty marks an
    /// error-context axiom
    #[serde(default)]
    pub violated_by: Vec<ViolationRef>,

    /// Vector-search distance, when the record came from a similarity query
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity_distance: Option<f64>,
}

impl AxiomRecord {
    /// Create a record with the given id and content, all other fields
    /// defaulted
    pub fn new(id: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            content: content.into(),
            formal_spec: String::new(),
            layer: String::new(),
            module: String::new(),
            confidence: 1.0,
            violated_by: Vec::new(),
            similarity_distance: None,
        }
    }

    /// Whether this axiom comes from an error context
    pub fn is_error_context(&self) -> bool {
        !self.violated_by.is_empty()
    }

    /// Similarity score derived from the search distance, `1 / (1 + d)`
    ///
    /// Returns `None` when the record did not come from a similarity query.
    pub fn similarity(&self) -> Option<f64> {
        self.similarity_distance.map(|d| 1.0 / (1.0 + d))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_from_distance() {
        let mut axiom = AxiomRecord::new("a1", "Signed integer overflow");
        assert_eq!(axiom.similarity(), None);

        axiom.similarity_distance = Some(0.0);
        assert_eq!(axiom.similarity(), Some(1.0));

        axiom.similarity_distance = Some(1.0);
        assert_eq!(axiom.similarity(), Some(0.5));
    }

    #[test]
    fn test_error_context_from_violations() {
        let mut axiom = AxiomRecord::new("a1", "Division by zero");
        assert!(!axiom.is_error_context());

        axiom.violated_by.push(ViolationRef {
            code: "CEMX1".to_string(),
            error_type: "UNDEF".to_string(),
            message: "Division by zero".to_string(),
        });
        assert!(axiom.is_error_context());
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        // A hit carrying only id and content must not abort deserialization
        let axiom: AxiomRecord =
            serde_json::from_str(r#"{"id": "a1", "content": "Null pointer"}"#).unwrap();

        assert_eq!(axiom.id, "a1");
        assert_eq!(axiom.confidence, 1.0);
        assert!(axiom.layer.is_empty());
        assert!(axiom.violated_by.is_empty());
        assert_eq!(axiom.similarity_distance, None);
    }
}
