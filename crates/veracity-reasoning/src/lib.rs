//! Veracity Reasoning Layer
//!
//! The claim-validation engine: given a free-text claim about program
//! semantics and a knowledge base of formal axioms, decides whether the
//! claim contradicts, is supported by, or merely relates to known
//! semantics, with a confidence score and an evidence chain.
//!
//! # Components
//!
//! - [`EntailmentClassifier`]: classifies one (claim, axiom) pair
//! - [`ContradictionDetector`]: finds contradicting axioms via search
//! - [`ProofChainGenerator`]: grounds a claim in foundation-layer axioms
//! - [`AxiomValidator`]: combines detection and grounding into one verdict
//!
//! All components are synchronous and stateless; the search and graph
//! backends are injected through the traits in `veracity-domain`, so any
//! storage adapter (or the in-memory `veracity-kb`) can serve them.
//! Collaborator failures degrade to low-confidence UNCERTAIN verdicts
//! instead of propagating.
//!
//! # Examples
//!
//! ```
//! use veracity_kb::MemoryKb;
//! use veracity_domain::AxiomRecord;
//! use veracity_reasoning::{AxiomValidator, ReasoningConfig};
//!
//! let mut kb = MemoryKb::new();
//! let mut axiom = AxiomRecord::new("ovf", "Signed integer overflow");
//! axiom.layer = "c11_core".to_string();
//! kb.add_axiom(axiom);
//!
//! let validator = AxiomValidator::new(&kb, &kb, ReasoningConfig::default());
//! let result = validator.validate("Signed integer overflow wraps around");
//!
//! assert!(!result.is_valid);
//! assert!(result.explanation.starts_with("INVALID"));
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod contradiction;
pub mod entailment;
pub mod error;
pub mod proof_chain;
pub mod validator;

pub use config::ReasoningConfig;
pub use contradiction::ContradictionDetector;
pub use entailment::EntailmentClassifier;
pub use error::ReasoningError;
pub use proof_chain::ProofChainGenerator;
pub use validator::AxiomValidator;
