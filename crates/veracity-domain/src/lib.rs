//! Veracity Domain Layer
//!
//! This crate contains the data model for the claim-validation engine: the
//! axiom records consumed from the knowledge base, the result types produced
//! by the reasoning components, and the trait interfaces behind which the
//! search and graph collaborators live.
//!
//! ## Key Concepts
//!
//! - **AxiomRecord**: a formal-semantics statement with a confidence score
//!   and a provenance layer, supplied read-only by a search backend
//! - **Polarity**: whether text asserts defined/safe (positive) or
//!   undefined/erroneous (negative) behavior
//! - **Relation**: how an axiom relates to a claim (supports, contradicts,
//!   related-to, depends-on)
//! - **ProofChain**: an ordered evidence sequence with a groundedness flag
//!   and a combined confidence
//!
//! ## Architecture
//!
//! - Pure types and trait definitions only
//! - No reasoning logic; that lives in `veracity-reasoning`
//! - Backend implementations (search, graph) live in other crates and are
//!   injected through the traits defined here

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod action;
pub mod axiom;
pub mod contradiction;
pub mod entailment;
pub mod polarity;
pub mod proof;
pub mod relation;
pub mod topic;
pub mod traits;
pub mod validation;

// Re-exports for convenience
pub use action::ActionCategory;
pub use axiom::{AxiomRecord, ViolationRef};
pub use contradiction::{Contradiction, ContradictionKind};
pub use entailment::EntailmentResult;
pub use polarity::Polarity;
pub use proof::{ProofChain, ProofStep};
pub use relation::Relation;
pub use topic::Topic;
pub use validation::ValidationResult;
