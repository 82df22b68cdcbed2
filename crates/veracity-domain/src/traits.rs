//! Trait definitions for the knowledge-base collaborators
//!
//! These traits define the boundary between the reasoning core and the
//! storage infrastructure. Backends are injected into each component's
//! constructor; the core never resolves them through ambient state.

use crate::AxiomRecord;

/// Relevance-ordered axiom search
///
/// Implementations return the most relevant records first and must tolerate
/// records with missing optional fields (the serde defaults on
/// [`AxiomRecord`] handle this for deserializing backends).
pub trait AxiomSearch {
    /// Error type for search operations
    type Error: std::fmt::Display;

    /// Search for axioms relevant to `query`, most relevant first
    fn search(&self, query: &str, limit: usize) -> Result<Vec<AxiomRecord>, Self::Error>;
}

/// Dependency-edge traversal over the axiom graph
///
/// Implementations return the records reachable from `axiom_id` via
/// dependency edges, ordered breadth-first by edge distance so proof chains
/// are reproducible across calls.
pub trait DependencyGraph {
    /// Error type for graph operations
    type Error: std::fmt::Display;

    /// Axioms reachable from `axiom_id` within `max_depth` edges
    fn dependencies(
        &self,
        axiom_id: &str,
        max_depth: usize,
    ) -> Result<Vec<AxiomRecord>, Self::Error>;
}

impl<T: AxiomSearch + ?Sized> AxiomSearch for &T {
    type Error = T::Error;

    fn search(&self, query: &str, limit: usize) -> Result<Vec<AxiomRecord>, Self::Error> {
        (**self).search(query, limit)
    }
}

impl<T: DependencyGraph + ?Sized> DependencyGraph for &T {
    type Error = T::Error;

    fn dependencies(
        &self,
        axiom_id: &str,
        max_depth: usize,
    ) -> Result<Vec<AxiomRecord>, Self::Error> {
        (**self).dependencies(axiom_id, max_depth)
    }
}
