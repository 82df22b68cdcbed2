//! Veracity In-Memory Knowledge Base
//!
//! A deterministic implementation of the `AxiomSearch` and `DependencyGraph`
//! collaborator traits backed by plain collections. It serves three callers:
//! tests that need reproducible search results, doc examples, and embedding
//! applications that want a small local KB without a storage backend.
//!
//! # Determinism
//!
//! Search ranks by keyword-overlap score with ties broken by axiom id, and
//! the dependency walk is breadth-first in insertion order, so identical
//! inputs always produce identical result orderings.
//!
//! # Examples
//!
//! ```
//! use veracity_kb::MemoryKb;
//! use veracity_domain::AxiomRecord;
//! use veracity_domain::traits::AxiomSearch;
//!
//! let mut kb = MemoryKb::new();
//! kb.add_axiom(AxiomRecord::new("ovf", "Signed integer overflow is undefined"));
//!
//! let hits = kb.search("signed integer overflow", 10).unwrap();
//! assert_eq!(hits[0].id, "ovf");
//! ```

#![warn(missing_docs)]

use std::collections::{HashMap, HashSet, VecDeque};
use thiserror::Error;
use veracity_domain::traits::{AxiomSearch, DependencyGraph};
use veracity_domain::AxiomRecord;

/// Errors that can occur during in-memory KB operations
#[derive(Error, Debug)]
pub enum KbError {
    /// The backend has been taken offline (used to exercise degradation)
    #[error("Knowledge base unavailable: {0}")]
    Unavailable(String),
}

/// In-memory knowledge base implementing both collaborator traits
///
/// Axioms are stored in insertion order; dependency edges point from an
/// axiom to the axioms it depends on. The `take_*_offline` switches make
/// the trait methods fail, so callers can exercise their degradation paths.
#[derive(Debug, Clone, Default)]
pub struct MemoryKb {
    axioms: Vec<AxiomRecord>,
    edges: HashMap<String, Vec<String>>,
    search_offline: bool,
    graph_offline: bool,
}

impl MemoryKb {
    /// Create an empty knowledge base
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an axiom record
    pub fn add_axiom(&mut self, axiom: AxiomRecord) {
        self.axioms.push(axiom);
    }

    /// Add a dependency edge: `from` depends on `to`
    pub fn add_dependency(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.edges.entry(from.into()).or_default().push(to.into());
    }

    /// Number of stored axioms
    pub fn len(&self) -> usize {
        self.axioms.len()
    }

    /// Whether the knowledge base is empty
    pub fn is_empty(&self) -> bool {
        self.axioms.is_empty()
    }

    /// Make subsequent `search` calls fail
    pub fn take_search_offline(&mut self) {
        self.search_offline = true;
    }

    /// Make subsequent `dependencies` calls fail
    pub fn take_graph_offline(&mut self) {
        self.graph_offline = true;
    }

    fn record_by_id(&self, id: &str) -> Option<&AxiomRecord> {
        self.axioms.iter().find(|a| a.id == id)
    }

    fn keyword_score(query_words: &HashSet<String>, axiom: &AxiomRecord) -> usize {
        let text = format!("{} {}", axiom.content, axiom.formal_spec).to_lowercase();
        let axiom_words: HashSet<&str> = text.split_whitespace().collect();
        query_words
            .iter()
            .filter(|w| axiom_words.contains(w.as_str()))
            .count()
    }
}

impl AxiomSearch for MemoryKb {
    type Error = KbError;

    fn search(&self, query: &str, limit: usize) -> Result<Vec<AxiomRecord>, Self::Error> {
        if self.search_offline {
            return Err(KbError::Unavailable("search offline".to_string()));
        }

        let query_words: HashSet<String> = query
            .to_lowercase()
            .split_whitespace()
            .map(|w| w.to_string())
            .collect();

        let mut scored: Vec<(usize, &AxiomRecord)> = self
            .axioms
            .iter()
            .map(|a| (Self::keyword_score(&query_words, a), a))
            .filter(|(score, _)| *score > 0)
            .collect();

        scored.sort_by(|(sa, a), (sb, b)| sb.cmp(sa).then_with(|| a.id.cmp(&b.id)));

        Ok(scored
            .into_iter()
            .take(limit)
            .map(|(_, a)| a.clone())
            .collect())
    }
}

impl DependencyGraph for MemoryKb {
    type Error = KbError;

    fn dependencies(
        &self,
        axiom_id: &str,
        max_depth: usize,
    ) -> Result<Vec<AxiomRecord>, Self::Error> {
        if self.graph_offline {
            return Err(KbError::Unavailable("graph offline".to_string()));
        }

        let mut visited: HashSet<&str> = HashSet::new();
        visited.insert(axiom_id);

        let mut queue: VecDeque<(&str, usize)> = VecDeque::new();
        queue.push_back((axiom_id, 0));

        let mut reachable = Vec::new();
        while let Some((current, depth)) = queue.pop_front() {
            if depth >= max_depth {
                continue;
            }
            let Some(targets) = self.edges.get(current) else {
                continue;
            };
            for target in targets {
                if !visited.insert(target.as_str()) {
                    continue;
                }
                // Edges may point at axioms the store never saw; skip those
                if let Some(record) = self.record_by_id(target) {
                    reachable.push(record.clone());
                }
                queue.push_back((target.as_str(), depth + 1));
            }
        }

        Ok(reachable)
    }
}
