//! Reasoning error types

use thiserror::Error;

/// Errors that can occur during reasoning operations
///
/// The orchestrated paths (`detect`, `generate`, `validate`) degrade on
/// collaborator failure instead of surfacing these; only the standalone
/// helpers and configuration loading propagate them.
#[derive(Error, Debug)]
pub enum ReasoningError {
    /// Search backend error
    #[error("Search error: {0}")]
    Search(String),

    /// Dependency-graph backend error
    #[error("Graph error: {0}")]
    Graph(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
