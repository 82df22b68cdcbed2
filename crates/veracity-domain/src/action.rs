//! Action categories for semantic contradiction detection

use serde::{Deserialize, Serialize};

/// Category of operation a piece of text describes
///
/// Distinguishes operations that read similarly but are semantically
/// incompatible: "std::move moves the object" (transfer) versus
/// "std::move is a cast" (syntactic).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionCategory {
    /// Syntactic transformation with no runtime effect on object state
    Syntactic,

    /// Transfer of object state or ownership
    Transfer,

    /// Creation of a new object from an existing one
    Duplication,
}

impl ActionCategory {
    /// Get the category name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionCategory::Syntactic => "syntactic",
            ActionCategory::Transfer => "transfer",
            ActionCategory::Duplication => "duplication",
        }
    }
}

impl std::fmt::Display for ActionCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
