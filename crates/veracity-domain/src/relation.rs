//! Relation between a claim and an axiom

use serde::{Deserialize, Serialize};

/// How an axiom relates to a claim
///
/// The entailment classifier only ever produces the first three variants;
/// `DependsOn` appears solely in proof-chain steps appended during the
/// grounding traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    /// The axiom supports the claim
    Supports,

    /// The axiom contradicts the claim
    Contradicts,

    /// The axiom is topically related without a clear verdict
    RelatedTo,

    /// The axiom is a dependency reached while grounding another axiom
    DependsOn,
}

impl Relation {
    /// Get the relation name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Supports => "SUPPORTS",
            Relation::Contradicts => "CONTRADICTS",
            Relation::RelatedTo => "RELATED_TO",
            Relation::DependsOn => "DEPENDS_ON",
        }
    }

    /// Parse a relation from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "SUPPORTS" => Some(Relation::Supports),
            "CONTRADICTS" => Some(Relation::Contradicts),
            "RELATED_TO" => Some(Relation::RelatedTo),
            "DEPENDS_ON" => Some(Relation::DependsOn),
            _ => None,
        }
    }
}

impl std::str::FromStr for Relation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid relation: {}", s))
    }
}

impl std::fmt::Display for Relation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
