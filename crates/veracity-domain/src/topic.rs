//! Topic vocabulary for claim/axiom overlap detection

use serde::{Deserialize, Serialize};

/// Fixed topic vocabulary shared by claims and axioms
///
/// Topic overlap is a necessary precondition for any entailment verdict
/// stronger than related-to. The variants mirror the knowledge base's
/// extraction vocabulary; ordering is derived so topic sets iterate
/// deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    /// Arithmetic overflow and out-of-range results
    Overflow,

    /// Null pointers and null dereference
    NullPointer,

    /// Division, including division by zero
    Division,

    /// Buffers and array bounds
    Buffer,

    /// Memory allocation and deallocation
    Memory,

    /// Pointers and dereferencing
    Pointer,

    /// Integer types and signedness
    Integer,

    /// The `std::move` utility
    StdMove,

    /// The `std::forward` utility
    StdForward,

    /// `delete`, `free`, and deallocation
    Delete,

    /// Iterator categories and pass guarantees
    Iterator,

    /// `std::vector` and element storage
    Vector,

    /// Preprocessor macros and pairing rules
    Macro,
}

impl Topic {
    /// Get the topic name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Topic::Overflow => "overflow",
            Topic::NullPointer => "null_pointer",
            Topic::Division => "division",
            Topic::Buffer => "buffer",
            Topic::Memory => "memory",
            Topic::Pointer => "pointer",
            Topic::Integer => "integer",
            Topic::StdMove => "std_move",
            Topic::StdForward => "std_forward",
            Topic::Delete => "delete",
            Topic::Iterator => "iterator",
            Topic::Vector => "vector",
            Topic::Macro => "macro",
        }
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
