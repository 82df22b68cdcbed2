//! Implicit hazard phrases - terse axiom texts that imply error conditions
//!
//! Knowledge-base axioms frequently describe undefined behavior without
//! saying "undefined": "Signed integer overflow", "use after free". These
//! phrases mark the text as negative-polarity even though no explicit
//! negative indicator appears.

use once_cell::sync::Lazy;
use regex::Regex;

const HAZARD_PATTERNS: &[&str] = &[
    r"signed integer overflow",
    r"null pointer",
    r"division by zero",
    r"buffer overflow",
    r"uninitialized",
    r"out of bounds",
    r"dangling pointer",
    r"use after free",
    r"double.?free", // "double free" or "double-free"
    r"already freed",
    r"freed memory",
    r"deallocated memory",
    r"invalid pointer",
    r"integer division",
];

static COMPILED: Lazy<Vec<Regex>> = Lazy::new(|| {
    HAZARD_PATTERNS
        .iter()
        .map(|p| Regex::new(&format!("(?i){}", p)).expect("hazard pattern must compile"))
        .collect()
});

/// Whether the text matches a known terse-hazard phrase
pub fn implicit_hazard(text: &str) -> bool {
    COMPILED.iter().any(|p| p.is_match(text))
}
