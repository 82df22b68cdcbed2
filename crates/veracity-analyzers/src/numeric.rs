//! Numeric-assertion extraction and conflict detection
//!
//! Postconditions frequently pin call results to constants ("size() == 0").
//! A claim asserting a different constant for the same callee is a strong
//! contradiction signal that needs no topic overlap.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// Comparison operator in a numeric assertion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericOp {
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
}

impl NumericOp {
    /// Get the operator as source text
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericOp::Eq => "==",
            NumericOp::Ne => "!=",
            NumericOp::Lt => "<",
            NumericOp::Gt => ">",
            NumericOp::Le => "<=",
            NumericOp::Ge => ">=",
        }
    }

    /// Parse an operator from source text
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "==" => Some(NumericOp::Eq),
            "!=" => Some(NumericOp::Ne),
            "<" => Some(NumericOp::Lt),
            ">" => Some(NumericOp::Gt),
            "<=" => Some(NumericOp::Le),
            ">=" => Some(NumericOp::Ge),
            _ => None,
        }
    }
}

/// One extracted assertion: operator and integer operand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumericAssertion {
    /// Comparison operator
    pub op: NumericOp,

    /// Integer operand
    pub value: i64,
}

static ASSERTION_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(\w+\(\))\s*(==|!=|<=|>=|<|>)\s*(\d+)")
        .expect("assertion pattern must compile")
});

/// Extract numeric assertions like `size() == 0`, keyed by the lower-cased
/// callee text
///
/// Multiple assertions per text are supported; a repeated key keeps the last
/// match. Returns an empty map when nothing matches.
pub fn extract_numeric_assertions(text: &str) -> BTreeMap<String, NumericAssertion> {
    let mut assertions = BTreeMap::new();

    for capture in ASSERTION_PATTERN.captures_iter(text) {
        let key = capture[1].to_lowercase();
        let op = match NumericOp::parse(&capture[2]) {
            Some(op) => op,
            None => continue,
        };
        let value = match capture[3].parse::<i64>() {
            Ok(value) => value,
            Err(_) => continue, // operand too large to represent; skip
        };

        assertions.insert(key, NumericAssertion { op, value });
    }

    assertions
}

/// Check two assertion maps for a contradiction on a shared key
///
/// Conflicts: both `==` with different values, or `==V` on one side and
/// `!=V` on the other. Returns an explanation naming the key, or `None`.
pub fn numeric_conflict(
    claim: &BTreeMap<String, NumericAssertion>,
    axiom: &BTreeMap<String, NumericAssertion>,
) -> Option<String> {
    for (key, claim_assertion) in claim {
        let axiom_assertion = match axiom.get(key) {
            Some(a) => a,
            None => continue,
        };

        let conflicts = match (claim_assertion.op, axiom_assertion.op) {
            (NumericOp::Eq, NumericOp::Eq) => claim_assertion.value != axiom_assertion.value,
            (NumericOp::Eq, NumericOp::Ne) | (NumericOp::Ne, NumericOp::Eq) => {
                claim_assertion.value == axiom_assertion.value
            }
            _ => false,
        };

        if conflicts {
            return Some(format!(
                "{} {} {} contradicts {} {} {}",
                key,
                claim_assertion.op.as_str(),
                claim_assertion.value,
                key,
                axiom_assertion.op.as_str(),
                axiom_assertion.value,
            ));
        }
    }

    None
}
