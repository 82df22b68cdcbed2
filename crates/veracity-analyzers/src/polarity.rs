//! Polarity extraction - does text assert safe or erroneous behavior?

use veracity_domain::Polarity;

/// Indicators that text asserts defined/safe behavior
const POSITIVE_INDICATORS: &[&str] = &[
    "wraps around",
    "two's complement",
    "is safe",
    "is defined",
    "is valid",
    "is allowed",
    "is harmless",
    "well-defined",
    "guaranteed",
    "returns",
    "works",
    "succeeds",
];

/// Indicators that text asserts undefined/error behavior
///
/// Extended to match the knowledge base's constraint vocabulary: "Operation
/// requires:" and friends describe hazard guards, not safety claims.
const NEGATIVE_INDICATORS: &[&str] = &[
    "undefined behavior",
    "undefined",
    "error",
    "invalid",
    "must not",
    "shall not",
    "constraint violation",
    "requires: not",
    "requires:",
    "operation requires:",
    "must be",
    "shall be",
    "violat", // matches "violation", "violated", "violates"
];

/// Extract the polarity of a piece of text
///
/// Negative indicators are checked first: they are the more specific signal
/// and win even when a positive phrase also appears. "Operation requires:
/// pointer is valid" is a precondition, so it reads as negative despite
/// containing "is valid".
pub fn extract_polarity(text: &str) -> Polarity {
    let lower = text.to_lowercase();

    for indicator in NEGATIVE_INDICATORS {
        if lower.contains(indicator) {
            return Polarity::Negative;
        }
    }

    for indicator in POSITIVE_INDICATORS {
        if lower.contains(indicator) {
            return Polarity::Positive;
        }
    }

    Polarity::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_indicators() {
        assert_eq!(extract_polarity("overflow wraps around"), Polarity::Positive);
        assert_eq!(
            extract_polarity("uses two's complement arithmetic"),
            Polarity::Positive
        );
        assert_eq!(extract_polarity("dereferencing is safe"), Polarity::Positive);
        assert_eq!(extract_polarity("the behavior is defined"), Polarity::Positive);
        assert_eq!(
            extract_polarity("this operation is well-defined"),
            Polarity::Positive
        );
    }

    #[test]
    fn test_negative_indicators() {
        assert_eq!(
            extract_polarity("this is undefined behavior"),
            Polarity::Negative
        );
        assert_eq!(extract_polarity("the result is undefined"), Polarity::Negative);
        assert_eq!(extract_polarity("pointer must not be null"), Polarity::Negative);
        assert_eq!(
            extract_polarity("requires: NOT: isNull(ptr)"),
            Polarity::Negative
        );
    }

    #[test]
    fn test_negative_wins_over_positive() {
        // Precondition phrasing is a hazard guard, not a safety claim
        assert_eq!(
            extract_polarity("Operation requires: pointer is valid"),
            Polarity::Negative
        );
    }

    #[test]
    fn test_neutral_descriptive_text() {
        assert_eq!(extract_polarity("Signed integer overflow"), Polarity::Neutral);
        assert_eq!(extract_polarity(""), Polarity::Neutral);
    }
}
