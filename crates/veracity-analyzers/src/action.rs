//! Action-category extraction for semantic contradiction detection

use once_cell::sync::Lazy;
use regex::Regex;
use veracity_domain::ActionCategory;

/// Categories tested in priority order: duplication > transfer > syntactic,
/// so "copies" wins over "moves" in ambiguous text
static CATEGORY_PATTERNS: Lazy<Vec<(ActionCategory, Vec<Regex>)>> = Lazy::new(|| {
    let table: &[(ActionCategory, &[&str])] = &[
        (
            ActionCategory::Duplication,
            &[r"\bcopy\b", r"\bcopies\b", r"\bduplicate\b", r"\bclone\b"],
        ),
        (
            ActionCategory::Transfer,
            &[
                r"\bmoves\b",
                r"\btransfer\b",
                r"\btransfers ownership\b",
                r"\btransfer ownership\b",
            ],
        ),
        (
            ActionCategory::Syntactic,
            &[
                r"\bcast\b",
                r"\bstatic_cast\b",
                r"\breinterpret_cast\b",
                r"\bconst_cast\b",
                r"\bdynamic_cast\b",
            ],
        ),
    ];

    table
        .iter()
        .map(|(category, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| Regex::new(p).expect("action pattern must compile"))
                .collect();
            (*category, compiled)
        })
        .collect()
});

/// Extract the action category a piece of text describes, if any
///
/// Citing the function names `std::move`/`std::forward` is not asserting the
/// transfer action, so those name mentions are scrubbed before matching
/// (the regex crate has no look-behind; scrubbing is equivalent to the
/// exclusion the patterns would otherwise carry).
pub fn extract_action_category(text: &str) -> Option<ActionCategory> {
    let scrubbed = text
        .to_lowercase()
        .replace("std::move", " ")
        .replace("std::forward", " ");

    for (category, patterns) in CATEGORY_PATTERNS.iter() {
        if patterns.iter().any(|p| p.is_match(&scrubbed)) {
            return Some(*category);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_is_syntactic() {
        assert_eq!(
            extract_action_category("std::move is a cast"),
            Some(ActionCategory::Syntactic)
        );
    }

    #[test]
    fn test_moves_is_transfer() {
        assert_eq!(
            extract_action_category("std::move moves the object"),
            Some(ActionCategory::Transfer)
        );
    }

    #[test]
    fn test_copies_is_duplication() {
        assert_eq!(
            extract_action_category("std::move copies the object"),
            Some(ActionCategory::Duplication)
        );
    }

    #[test]
    fn test_duplication_wins_over_transfer() {
        assert_eq!(
            extract_action_category("moves by making a copy"),
            Some(ActionCategory::Duplication)
        );
    }

    #[test]
    fn test_function_name_alone_is_no_action() {
        assert_eq!(extract_action_category("std::move"), None);
        assert_eq!(extract_action_category("see std::forward for details"), None);
    }

    #[test]
    fn test_plain_text_has_no_category() {
        assert_eq!(extract_action_category("signed integer overflow"), None);
    }
}
