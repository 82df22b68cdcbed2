//! Topic extraction over the fixed topic vocabulary

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use veracity_domain::Topic;

/// Word-form normalization applied before topic matching
const LEMMA_MAP: &[(&str, &str)] = &[
    ("dereferencing", "dereference"),
    ("overflows", "overflow"),
    ("overflowing", "overflow"),
    ("dividing", "division"),
    ("allocating", "allocation"),
    ("allocates", "allocation"),
];

static LEMMA_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    LEMMA_MAP
        .iter()
        .map(|(word, lemma)| {
            let pattern = format!(r"(?i)\b{}\b", word);
            (
                Regex::new(&pattern).expect("lemma pattern must compile"),
                *lemma,
            )
        })
        .collect()
});

/// Per-topic regex pattern lists; a topic is present if any pattern matches
static TOPIC_PATTERNS: Lazy<Vec<(Topic, Vec<Regex>)>> = Lazy::new(|| {
    let table: &[(Topic, &[&str])] = &[
        (
            Topic::Overflow,
            &[
                r"\boverflow\b",
                r"\boverflows\b",
                r"\bexceed\b",
                r"\bexceeds\b",
                r"\bout of range\b",
            ],
        ),
        (
            Topic::NullPointer,
            &[r"\bnull pointer\b", r"\bnull\b", r"\bnullptr\b", r"\bNULL\b"],
        ),
        (
            Topic::Division,
            &[
                r"\bdivision by zero\b",
                r"\bdivide by zero\b",
                r"\bdivisor.{0,10}zero\b",
            ],
        ),
        (
            Topic::Buffer,
            &[
                r"\bbuffer\b",
                r"\barray bounds\b",
                r"\bout.of.bounds\b",
                r"\bbounds\b",
            ],
        ),
        (
            Topic::Memory,
            &[r"\bmemory\b", r"\balloc\b", r"\bfree\b", r"\bheap\b"],
        ),
        (
            Topic::Pointer,
            &[
                r"\bpointer\b",
                r"\bderef\b",
                r"\bdereference\b",
                r"\bdereferencing\b",
                r"\binvalid pointer\b",
            ],
        ),
        (
            Topic::Integer,
            &[r"\binteger\b", r"\bsigned\b", r"\bunsigned\b", r"\bint\b"],
        ),
        (Topic::StdMove, &[r"\bstd::move\b", r"\bmove\b"]),
        (Topic::StdForward, &[r"\bstd::forward\b", r"\bforward\b"]),
        (
            Topic::Delete,
            &[
                r"\bdelete\b",
                r"\bfree\b",
                r"\bdeallocate\b",
                r"\bdouble.?delete\b",
            ],
        ),
        (
            Topic::Iterator,
            &[
                r"\biterator\b",
                r"\bForwardIterator\b",
                r"\bInputIterator\b",
                r"\bRandomAccessIterator\b",
                r"\bBidirectionalIterator\b",
                r"\bOutputIterator\b",
                r"\bpass\b", // single-pass, multi-pass
            ],
        ),
        (
            Topic::Vector,
            &[
                r"\bvector\b",
                r"\bstd::vector\b",
                r"\belements?\b",
                r"\bcontiguous\b",
                r"\bstored\b",
            ],
        ),
        (
            Topic::Macro,
            &[r"\bmacro\b", r"\bILP_\w+\b", r"\bpaired\b", r"\bmatching\b"],
        ),
    ];

    table
        .iter()
        .map(|(topic, patterns)| {
            let compiled = patterns
                .iter()
                .map(|p| {
                    Regex::new(&format!("(?i){}", p)).expect("topic pattern must compile")
                })
                .collect();
            (*topic, compiled)
        })
        .collect()
});

/// Normalize word forms so gerunds and plurals hit the topic patterns
pub fn lemmatize(text: &str) -> String {
    let mut result = text.to_string();
    for (rule, lemma) in LEMMA_RULES.iter() {
        result = rule.replace_all(&result, *lemma).into_owned();
    }
    result
}

/// Extract the set of topics the text is about
///
/// Returns a `BTreeSet` so downstream iteration (and every explanation built
/// from it) is deterministic.
pub fn extract_topics(text: &str) -> BTreeSet<Topic> {
    let normalized = lemmatize(text);

    TOPIC_PATTERNS
        .iter()
        .filter(|(_, patterns)| patterns.iter().any(|p| p.is_match(&normalized)))
        .map(|(topic, _)| *topic)
        .collect()
}
