//! Veracity Text Analyzers
//!
//! Pure functions that extract semantic signals from free text: polarity,
//! topics, action categories, numeric assertions, and implicit hazard
//! phrases. The entailment classifier in `veracity-reasoning` is built
//! entirely on these signals.
//!
//! # Architecture
//!
//! Every analyzer is a stateless function over a string. The literal pattern
//! tables are an intentional tagged-table design: they are compiled once
//! into statics at first use and shared by all callers.
//!
//! # Examples
//!
//! ```
//! use veracity_analyzers::{extract_polarity, extract_topics};
//! use veracity_domain::{Polarity, Topic};
//!
//! assert_eq!(extract_polarity("signed overflow wraps around"), Polarity::Positive);
//! assert!(extract_topics("dereferencing a null pointer").contains(&Topic::NullPointer));
//! ```

#![warn(missing_docs)]

pub mod action;
pub mod hazard;
pub mod numeric;
pub mod polarity;
pub mod topic;

pub use action::extract_action_category;
pub use hazard::implicit_hazard;
pub use numeric::{extract_numeric_assertions, numeric_conflict, NumericAssertion, NumericOp};
pub use polarity::extract_polarity;
pub use topic::extract_topics;
