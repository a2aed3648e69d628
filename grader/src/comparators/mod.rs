//! # Comparators
//!
//! Comparison strategies for judging submitted output against an oracle.
//! Every comparator implements [`crate::traits::comparator::OutputComparator`].
//!
//! The available comparators are:
//! - [`token_comparator`]: whitespace-tokenized, line-order-sensitive,
//!   all-or-nothing. This is the default.

pub mod token_comparator;

pub use token_comparator::TokenComparator;
