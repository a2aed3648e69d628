//! Extension seams for the grader.
//!
//! - [`comparator`]: the strategy trait for comparing a submission against
//!   its oracle. Implement it to swap in a different matching policy.

pub mod comparator;
