use crate::types::CompareResult;

/// Strategy trait for comparing a submitted output against the oracle.
///
/// Implementations receive both files as already-filtered line sequences
/// (blank lines removed) and decide how many of the part's points to
/// award.
pub trait OutputComparator: Send + Sync {
    /// Compare the full submission against the full oracle.
    ///
    /// - `points`: the part's point value, the most `awarded` may be.
    /// - `oracle_lines`: expected output, blank lines already removed.
    /// - `answer_lines`: submitted output, blank lines already removed.
    fn compare(
        &self,
        points: i64,
        oracle_lines: &[String],
        answer_lines: &[String],
    ) -> CompareResult;
}
