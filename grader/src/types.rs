//! Result types produced by comparison and grading.

use serde::{Deserialize, Serialize};
use store::models::{AttemptStatus, VerdictReason};

/// The (status, score, reason) triple produced by scoring one attempt.
///
/// A verdict is a value: the grader decides, the caller persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub status: AttemptStatus,
    pub score: i64,
    pub reason: VerdictReason,
}

impl Verdict {
    pub fn accepted(score: i64) -> Self {
        Self {
            status: AttemptStatus::Correct,
            score,
            reason: VerdictReason::Accepted,
        }
    }

    pub fn wrong_answer() -> Self {
        Self {
            status: AttemptStatus::Incorrect,
            score: 0,
            reason: VerdictReason::WrongAnswer,
        }
    }

    pub fn bad_submission() -> Self {
        Self {
            status: AttemptStatus::Incorrect,
            score: 0,
            reason: VerdictReason::BadSubmission,
        }
    }

    pub fn timed_out() -> Self {
        Self {
            status: AttemptStatus::Incorrect,
            score: 0,
            reason: VerdictReason::Timeout,
        }
    }
}

/// Outcome of comparing one submission against one oracle.
#[derive(Debug, Clone, PartialEq)]
pub struct CompareResult {
    /// Points the comparator awards.
    pub awarded: i64,
    /// The part's point value.
    pub possible: i64,
    /// Oracle lines the submission reproduced.
    pub matched_lines: Vec<String>,
    /// Oracle lines the submission got wrong or never produced.
    pub missed_lines: Vec<String>,
    /// Line counts differed, so no line-by-line comparison happened.
    pub malformed: bool,
}
