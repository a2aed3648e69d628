//! # Grader
//!
//! Core scoring logic for the judge: load a submitted output file and the
//! matching oracle, compare them with a pluggable strategy, and produce a
//! [`types::Verdict`].
//!
//! ## Key concepts
//! - **GradeJob**: one grading run for one attempt.
//! - **Comparators**: pluggable strategies for matching submission lines
//!   against oracle lines; the default tokenizes on whitespace and awards
//!   all-or-nothing.
//! - **Verdict**: the (status, score, reason) value the caller applies to
//!   the attempt and persists. The grader itself never touches storage.

pub mod comparators;
pub mod error;
pub mod file_loader;
pub mod traits;
pub mod types;

use crate::comparators::TokenComparator;
use crate::error::GraderError;
use crate::file_loader::{filter_blank, read_lines};
use crate::traits::comparator::OutputComparator;
use crate::types::Verdict;
use std::path::{Path, PathBuf};

/// One grading run: an oracle file, a submitted output file, and the
/// point value at stake.
pub struct GradeJob<'a> {
    oracle_path: PathBuf,
    output_path: PathBuf,
    points: i64,
    comparator: Box<dyn OutputComparator + Send + Sync + 'a>,
}

impl<'a> GradeJob<'a> {
    pub fn new(oracle_path: PathBuf, output_path: PathBuf, points: i64) -> Self {
        Self {
            oracle_path,
            output_path,
            points,
            comparator: Box::new(TokenComparator),
        }
    }

    /// Swap in a different comparison strategy.
    pub fn with_comparator<C: OutputComparator + 'a>(mut self, comparator: C) -> Self {
        self.comparator = Box::new(comparator);
        self
    }

    /// Run the comparison and produce a verdict.
    ///
    /// Both files are read up front; an unreadable file surfaces as
    /// [`GraderError::FileRead`] and no verdict is produced. Blank lines
    /// are discarded from both sides before the comparator runs. The
    /// verdict follows from the comparison:
    /// - filtered line counts differ: bad submission, zero score;
    /// - every line pair matches: accepted, full points;
    /// - anything else: wrong answer, zero score.
    pub fn grade(self) -> Result<Verdict, GraderError> {
        let oracle_lines = filter_blank(read_lines(&self.oracle_path)?);
        let answer_lines = filter_blank(read_lines(&self.output_path)?);

        let result = self
            .comparator
            .compare(self.points, &oracle_lines, &answer_lines);

        let verdict = if result.malformed {
            Verdict::bad_submission()
        } else if result.missed_lines.is_empty() {
            Verdict::accepted(result.awarded)
        } else {
            Verdict::wrong_answer()
        };

        log::debug!(
            "graded {} against {}: {} ({} pts)",
            self.output_path.display(),
            self.oracle_path.display(),
            verdict.reason,
            verdict.score
        );

        Ok(verdict)
    }
}

/// Grade one attempt with the default token comparator.
pub fn grade_attempt(
    oracle_path: &Path,
    output_path: &Path,
    points: i64,
) -> Result<Verdict, GraderError> {
    GradeJob::new(oracle_path.to_path_buf(), output_path.to_path_buf(), points).grade()
}
