//! On-disk layout for uploaded submissions and the secret oracle files.
//!
//! The grader itself only ever sees two resolved paths (submitted output,
//! oracle output); this module is where those paths come from.

use crate::models::{Attempt, Contest, Problem, ProblemPart};
use std::path::PathBuf;

/// Root directories the judge reads and writes under.
#[derive(Debug, Clone)]
pub struct StorageRoot {
    submission_dir: PathBuf,
    secret_dir: PathBuf,
}

impl StorageRoot {
    pub fn new(submission_dir: impl Into<PathBuf>, secret_dir: impl Into<PathBuf>) -> Self {
        Self {
            submission_dir: submission_dir.into(),
            secret_dir: secret_dir.into(),
        }
    }

    fn contest_dir(&self, contest: &Contest) -> PathBuf {
        self.submission_dir
            .join(format!("{}-{}", contest.id, contest.slug))
    }

    /// Where the contestant's uploaded output file lands.
    pub fn output_upload_path(
        &self,
        contest: &Contest,
        problem: &Problem,
        part: &ProblemPart,
        attempt: &Attempt,
        owner_name: &str,
    ) -> PathBuf {
        self.contest_dir(contest).join(owner_name).join(format!(
            "{}_{}-{}.out",
            problem.slug, part.name, attempt.testfileid
        ))
    }

    /// Where the contestant's uploaded source file lands. The extension is
    /// carried over from the uploaded filename, falling back to `.src`.
    pub fn source_upload_path(
        &self,
        contest: &Contest,
        problem: &Problem,
        part: &ProblemPart,
        attempt: &Attempt,
        owner_name: &str,
        original_filename: &str,
    ) -> PathBuf {
        let ext = original_filename
            .rfind('.')
            .map(|i| &original_filename[i..])
            .unwrap_or(".src");
        self.contest_dir(contest).join(owner_name).join(format!(
            "{}_{}-{}{}",
            problem.slug, part.name, attempt.testfileid, ext
        ))
    }

    /// The secret input file handed to the contestant for this attempt.
    pub fn oracle_input_path(
        &self,
        problem: &Problem,
        part: &ProblemPart,
        attempt: &Attempt,
    ) -> PathBuf {
        self.secret_dir
            .join("inputs")
            .join(&problem.slug)
            .join(format!("{}-{}.in", part.name, attempt.testfileid))
    }

    /// The expected-answer file the grader compares against.
    pub fn oracle_output_path(
        &self,
        problem: &Problem,
        part: &ProblemPart,
        attempt: &Attempt,
    ) -> PathBuf {
        self.secret_dir
            .join("outputs")
            .join(&problem.slug)
            .join(format!("{}-{}.out", part.name, attempt.testfileid))
    }
}
