use chrono::{DateTime, Utc};
use rand::distributions::Alphanumeric;
use rand::{Rng, thread_rng};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use strum::{Display, EnumIter, EnumString};

/// Status of an attempt throughout its lifecycle.
///
/// `InProgress` is the sole initial state; `Correct` and `Incorrect` are
/// terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AttemptStatus {
    InProgress,
    Correct,
    Incorrect,
}

impl Default for AttemptStatus {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Why an attempt left the in-progress state. Only meaningful once the
/// status is terminal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum VerdictReason {
    Accepted,
    WrongAnswer,
    Timeout,
    BadSubmission,
    ScoredManually,
}

/// One contestant's submission instance against one problem part.
///
/// Created when the contestant starts a submission, finalized exactly once
/// by either the grader or the timeout sweeper. `testfileid` and
/// `randomness` are assigned at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attempt {
    pub id: i64,
    pub owner_id: i64,
    pub part_id: i64,
    pub created_at: DateTime<Utc>,
    pub status: AttemptStatus,
    /// 0 while in progress; set when the status turns terminal. Never
    /// exceeds the part's point value.
    pub score: i64,
    /// Non-null iff the status is terminal.
    pub reason: Option<VerdictReason>,
    /// Which secret test file this attempt was handed, derived from the
    /// number of prior attempts against the same part.
    pub testfileid: i64,
    /// Opaque capability token gating the oracle input download.
    pub randomness: String,
    pub output_file: Option<PathBuf>,
    pub source_file: Option<PathBuf>,
}

impl Attempt {
    pub fn new(
        owner_id: i64,
        part_id: i64,
        testfileid: i64,
        randomness: String,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            owner_id,
            part_id,
            created_at: now,
            status: AttemptStatus::InProgress,
            score: 0,
            reason: None,
            testfileid,
            randomness,
            output_file: None,
            source_file: None,
        }
    }

    /// Generate a fresh capability token: `len` alphanumeric characters.
    pub fn generate_token(len: usize) -> String {
        thread_rng()
            .sample_iter(&Alphanumeric)
            .take(len)
            .map(char::from)
            .collect()
    }

    pub fn is_in_progress(&self) -> bool {
        self.status == AttemptStatus::InProgress
    }

    pub fn is_correct(&self) -> bool {
        self.status == AttemptStatus::Correct
    }

    pub fn is_incorrect(&self) -> bool {
        self.status == AttemptStatus::Incorrect
    }

    /// Seconds elapsed since creation, clamped to `time_limit` so a stale
    /// attempt never reports more time than the limit allows. Feeds both
    /// the timeout check and any progress display.
    pub fn time_passed(&self, time_limit: i64, now: DateTime<Utc>) -> i64 {
        (now - self.created_at).num_seconds().min(time_limit)
    }

    /// Capability check used by the external download handler for the
    /// oracle input file.
    pub fn grants_download(&self, token: &str) -> bool {
        !self.randomness.is_empty() && self.randomness == token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    #[test]
    fn new_attempt_starts_in_progress() {
        let a = Attempt::new(7, 3, 0, "abc123".to_string(), t0());
        assert!(a.is_in_progress());
        assert_eq!(a.score, 0);
        assert_eq!(a.reason, None);
        assert_eq!(a.testfileid, 0);
    }

    #[test]
    fn token_has_requested_length_and_alphabet() {
        let token = Attempt::generate_token(16);
        assert_eq!(token.len(), 16);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn time_passed_is_clamped_to_the_limit() {
        let a = Attempt::new(7, 3, 0, String::new(), t0());
        assert_eq!(a.time_passed(60, t0() + Duration::seconds(45)), 45);
        assert_eq!(a.time_passed(60, t0() + Duration::seconds(60)), 60);
        assert_eq!(a.time_passed(60, t0() + Duration::seconds(300)), 60);
    }

    #[test]
    fn download_requires_matching_token() {
        let a = Attempt::new(7, 3, 0, "s3cretT0ken".to_string(), t0());
        assert!(a.grants_download("s3cretT0ken"));
        assert!(!a.grants_download("other"));

        let blank = Attempt::new(7, 3, 0, String::new(), t0());
        assert!(!blank.grants_download(""));
    }

    #[test]
    fn status_strings_round_trip() {
        assert_eq!(AttemptStatus::InProgress.to_string(), "in_progress");
        assert_eq!(
            "wrong_answer".parse::<VerdictReason>().unwrap(),
            VerdictReason::WrongAnswer
        );
    }
}
