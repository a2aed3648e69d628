//! Start-of-submission and completion-of-submission workflows.
//!
//! Starting either reuses the owner's in-progress attempt for the part or
//! creates a fresh one; completion attaches the uploaded files, grades the
//! output synchronously, and persists the verdict exactly once.

use crate::context::ServiceContext;
use crate::error::ServiceError;
use chrono::{DateTime, Utc};
use grader::GradeJob;
use grader::types::Verdict;
use std::path::PathBuf;
use store::models::{Attempt, AttemptStatus, VerdictReason};
use store::repositories::{AttemptRepository, CatalogRepository};

pub(crate) fn apply_verdict(attempt: &mut Attempt, verdict: &Verdict) {
    attempt.status = verdict.status;
    attempt.score = verdict.score;
    attempt.reason = Some(verdict.reason);
}

/// Begin a submission for `(owner_id, part_id)`.
///
/// If the owner already has an in-progress attempt for the part it is
/// returned as-is, keeping at most one attempt open per (owner, part).
/// Otherwise a new attempt is created with the next `testfileid` for the
/// part and a fresh capability token.
pub fn start_submission(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    ctx: &ServiceContext,
    owner_id: i64,
    part_id: i64,
    now: DateTime<Utc>,
) -> Result<Attempt, ServiceError> {
    let part = catalog.part(part_id)?;

    if let Some(existing) = attempts.find_in_progress(owner_id, part_id)? {
        return Ok(existing);
    }

    let testfileid = attempts.count_for_part(part_id)? as i64;
    let token = Attempt::generate_token(ctx.token_length);
    let attempt = attempts.insert(Attempt::new(owner_id, part_id, testfileid, token, now))?;
    log::info!(
        "attempt {} opened for owner {} on part {} (testfile {})",
        attempt.id,
        owner_id,
        part.id,
        testfileid
    );
    Ok(attempt)
}

/// Finish a submission: attach the uploaded files, grade the output
/// against the part's oracle, and persist the verdict.
///
/// The attempt must still be in progress. A file that cannot be read is
/// an infrastructure failure: the error propagates and the attempt is
/// left unmodified rather than being scored as zero.
pub fn complete_submission(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    ctx: &ServiceContext,
    attempt_id: i64,
    output_file: PathBuf,
    source_file: Option<PathBuf>,
) -> Result<Verdict, ServiceError> {
    let mut attempt = attempts.load(attempt_id)?;
    if !attempt.is_in_progress() {
        return Err(ServiceError::InvalidState(format!(
            "attempt {} is already {}",
            attempt.id, attempt.status
        )));
    }

    let part = catalog.part(attempt.part_id)?;
    let problem = catalog.problem(part.problem_id)?;
    let oracle_path = ctx.storage.oracle_output_path(&problem, &part, &attempt);

    let verdict = GradeJob::new(oracle_path, output_file.clone(), part.points).grade()?;

    attempt.output_file = Some(output_file);
    attempt.source_file = source_file;
    apply_verdict(&mut attempt, &verdict);
    attempts.save(&attempt)?;

    log::info!(
        "attempt {} scored {}/{} ({})",
        attempt.id,
        verdict.score,
        part.points,
        verdict.reason
    );
    Ok(verdict)
}

/// Override an attempt's score by hand.
///
/// The score is clamped to the part's point range; full marks read as
/// correct, anything less as incorrect. The reason is always
/// `scored_manually`.
pub fn apply_manual_score(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    attempt_id: i64,
    score: i64,
) -> Result<Attempt, ServiceError> {
    let mut attempt = attempts.load(attempt_id)?;
    let part = catalog.part(attempt.part_id)?;

    let score = score.clamp(0, part.points);
    attempt.status = if score == part.points {
        AttemptStatus::Correct
    } else {
        AttemptStatus::Incorrect
    };
    attempt.score = score;
    attempt.reason = Some(VerdictReason::ScoredManually);
    attempts.save(&attempt)?;

    log::info!("attempt {} manually scored {}", attempt.id, score);
    Ok(attempt)
}
