//! Score aggregation: best attempt per part, rolled up through problems
//! to the contest total.

use crate::error::ServiceError;
use store::models::ProblemPart;
use store::repositories::{AttemptRepository, CatalogRepository};

/// The owner's score for one part: their best attempt, 0 with no attempts.
pub fn part_score(
    attempts: &impl AttemptRepository,
    owner_id: i64,
    part_id: i64,
) -> Result<i64, ServiceError> {
    let all = attempts.attempts_for(owner_id, part_id)?;
    Ok(all.iter().map(|a| a.score).max().unwrap_or(0))
}

/// The owner's score for a problem: the sum of their part scores.
pub fn problem_score(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    owner_id: i64,
    problem_id: i64,
) -> Result<i64, ServiceError> {
    let mut total = 0;
    for part in catalog.parts_of(problem_id)? {
        total += part_score(attempts, owner_id, part.id)?;
    }
    Ok(total)
}

/// The owner's contest total across all problems.
pub fn contest_score(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    owner_id: i64,
    contest_id: i64,
) -> Result<i64, ServiceError> {
    let mut total = 0;
    for problem in catalog.problems_of(contest_id)? {
        total += problem_score(attempts, catalog, owner_id, problem.id)?;
    }
    Ok(total)
}

/// Maximum points available on a problem.
pub fn problem_total_points(
    catalog: &impl CatalogRepository,
    problem_id: i64,
) -> Result<i64, ServiceError> {
    Ok(catalog.parts_of(problem_id)?.iter().map(|p| p.points).sum())
}

/// The first part, in part order, where the owner has not yet earned full
/// points. `None` once the problem is fully solved.
pub fn next_part(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    owner_id: i64,
    problem_id: i64,
) -> Result<Option<ProblemPart>, ServiceError> {
    for part in catalog.parts_of(problem_id)? {
        if part_score(attempts, owner_id, part.id)? < part.points {
            return Ok(Some(part));
        }
    }
    Ok(None)
}
