//! Timeout enforcement for attempts the contestant never finished.
//!
//! The sweep never scores anything: it only moves attempts past their
//! problem's time limit to `incorrect`/`timeout`. Running it is
//! idempotent, so it is safe to drive once per inbound request or on a
//! fixed interval, and safe for two drivers to race.

use crate::error::ServiceError;
use crate::submission_service::apply_verdict;
use chrono::{DateTime, Utc};
use grader::types::Verdict;
use serde::Serialize;
use store::repositories::{AttemptRepository, CatalogRepository};

/// What one sweep pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    /// In-progress attempts examined.
    pub scanned: usize,
    /// Attempts moved to `incorrect`/`timeout`.
    pub timed_out: usize,
}

/// Scan every in-progress attempt and time out those at or past their
/// problem's time limit.
///
/// A per-attempt failure (missing catalog entry, failed save) is logged
/// and the sweep moves on to the remaining attempts; the first such
/// failure is returned after the full pass so the driver can decide
/// whether to retry.
pub fn sweep_timeouts(
    attempts: &impl AttemptRepository,
    catalog: &impl CatalogRepository,
    now: DateTime<Utc>,
) -> Result<SweepOutcome, ServiceError> {
    let in_progress = attempts.list_in_progress()?;
    let scanned = in_progress.len();
    let mut timed_out = 0;
    let mut first_failure: Option<ServiceError> = None;

    for mut attempt in in_progress {
        let result = catalog
            .part(attempt.part_id)
            .and_then(|part| catalog.problem(part.problem_id));
        let problem = match result {
            Ok(problem) => problem,
            Err(e) => {
                log::error!("sweep skipping attempt {}: {}", attempt.id, e);
                first_failure.get_or_insert(e.into());
                continue;
            }
        };

        if attempt.time_passed(problem.time_limit, now) < problem.time_limit {
            continue;
        }

        apply_verdict(&mut attempt, &Verdict::timed_out());
        match attempts.save(&attempt) {
            Ok(()) => {
                timed_out += 1;
                log::info!(
                    "attempt {} timed out after {}s",
                    attempt.id,
                    problem.time_limit
                );
            }
            Err(e) => {
                log::error!("sweep failed to save attempt {}: {}", attempt.id, e);
                first_failure.get_or_insert(e.into());
            }
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(SweepOutcome { scanned, timed_out }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use store::MemoryStore;
    use store::models::{Attempt, AttemptStatus, Contest, Problem, ProblemPart, VerdictReason};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap()
    }

    fn seeded_store() -> MemoryStore {
        let store = MemoryStore::new();
        store.add_contest(Contest {
            id: 1,
            name: "Open".to_string(),
            slug: "open".to_string(),
            begin_at: t0(),
            end_at: t0() + Duration::hours(5),
            description: String::new(),
            contestants: vec![7],
        });
        store.add_problem(Problem {
            id: 1,
            contest_id: 1,
            name: "Sorting".to_string(),
            order: "A".to_string(),
            slug: "sorting".to_string(),
            time_limit: 60,
        });
        store.add_part(ProblemPart {
            id: 1,
            problem_id: 1,
            name: "small".to_string(),
            points: 10,
            order: 1,
        });
        store
    }

    fn open_attempt(store: &MemoryStore, owner_id: i64, created_at: DateTime<Utc>) -> Attempt {
        store
            .insert(Attempt::new(owner_id, 1, 0, String::new(), created_at))
            .unwrap()
    }

    #[test]
    fn stale_attempts_are_timed_out() {
        let store = seeded_store();
        let stale = open_attempt(&store, 7, t0());

        let outcome = sweep_timeouts(&store, &store, t0() + Duration::seconds(61)).unwrap();
        assert_eq!(outcome, SweepOutcome { scanned: 1, timed_out: 1 });

        let swept = store.load(stale.id).unwrap();
        assert_eq!(swept.status, AttemptStatus::Incorrect);
        assert_eq!(swept.reason, Some(VerdictReason::Timeout));
        assert_eq!(swept.score, 0);
    }

    #[test]
    fn boundary_elapsed_equal_to_limit_times_out() {
        let store = seeded_store();
        open_attempt(&store, 7, t0());

        let outcome = sweep_timeouts(&store, &store, t0() + Duration::seconds(60)).unwrap();
        assert_eq!(outcome.timed_out, 1);
    }

    #[test]
    fn attempts_under_the_limit_are_left_alone() {
        let store = seeded_store();
        let fresh = open_attempt(&store, 7, t0());

        let outcome = sweep_timeouts(&store, &store, t0() + Duration::seconds(59)).unwrap();
        assert_eq!(outcome, SweepOutcome { scanned: 1, timed_out: 0 });
        assert!(store.load(fresh.id).unwrap().is_in_progress());
    }

    #[test]
    fn sweeping_twice_changes_nothing_further() {
        let store = seeded_store();
        open_attempt(&store, 7, t0());
        let later = t0() + Duration::hours(1);

        let first = sweep_timeouts(&store, &store, later).unwrap();
        assert_eq!(first.timed_out, 1);

        let second = sweep_timeouts(&store, &store, later).unwrap();
        assert_eq!(second, SweepOutcome { scanned: 0, timed_out: 0 });
    }

    #[test]
    fn sweep_continues_past_broken_attempts() {
        let store = seeded_store();
        // Attempt pointing at a part the catalog does not know.
        store
            .insert(Attempt::new(7, 99, 0, String::new(), t0()))
            .unwrap();
        let stale = open_attempt(&store, 7, t0());

        let result = sweep_timeouts(&store, &store, t0() + Duration::hours(1));
        assert!(matches!(
            result,
            Err(ServiceError::Store(store::StoreError::NotFound { .. }))
        ));
        // The healthy attempt was still swept.
        assert_eq!(store.load(stale.id).unwrap().status, AttemptStatus::Incorrect);
    }
}
