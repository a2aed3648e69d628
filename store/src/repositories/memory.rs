use crate::error::StoreError;
use crate::models::{Attempt, AttemptStatus, Contest, Problem, ProblemPart};
use crate::repositories::{AttemptRepository, CatalogRepository};
use std::collections::HashMap;
use std::sync::RwLock;

/// In-process implementation of both repository traits.
///
/// Backs the test suite and any embedder that has no persistence of its
/// own. Catalog entries keep the ids they are seeded with; attempts get
/// ids assigned on insert.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    contests: HashMap<i64, Contest>,
    problems: HashMap<i64, Problem>,
    parts: HashMap<i64, ProblemPart>,
    attempts: HashMap<i64, Attempt>,
    next_attempt_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_contest(&self, contest: Contest) {
        self.write().contests.insert(contest.id, contest);
    }

    pub fn add_problem(&self, problem: Problem) {
        self.write().problems.insert(problem.id, problem);
    }

    pub fn add_part(&self, part: ProblemPart) {
        self.write().parts.insert(part.id, part);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Inner> {
        // A poisoned lock still holds consistent data here; recover it.
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Inner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl AttemptRepository for MemoryStore {
    fn load(&self, id: i64) -> Result<Attempt, StoreError> {
        self.read()
            .attempts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("attempt", id))
    }

    fn save(&self, attempt: &Attempt) -> Result<(), StoreError> {
        let mut inner = self.write();
        if !inner.attempts.contains_key(&attempt.id) {
            return Err(StoreError::not_found("attempt", attempt.id));
        }
        inner.attempts.insert(attempt.id, attempt.clone());
        Ok(())
    }

    fn insert(&self, mut attempt: Attempt) -> Result<Attempt, StoreError> {
        let mut inner = self.write();
        inner.next_attempt_id += 1;
        attempt.id = inner.next_attempt_id;
        inner.attempts.insert(attempt.id, attempt.clone());
        Ok(attempt)
    }

    fn list_in_progress(&self) -> Result<Vec<Attempt>, StoreError> {
        let mut found: Vec<Attempt> = self
            .read()
            .attempts
            .values()
            .filter(|a| a.status == AttemptStatus::InProgress)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }

    fn find_in_progress(
        &self,
        owner_id: i64,
        part_id: i64,
    ) -> Result<Option<Attempt>, StoreError> {
        Ok(self
            .read()
            .attempts
            .values()
            .find(|a| {
                a.owner_id == owner_id
                    && a.part_id == part_id
                    && a.status == AttemptStatus::InProgress
            })
            .cloned())
    }

    fn count_for_part(&self, part_id: i64) -> Result<u64, StoreError> {
        Ok(self
            .read()
            .attempts
            .values()
            .filter(|a| a.part_id == part_id)
            .count() as u64)
    }

    fn attempts_for(&self, owner_id: i64, part_id: i64) -> Result<Vec<Attempt>, StoreError> {
        let mut found: Vec<Attempt> = self
            .read()
            .attempts
            .values()
            .filter(|a| a.owner_id == owner_id && a.part_id == part_id)
            .cloned()
            .collect();
        found.sort_by_key(|a| a.id);
        Ok(found)
    }
}

impl CatalogRepository for MemoryStore {
    fn contest(&self, id: i64) -> Result<Contest, StoreError> {
        self.read()
            .contests
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("contest", id))
    }

    fn problem(&self, id: i64) -> Result<Problem, StoreError> {
        self.read()
            .problems
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("problem", id))
    }

    fn part(&self, id: i64) -> Result<ProblemPart, StoreError> {
        self.read()
            .parts
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("part", id))
    }

    fn problems_of(&self, contest_id: i64) -> Result<Vec<Problem>, StoreError> {
        let mut found: Vec<Problem> = self
            .read()
            .problems
            .values()
            .filter(|p| p.contest_id == contest_id)
            .cloned()
            .collect();
        found.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
        Ok(found)
    }

    fn parts_of(&self, problem_id: i64) -> Result<Vec<ProblemPart>, StoreError> {
        let mut found: Vec<ProblemPart> = self
            .read()
            .parts
            .values()
            .filter(|p| p.problem_id == problem_id)
            .cloned()
            .collect();
        found.sort_by_key(|p| (p.order, p.id));
        Ok(found)
    }
}
