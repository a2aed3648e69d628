use crate::error::StoreError;
use crate::models::Attempt;

/// Storage seam for attempts.
///
/// `load`/`save`/`list_in_progress` are what the grader and the sweeper
/// consume; the remaining queries serve the submission-start workflow and
/// the scoreboard.
pub trait AttemptRepository: Send + Sync {
    fn load(&self, id: i64) -> Result<Attempt, StoreError>;

    /// Persist an updated attempt. The attempt must already exist.
    fn save(&self, attempt: &Attempt) -> Result<(), StoreError>;

    /// Persist a new attempt and return it with its assigned id.
    fn insert(&self, attempt: Attempt) -> Result<Attempt, StoreError>;

    /// Every attempt currently in progress, across all owners and parts.
    fn list_in_progress(&self) -> Result<Vec<Attempt>, StoreError>;

    /// The owner's in-progress attempt for a part, if any. The submission
    /// workflow guarantees there is at most one.
    fn find_in_progress(
        &self,
        owner_id: i64,
        part_id: i64,
    ) -> Result<Option<Attempt>, StoreError>;

    /// Number of attempts ever made against a part, by anyone. Seeds the
    /// next attempt's `testfileid`.
    fn count_for_part(&self, part_id: i64) -> Result<u64, StoreError>;

    /// All of one owner's attempts against a part.
    fn attempts_for(&self, owner_id: i64, part_id: i64) -> Result<Vec<Attempt>, StoreError>;
}
