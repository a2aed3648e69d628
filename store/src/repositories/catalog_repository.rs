use crate::error::StoreError;
use crate::models::{Contest, Problem, ProblemPart};

/// Read-only lookups over the contest catalog.
pub trait CatalogRepository: Send + Sync {
    fn contest(&self, id: i64) -> Result<Contest, StoreError>;

    fn problem(&self, id: i64) -> Result<Problem, StoreError>;

    fn part(&self, id: i64) -> Result<ProblemPart, StoreError>;

    /// Problems of a contest, ordered by their display key.
    fn problems_of(&self, contest_id: i64) -> Result<Vec<Problem>, StoreError>;

    /// Parts of a problem, in part order.
    fn parts_of(&self, problem_id: i64) -> Result<Vec<ProblemPart>, StoreError>;
}
