use serde::{Deserialize, Serialize};

/// A scored sub-component of a problem, carrying its own point value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemPart {
    pub id: i64,
    pub problem_id: i64,
    pub name: String,
    pub points: i64,
    /// Ordering index within the problem.
    pub order: i64,
}
