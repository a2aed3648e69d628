use serde::{Deserialize, Serialize};

/// A contest problem. Scoring happens per part; the time limit applies to
/// every attempt against any of this problem's parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: i64,
    pub contest_id: i64,
    pub name: String,
    /// Display ordering key within the contest ("A", "B", ...).
    pub order: String,
    pub slug: String,
    /// Seconds a contestant has to finish an attempt.
    pub time_limit: i64,
}
