use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Where a contest sits relative to its begin/end window.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "title_case")]
#[serde(rename_all = "snake_case")]
pub enum ContestPhase {
    NotStarted,
    Running,
    Ended,
}

/// A contest: a time window, a set of problems, and a roster of contestants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contest {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub begin_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub description: String,
    /// Owner ids of registered contestants.
    pub contestants: Vec<i64>,
}

impl Contest {
    pub fn phase(&self, now: DateTime<Utc>) -> ContestPhase {
        if self.end_at < now {
            ContestPhase::Ended
        } else if self.begin_at < now {
            ContestPhase::Running
        } else {
            ContestPhase::NotStarted
        }
    }

    pub fn has_begun(&self, now: DateTime<Utc>) -> bool {
        self.begin_at < now
    }

    pub fn has_ended(&self, now: DateTime<Utc>) -> bool {
        self.end_at < now
    }

    pub fn is_ongoing(&self, now: DateTime<Utc>) -> bool {
        self.begin_at < now && self.end_at > now
    }

    pub fn has_contestant(&self, owner_id: i64) -> bool {
        self.contestants.contains(&owner_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn contest() -> Contest {
        Contest {
            id: 1,
            name: "Autumn Open".to_string(),
            slug: "autumn-open".to_string(),
            begin_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2025, 3, 1, 14, 0, 0).unwrap(),
            description: String::new(),
            contestants: vec![7, 11],
        }
    }

    #[test]
    fn phase_tracks_the_window() {
        let c = contest();
        let before = Utc.with_ymd_and_hms(2025, 3, 1, 8, 0, 0).unwrap();
        let during = Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2025, 3, 1, 15, 0, 0).unwrap();

        assert_eq!(c.phase(before), ContestPhase::NotStarted);
        assert_eq!(c.phase(during), ContestPhase::Running);
        assert_eq!(c.phase(after), ContestPhase::Ended);
        assert!(c.is_ongoing(during));
        assert!(!c.is_ongoing(after));
    }

    #[test]
    fn contestant_membership() {
        let c = contest();
        assert!(c.has_contestant(7));
        assert!(!c.has_contestant(8));
    }

    #[test]
    fn phase_display_is_human_readable() {
        assert_eq!(ContestPhase::NotStarted.to_string(), "Not Started");
        assert_eq!(ContestPhase::Ended.to_string(), "Ended");
    }
}
