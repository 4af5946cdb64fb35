//! Aggregated statistics models.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::counsel::{Counsel, CounselStatus};

/// Counts derived from a list of counseling sessions.
///
/// Pure derivation, recomputed from the current list on every call:
/// `upcoming` counts `PENDING` sessions, `completed` counts `COMPLETED`
/// ones. Never cached beyond the list it was derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct CounselStats {
    /// All sessions in the list.
    pub total: usize,
    /// Sessions already held.
    pub completed: usize,
    /// Sessions still waiting to start.
    pub upcoming: usize,
}

impl CounselStats {
    /// Derive stats from a session list.
    pub fn of(counsels: &[Counsel]) -> Self {
        Self {
            total: counsels.len(),
            completed: counsels
                .iter()
                .filter(|c| c.status == CounselStatus::Completed)
                .count(),
            upcoming: counsels
                .iter()
                .filter(|c| c.status == CounselStatus::Pending)
                .count(),
        }
    }
}

/// Admin dashboard overview, fetched from the backend as-is.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Registered student accounts.
    #[serde(default)]
    pub total_students: u64,
    /// Registered faculty accounts.
    #[serde(default)]
    pub total_faculty: u64,
    /// Counseling sessions across all faculty.
    #[serde(default)]
    pub total_sessions: u64,
}

/// An entry in the admin "recent activities" feed.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentActivity {
    /// Feed entry identifier.
    pub id: i64,
    /// Activity kind (e.g. `"user"`, `"session"`).
    #[serde(rename = "type")]
    pub kind: String,
    /// Short headline.
    pub title: String,
    /// Longer description.
    #[serde(default)]
    pub description: Option<String>,
    /// When the activity happened.
    #[serde(default)]
    pub timestamp: Option<NaiveDateTime>,
}
