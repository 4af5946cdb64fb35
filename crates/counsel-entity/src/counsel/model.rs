//! Counseling session entity model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use counsel_core::types::{CounselId, FacultyId};

use super::status::CounselStatus;

/// A scheduled faculty-led counseling session students register into.
///
/// Sessions are created by faculty, transition status server-side, and
/// are deleted by faculty (participant registrations cascade on the
/// server). Invariant: `current_participants <= max_participants` — the
/// backend enforces it, the client checks it defensively before
/// offering a join.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Counsel {
    /// Unique session identifier.
    pub id: CounselId,
    /// Session title.
    pub title: String,
    /// Detailed session description.
    pub description: String,
    /// Scheduled start (backend-local, no zone on the wire).
    pub start_time: NaiveDateTime,
    /// Scheduled end, when the faculty member set one.
    #[serde(default)]
    pub end_time: Option<NaiveDateTime>,
    /// Registration capacity.
    pub max_participants: u32,
    /// Number of registered participants; absent on freshly created
    /// sessions, which is why it defaults to zero.
    #[serde(default)]
    pub current_participants: u32,
    /// Lifecycle status.
    pub status: CounselStatus,
    /// Owning faculty member.
    #[serde(default)]
    pub faculty_id: Option<FacultyId>,
    /// Display name of the owning faculty member.
    #[serde(default)]
    pub faculty_name: Option<String>,
}

impl Counsel {
    /// Whether the session is at capacity.
    pub fn is_full(&self) -> bool {
        self.current_participants >= self.max_participants
    }

    /// Whether the session's status still accepts registrations.
    pub fn is_joinable(&self) -> bool {
        self.status.is_joinable()
    }

    /// Seats still open for registration.
    pub fn remaining_seats(&self) -> u32 {
        self.max_participants.saturating_sub(self.current_participants)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(current: u32, max: u32) -> Counsel {
        Counsel {
            id: CounselId::new(1),
            title: "Study planning".into(),
            description: "One-on-one guidance".into(),
            start_time: "2026-03-02T10:00:00".parse().expect("datetime"),
            end_time: None,
            max_participants: max,
            current_participants: current,
            status: CounselStatus::Pending,
            faculty_id: Some(FacultyId::new(9)),
            faculty_name: Some("Dr. Reyes".into()),
        }
    }

    #[test]
    fn test_capacity_boundary() {
        assert!(!sample(4, 5).is_full());
        assert!(sample(5, 5).is_full());
        assert_eq!(sample(4, 5).remaining_seats(), 1);
        assert_eq!(sample(5, 5).remaining_seats(), 0);
    }

    #[test]
    fn test_deserialize_without_participant_count() {
        // Freshly created sessions come back without currentParticipants.
        let json = r#"{
            "id": 3,
            "title": "Thesis check-in",
            "description": "Progress review",
            "startTime": "2026-03-02T10:00:00",
            "maxParticipants": 10,
            "status": "PENDING"
        }"#;
        let counsel: Counsel = serde_json::from_str(json).expect("deserialize");
        assert_eq!(counsel.current_participants, 0);
        assert!(counsel.faculty_name.is_none());
        assert!(counsel.is_joinable());
    }
}
