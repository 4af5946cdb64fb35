//! Session participant entity.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use counsel_core::types::ParticipantId;

/// A student registered into a counseling session.
///
/// Owned by a [`Counsel`](super::Counsel): created when the student
/// registers, removed when they cancel, and cascaded away when the
/// faculty member deletes the session. The roster endpoint names the
/// fields `studentName`/`studentNumber`; the serde renames keep the
/// struct readable on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// Registration record identifier.
    pub id: ParticipantId,
    /// Student display name.
    #[serde(rename = "studentName")]
    pub name: String,
    /// Institutional student number.
    #[serde(rename = "studentNumber")]
    pub student_number: String,
    /// When the student registered.
    #[serde(rename = "joinedAt", default)]
    pub joined_at: Option<NaiveDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roster_field_mapping() {
        let json = r#"{
            "id": 11,
            "studentName": "Mina Park",
            "studentNumber": "2023-00417",
            "joinedAt": "2026-02-27T08:15:00"
        }"#;
        let p: Participant = serde_json::from_str(json).expect("deserialize");
        assert_eq!(p.id, ParticipantId::new(11));
        assert_eq!(p.name, "Mina Park");
        assert_eq!(p.student_number, "2023-00417");
        assert!(p.joined_at.is_some());
    }
}
