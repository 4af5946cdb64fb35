//! Student and faculty account records.
//!
//! Flat entities managed through the admin API: created and deleted
//! whole, no internal lifecycle on the client side.

use serde::{Deserialize, Serialize};

use counsel_core::types::{FacultyId, StudentId};

/// A student account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    /// Account identifier.
    #[serde(rename = "userId")]
    pub id: StudentId,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Institutional student number.
    #[serde(default)]
    pub student_number: Option<String>,
    /// Grade level (year of study).
    #[serde(default)]
    pub grade_level: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
}

/// A faculty member account.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faculty {
    /// Account identifier.
    #[serde(rename = "userId")]
    pub id: FacultyId,
    /// Login and display name.
    #[serde(default)]
    pub username: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Academic title (e.g. "Assoc. Prof.").
    #[serde(default)]
    pub academic_title: Option<String>,
    /// Contact phone number.
    #[serde(default)]
    pub contact_number: Option<String>,
    /// Department name.
    #[serde(default)]
    pub department: Option<String>,
}
