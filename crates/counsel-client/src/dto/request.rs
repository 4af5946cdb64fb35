//! Request DTOs with validation.
//!
//! Validation here is the client-side pre-flight check; the server
//! stays authoritative and may still reject a request that passes.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create-counsel request body (faculty).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCounselRequest {
    /// Session title.
    #[validate(length(min = 1, max = 100, message = "Title is required"))]
    pub title: String,
    /// Session description.
    #[validate(length(min = 1, max = 500, message = "Description is required"))]
    pub description: String,
    /// Scheduled start.
    pub start_time: NaiveDateTime,
    /// Scheduled end, optional.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<NaiveDateTime>,
    /// Registration capacity.
    #[validate(range(min = 1, max = 1000, message = "Max participants must be at least 1"))]
    pub max_participants: u32,
}

/// Create-student request body (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateStudentRequest {
    /// Login and display name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Institutional student number.
    #[validate(length(min = 1, message = "Student number is required"))]
    pub student_number: String,
    /// Grade level (year of study).
    pub grade_level: String,
    /// Department name.
    pub dept: String,
    /// Assigned role, fixed by the admin form.
    pub role: String,
}

impl CreateStudentRequest {
    /// Default role the admin form assigns to new students.
    pub const ROLE: &'static str = "ROLE_STUDENT";
}

/// Update-student request body (admin). Absent fields are left as-is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStudentRequest {
    /// New display name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// New email address.
    #[validate(email(message = "A valid email is required"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// New grade level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade_level: Option<String>,
    /// New department name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dept: Option<String>,
}

/// Create-faculty request body (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacultyRequest {
    /// Login and display name.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "A valid email is required"))]
    pub email: String,
    /// Initial password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Academic title.
    pub academic_title: String,
    /// Contact phone number.
    pub contact_number: String,
    /// Department name.
    pub department: String,
    /// Assigned role, fixed by the admin form.
    pub role: String,
}

impl CreateFacultyRequest {
    /// Default role the admin form assigns to new faculty.
    pub const ROLE: &'static str = "ROLE_FACULTY";
}

/// Create-department request body (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, message = "Department name is required"))]
    pub deptname: String,
}
