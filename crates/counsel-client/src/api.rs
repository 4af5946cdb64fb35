//! Trait seams over the backend API.
//!
//! The services and CLI talk to these traits rather than to reqwest
//! directly, so the session-lifecycle core can be exercised against an
//! in-memory fake in tests.

use async_trait::async_trait;

use counsel_core::result::AppResult;
use counsel_core::types::{CounselId, DepartmentId, FacultyId, SearchQuery, StudentId};
use counsel_entity::counsel::{Counsel, Participant};
use counsel_entity::department::Department;
use counsel_entity::stats::{DashboardStats, RecentActivity};
use counsel_entity::user::{Faculty, Student};

use crate::dto::request::{
    CreateCounselRequest, CreateDepartmentRequest, CreateFacultyRequest, CreateStudentRequest,
    UpdateStudentRequest,
};

/// Counseling session lifecycle operations (student and faculty flows).
#[async_trait]
pub trait CounselApi: Send + Sync {
    /// All counsels open to students.
    async fn available_counsels(&self) -> AppResult<Vec<Counsel>>;

    /// Counsels owned by a faculty member.
    async fn faculty_counsels(&self, faculty_id: FacultyId) -> AppResult<Vec<Counsel>>;

    /// Counsels a student is registered into.
    async fn registered_counsels(&self, student_id: StudentId) -> AppResult<Vec<Counsel>>;

    /// Participant roster of a counsel.
    async fn counsel_participants(&self, counsel_id: CounselId) -> AppResult<Vec<Participant>>;

    /// Create a counsel on behalf of a faculty member.
    async fn create_counsel(
        &self,
        faculty_id: FacultyId,
        request: &CreateCounselRequest,
    ) -> AppResult<Counsel>;

    /// Delete a counsel; the server cascades participant registrations.
    async fn delete_counsel(&self, counsel_id: CounselId, faculty_id: FacultyId) -> AppResult<()>;

    /// Register a student into a counsel.
    async fn register_participant(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()>;

    /// Remove a student's own registration from a counsel.
    async fn cancel_registration(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()>;
}

/// Administrative CRUD over students, faculty, and departments.
#[async_trait]
pub trait AdminApi: Send + Sync {
    /// Dashboard overview counters.
    async fn dashboard_stats(&self) -> AppResult<DashboardStats>;

    /// Most recent account/session activity entries.
    async fn recent_activities(&self, limit: u32) -> AppResult<Vec<RecentActivity>>;

    /// All student accounts.
    async fn all_students(&self) -> AppResult<Vec<Student>>;

    /// A single student account.
    async fn student(&self, id: StudentId) -> AppResult<Student>;

    /// Create a student account.
    async fn create_student(&self, request: &CreateStudentRequest) -> AppResult<Student>;

    /// Update a student account's profile fields.
    async fn update_student(
        &self,
        id: StudentId,
        request: &UpdateStudentRequest,
    ) -> AppResult<Student>;

    /// Delete a student account.
    async fn delete_student(&self, id: StudentId) -> AppResult<()>;

    /// Activate or deactivate a user account.
    async fn update_user_status(&self, user_id: i64, status: &str) -> AppResult<()>;

    /// All faculty accounts.
    async fn all_faculty(&self) -> AppResult<Vec<Faculty>>;

    /// Faculty accounts filtered by a search term, paginated.
    async fn search_faculty(&self, query: &SearchQuery) -> AppResult<Vec<Faculty>>;

    /// Create a faculty account.
    async fn create_faculty(&self, request: &CreateFacultyRequest) -> AppResult<Faculty>;

    /// Delete a faculty account.
    async fn delete_faculty(&self, id: FacultyId) -> AppResult<()>;

    /// All departments.
    async fn departments(&self) -> AppResult<Vec<Department>>;

    /// Create a department.
    async fn create_department(&self, request: &CreateDepartmentRequest) -> AppResult<Department>;

    /// Delete a department.
    async fn delete_department(&self, id: DepartmentId) -> AppResult<()>;

    /// Faculty members belonging to a department.
    async fn department_faculty(&self, id: DepartmentId) -> AppResult<Vec<Faculty>>;
}
