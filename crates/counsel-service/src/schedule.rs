//! Faculty scheduling flows.

use std::sync::Arc;

use chrono::NaiveDateTime;

use counsel_core::error::AppError;
use counsel_core::result::AppResult;
use counsel_core::types::{CounselId, FacultyId};
use counsel_entity::counsel::{Counsel, Participant};
use counsel_entity::stats::CounselStats;

use counsel_client::api::CounselApi;
use counsel_client::dto::request::CreateCounselRequest;

use crate::store::CounselStore;

/// Unvalidated session form input, as collected from the user.
#[derive(Debug, Clone, Default)]
pub struct CounselDraft {
    /// Session title.
    pub title: String,
    /// Session description.
    pub description: String,
    /// Scheduled start.
    pub start_time: Option<NaiveDateTime>,
    /// Scheduled end.
    pub end_time: Option<NaiveDateTime>,
    /// Registration capacity.
    pub max_participants: u32,
}

/// Create/delete workflow for a signed-in faculty member.
pub struct ScheduleService {
    /// Backend API.
    api: Arc<dyn CounselApi>,
    /// Local cache of the faculty member's own sessions.
    store: CounselStore,
    /// The signed-in faculty member.
    faculty_id: FacultyId,
}

impl ScheduleService {
    /// Creates a service for the given faculty member.
    pub fn new(api: Arc<dyn CounselApi>, faculty_id: FacultyId) -> Self {
        Self {
            api,
            store: CounselStore::new(),
            faculty_id,
        }
    }

    /// Read access to the local store.
    pub fn store(&self) -> &CounselStore {
        &self.store
    }

    /// Fetches the faculty member's sessions wholesale.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let sessions = self.api.faculty_counsels(self.faculty_id).await?;
        self.store.replace_all(sessions);
        Ok(())
    }

    /// Validates draft input into a request body.
    ///
    /// Runs before any network call; the server remains authoritative
    /// for anything the client cannot see (overlaps, permissions).
    pub fn validate(draft: &CounselDraft) -> AppResult<CreateCounselRequest> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Title is required"));
        }
        let description = draft.description.trim();
        if description.is_empty() {
            return Err(AppError::validation("Description is required"));
        }
        let Some(start_time) = draft.start_time else {
            return Err(AppError::validation("Start time is required"));
        };
        if draft.max_participants < 1 {
            return Err(AppError::validation("Max participants must be at least 1"));
        }
        if let Some(end_time) = draft.end_time {
            if end_time <= start_time {
                return Err(AppError::validation("End time must be after start time"));
            }
        }

        Ok(CreateCounselRequest {
            title: title.to_string(),
            description: description.to_string(),
            start_time,
            end_time: draft.end_time,
            max_participants: draft.max_participants,
        })
    }

    /// Creates a session from draft input.
    ///
    /// The returned session is appended to the local list and a full
    /// refresh reconciles the derived stats with the server.
    pub async fn create(&mut self, draft: &CounselDraft) -> AppResult<Counsel> {
        let request = Self::validate(draft)?;
        let created = self.api.create_counsel(self.faculty_id, &request).await?;
        tracing::info!(counsel_id = %created.id, "created counseling session");

        self.store.append(created.clone());
        self.refresh().await?;
        Ok(created)
    }

    /// Deletes a session; participant registrations cascade on the
    /// server, the local copy is dropped by id.
    pub async fn delete(&mut self, counsel_id: CounselId) -> AppResult<()> {
        self.api.delete_counsel(counsel_id, self.faculty_id).await?;
        self.store.remove(counsel_id);
        tracing::info!(%counsel_id, "deleted counseling session");
        Ok(())
    }

    /// Fetches the participant roster of a session.
    pub async fn participants(&self, counsel_id: CounselId) -> AppResult<Vec<Participant>> {
        self.api.counsel_participants(counsel_id).await
    }

    /// Stats over the cached session list.
    pub fn stats(&self) -> CounselStats {
        self.store.stats()
    }
}
