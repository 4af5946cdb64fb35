//! Student registration flows.

use std::sync::Arc;

use counsel_core::error::AppError;
use counsel_core::result::AppResult;
use counsel_core::types::{CounselId, StudentId};
use counsel_entity::counsel::Counsel;
use counsel_entity::stats::CounselStats;

use counsel_client::api::CounselApi;

use crate::guard::{check_cancel, check_join};
use crate::store::CounselStore;

/// Join/cancel workflow for a signed-in student.
///
/// State transitions are optimistic: a successful API call mutates the
/// local store immediately. When the API call fails, the service
/// re-fetches the server state before surfacing the error so the store
/// never keeps a mutation the server rejected.
pub struct RegistrationService {
    /// Backend API.
    api: Arc<dyn CounselApi>,
    /// Local session cache.
    store: CounselStore,
    /// The signed-in student.
    student_id: StudentId,
}

impl RegistrationService {
    /// Creates a service for the given student.
    pub fn new(api: Arc<dyn CounselApi>, student_id: StudentId) -> Self {
        Self {
            api,
            store: CounselStore::new(),
            student_id,
        }
    }

    /// Read access to the local store.
    pub fn store(&self) -> &CounselStore {
        &self.store
    }

    /// Fetches the available sessions and the student's registrations
    /// wholesale, replacing the local cache.
    pub async fn refresh(&mut self) -> AppResult<()> {
        let available = self.api.available_counsels().await?;
        let registered = self.api.registered_counsels(self.student_id).await?;
        self.store.replace_all(available);
        self.store.set_joined(registered.into_iter().map(|c| c.id));
        Ok(())
    }

    /// Registers the student into a session.
    ///
    /// The guard runs against the cached snapshot first, so a full or
    /// already-joined session never reaches the network.
    pub async fn join(&mut self, counsel_id: CounselId) -> AppResult<()> {
        let counsel = self
            .store
            .get(counsel_id)
            .ok_or_else(|| AppError::not_found(format!("No session with id {counsel_id}")))?;
        check_join(counsel, self.store.is_joined(counsel_id))?;

        match self
            .api
            .register_participant(counsel_id, self.student_id)
            .await
        {
            Ok(()) => {
                self.store.apply_join(counsel_id);
                tracing::info!(%counsel_id, "joined counseling session");
                Ok(())
            }
            Err(e) => {
                self.rollback().await;
                Err(e)
            }
        }
    }

    /// Cancels the student's registration for a session.
    pub async fn cancel(&mut self, counsel_id: CounselId) -> AppResult<()> {
        check_cancel(self.store.is_joined(counsel_id))?;

        match self
            .api
            .cancel_registration(counsel_id, self.student_id)
            .await
        {
            Ok(()) => {
                self.store.apply_cancel(counsel_id);
                tracing::info!(%counsel_id, "cancelled registration");
                Ok(())
            }
            Err(e) => {
                self.rollback().await;
                Err(e)
            }
        }
    }

    /// The student's current registrations, fetched fresh.
    pub async fn my_counsels(&self) -> AppResult<Vec<Counsel>> {
        self.api.registered_counsels(self.student_id).await
    }

    /// Stats over the student's registrations, fetched fresh.
    pub async fn stats(&self) -> AppResult<CounselStats> {
        let mine = self.my_counsels().await?;
        Ok(CounselStats::of(&mine))
    }

    /// Restores the store to confirmed server state after a failed
    /// mutation. A failed rollback leaves the old snapshot and is only
    /// logged — the original error matters more to the caller.
    async fn rollback(&mut self) {
        if let Err(e) = self.refresh().await {
            tracing::warn!("rollback refresh failed: {e}");
        }
    }
}
