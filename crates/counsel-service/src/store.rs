//! Client-side cache of counseling sessions.

use std::collections::HashSet;

use counsel_core::types::CounselId;
use counsel_entity::counsel::Counsel;
use counsel_entity::stats::CounselStats;

/// The client's view of the server's session list.
///
/// Holds the last confirmed server state plus optimistic local
/// mutations applied after a successful join/cancel/create/delete.
/// Rollback is always a wholesale [`replace_all`](Self::replace_all)
/// from a fresh fetch — the store never tries to undo individual
/// mutations.
#[derive(Debug, Clone, Default)]
pub struct CounselStore {
    /// Sessions as last fetched (plus optimistic edits).
    counsels: Vec<Counsel>,
    /// Sessions the current student is registered into.
    joined: HashSet<CounselId>,
}

impl CounselStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the cached list with freshly fetched server state.
    pub fn replace_all(&mut self, counsels: Vec<Counsel>) {
        self.counsels = counsels;
    }

    /// Replaces the set of sessions the student is registered into.
    pub fn set_joined(&mut self, ids: impl IntoIterator<Item = CounselId>) {
        self.joined = ids.into_iter().collect();
    }

    /// All cached sessions.
    pub fn counsels(&self) -> &[Counsel] {
        &self.counsels
    }

    /// Looks up a session by id.
    pub fn get(&self, id: CounselId) -> Option<&Counsel> {
        self.counsels.iter().find(|c| c.id == id)
    }

    /// Whether the student is registered into the given session.
    pub fn is_joined(&self, id: CounselId) -> bool {
        self.joined.contains(&id)
    }

    /// Case-insensitive substring search over title, description, and
    /// faculty name.
    pub fn search(&self, term: &str) -> Vec<&Counsel> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.counsels.iter().collect();
        }
        self.counsels
            .iter()
            .filter(|c| {
                c.title.to_lowercase().contains(&term)
                    || c.description.to_lowercase().contains(&term)
                    || c.faculty_name
                        .as_deref()
                        .is_some_and(|name| name.to_lowercase().contains(&term))
            })
            .collect()
    }

    /// Optimistically records a successful join: bumps the participant
    /// count and marks the session joined.
    pub fn apply_join(&mut self, id: CounselId) {
        if let Some(counsel) = self.counsels.iter_mut().find(|c| c.id == id) {
            counsel.current_participants += 1;
        }
        self.joined.insert(id);
    }

    /// Optimistically records a successful cancel: drops the join flag
    /// and decrements the participant count.
    pub fn apply_cancel(&mut self, id: CounselId) {
        if let Some(counsel) = self.counsels.iter_mut().find(|c| c.id == id) {
            counsel.current_participants = counsel.current_participants.saturating_sub(1);
        }
        self.joined.remove(&id);
    }

    /// Appends a freshly created session.
    pub fn append(&mut self, counsel: Counsel) {
        self.counsels.push(counsel);
    }

    /// Removes a session by id, returning whether it was present.
    /// The local join flag cascades with it.
    pub fn remove(&mut self, id: CounselId) -> bool {
        let before = self.counsels.len();
        self.counsels.retain(|c| c.id != id);
        self.joined.remove(&id);
        self.counsels.len() != before
    }

    /// Derives stats from the current list. Recomputed on every call.
    pub fn stats(&self) -> CounselStats {
        CounselStats::of(&self.counsels)
    }

    /// Number of cached sessions.
    pub fn len(&self) -> usize {
        self.counsels.len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.counsels.is_empty()
    }
}
