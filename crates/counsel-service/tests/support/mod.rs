//! Shared test support: an in-memory fake of the backend API.
#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use counsel_client::api::CounselApi;
use counsel_client::dto::request::CreateCounselRequest;
use counsel_core::error::AppError;
use counsel_core::result::AppResult;
use counsel_core::types::{CounselId, FacultyId, ParticipantId, StudentId};
use counsel_entity::counsel::{Counsel, CounselStatus, Participant};

/// Mutable server-side state behind the fake.
#[derive(Debug, Default)]
struct FakeState {
    counsels: Vec<Counsel>,
    registrations: HashMap<CounselId, HashSet<StudentId>>,
    register_calls: usize,
    cancel_calls: usize,
    create_calls: usize,
    fail_next_register: Option<AppError>,
    next_id: i64,
}

/// In-memory stand-in for the counseling backend.
///
/// Mirrors the server-side rules the client defends against (capacity,
/// duplicate registration) and counts calls so tests can assert that
/// client-side guards short-circuit before the network.
#[derive(Debug, Default)]
pub struct FakeApi {
    state: Mutex<FakeState>,
}

impl FakeApi {
    /// Creates a fake pre-seeded with sessions.
    pub fn with_counsels(counsels: Vec<Counsel>) -> Self {
        let next_id = counsels.iter().map(|c| c.id.into_inner()).max().unwrap_or(0) + 1;
        Self {
            state: Mutex::new(FakeState {
                counsels,
                next_id,
                ..FakeState::default()
            }),
        }
    }

    /// Makes the next register call fail with the given error.
    pub fn fail_next_register(&self, error: AppError) {
        self.state.lock().unwrap().fail_next_register = Some(error);
    }

    /// Seeds a registration directly, bypassing the API surface.
    pub fn seed_registration(&self, counsel_id: CounselId, student_id: StudentId) {
        let mut state = self.state.lock().unwrap();
        state
            .registrations
            .entry(counsel_id)
            .or_default()
            .insert(student_id);
        if let Some(counsel) = state.counsels.iter_mut().find(|c| c.id == counsel_id) {
            counsel.current_participants += 1;
        }
    }

    /// Server-side snapshot of a session.
    pub fn counsel(&self, id: CounselId) -> Option<Counsel> {
        self.state
            .lock()
            .unwrap()
            .counsels
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    /// Number of sessions on the server.
    pub fn counsel_count(&self) -> usize {
        self.state.lock().unwrap().counsels.len()
    }

    /// How many register calls reached the server.
    pub fn register_calls(&self) -> usize {
        self.state.lock().unwrap().register_calls
    }

    /// How many cancel calls reached the server.
    pub fn cancel_calls(&self) -> usize {
        self.state.lock().unwrap().cancel_calls
    }

    /// How many create calls reached the server.
    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }
}

#[async_trait]
impl CounselApi for FakeApi {
    async fn available_counsels(&self) -> AppResult<Vec<Counsel>> {
        Ok(self.state.lock().unwrap().counsels.clone())
    }

    async fn faculty_counsels(&self, faculty_id: FacultyId) -> AppResult<Vec<Counsel>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .counsels
            .iter()
            .filter(|c| c.faculty_id == Some(faculty_id))
            .cloned()
            .collect())
    }

    async fn registered_counsels(&self, student_id: StudentId) -> AppResult<Vec<Counsel>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .counsels
            .iter()
            .filter(|c| {
                state
                    .registrations
                    .get(&c.id)
                    .is_some_and(|students| students.contains(&student_id))
            })
            .cloned()
            .collect())
    }

    async fn counsel_participants(&self, counsel_id: CounselId) -> AppResult<Vec<Participant>> {
        let state = self.state.lock().unwrap();
        let mut roster: Vec<Participant> = state
            .registrations
            .get(&counsel_id)
            .map(|students| {
                students
                    .iter()
                    .map(|student_id| Participant {
                        id: ParticipantId::new(student_id.into_inner()),
                        name: format!("Student {student_id}"),
                        student_number: format!("2023-{:05}", student_id.into_inner()),
                        joined_at: None,
                    })
                    .collect()
            })
            .unwrap_or_default();
        roster.sort_by_key(|p| p.id);
        Ok(roster)
    }

    async fn create_counsel(
        &self,
        faculty_id: FacultyId,
        request: &CreateCounselRequest,
    ) -> AppResult<Counsel> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;
        let id = CounselId::new(state.next_id);
        state.next_id += 1;
        let created = Counsel {
            id,
            title: request.title.clone(),
            description: request.description.clone(),
            start_time: request.start_time,
            end_time: request.end_time,
            max_participants: request.max_participants,
            current_participants: 0,
            status: CounselStatus::Pending,
            faculty_id: Some(faculty_id),
            faculty_name: None,
        };
        state.counsels.push(created.clone());
        Ok(created)
    }

    async fn delete_counsel(&self, counsel_id: CounselId, _faculty_id: FacultyId) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.counsels.len();
        state.counsels.retain(|c| c.id != counsel_id);
        if state.counsels.len() == before {
            return Err(AppError::not_found("Session not found"));
        }
        state.registrations.remove(&counsel_id);
        Ok(())
    }

    async fn register_participant(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.register_calls += 1;

        if let Some(error) = state.fail_next_register.take() {
            return Err(error);
        }

        let counsel = state
            .counsels
            .iter()
            .find(|c| c.id == counsel_id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Session not found"))?;
        if counsel.is_full() {
            return Err(AppError::conflict("Session is full"));
        }
        let registered = state.registrations.entry(counsel_id).or_default();
        if !registered.insert(student_id) {
            return Err(AppError::conflict("Already registered"));
        }
        if let Some(counsel) = state.counsels.iter_mut().find(|c| c.id == counsel_id) {
            counsel.current_participants += 1;
        }
        Ok(())
    }

    async fn cancel_registration(
        &self,
        counsel_id: CounselId,
        student_id: StudentId,
    ) -> AppResult<()> {
        let mut state = self.state.lock().unwrap();
        state.cancel_calls += 1;

        let removed = state
            .registrations
            .get_mut(&counsel_id)
            .is_some_and(|students| students.remove(&student_id));
        if !removed {
            return Err(AppError::not_found("Registration not found"));
        }
        if let Some(counsel) = state.counsels.iter_mut().find(|c| c.id == counsel_id) {
            counsel.current_participants = counsel.current_participants.saturating_sub(1);
        }
        Ok(())
    }
}

/// Builds a session for seeding the fake.
pub fn counsel(id: i64, status: CounselStatus, current: u32, max: u32) -> Counsel {
    Counsel {
        id: CounselId::new(id),
        title: format!("Session {id}"),
        description: "Walk-in consultation".into(),
        start_time: "2026-03-02T10:00:00".parse().expect("datetime"),
        end_time: None,
        max_participants: max,
        current_participants: current,
        status,
        faculty_id: Some(FacultyId::new(1)),
        faculty_name: Some("Dr. Reyes".into()),
    }
}
