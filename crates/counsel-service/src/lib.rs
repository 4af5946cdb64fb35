//! # counsel-service
//!
//! The session-lifecycle core of CounselHub: a client-side store of the
//! last confirmed server state, pure join/cancel guards, and the
//! registration (student) and schedule (faculty) services that combine
//! both with the API client. Mutations are optimistic; any API failure
//! rolls the store back by re-fetching the server state.

pub mod guard;
pub mod registration;
pub mod schedule;
pub mod store;

pub use registration::RegistrationService;
pub use schedule::{CounselDraft, ScheduleService};
pub use store::CounselStore;
