//! Counseling session domain entities.

pub mod model;
pub mod participant;
pub mod status;

pub use model::Counsel;
pub use participant::Participant;
pub use status::CounselStatus;
