//! # counsel-entity
//!
//! Domain entity models for CounselHub. Every struct in this crate
//! mirrors a JSON object the backend exchanges with the client; all
//! entities derive `Debug`, `Clone`, `Serialize`, and `Deserialize`,
//! and wire field names follow the backend's camelCase convention.

pub mod counsel;
pub mod department;
pub mod stats;
pub mod user;
