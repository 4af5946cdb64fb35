//! Department entity.

use serde::{Deserialize, Serialize};

use counsel_core::types::DepartmentId;

/// An academic department faculty members belong to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    /// Department identifier.
    pub id: DepartmentId,
    /// Department name (the backend calls this `deptname`).
    #[serde(rename = "deptname")]
    pub name: String,
}
