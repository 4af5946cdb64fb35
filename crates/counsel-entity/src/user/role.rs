//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles granted by the backend and carried in token claims.
///
/// The wire form is the backend's `ROLE_*` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserRole {
    /// Full administrative access: user, faculty, and department CRUD.
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
    /// Creates and manages counseling sessions.
    #[serde(rename = "ROLE_FACULTY")]
    Faculty,
    /// Registers into counseling sessions.
    #[serde(rename = "ROLE_STUDENT")]
    Student,
}

impl UserRole {
    /// Return the role in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ROLE_ADMIN",
            Self::Faculty => "ROLE_FACULTY",
            Self::Student => "ROLE_STUDENT",
        }
    }

    /// Check if this role is the admin role.
    pub fn is_admin(&self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = counsel_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ROLE_ADMIN" | "ADMIN" => Ok(Self::Admin),
            "ROLE_FACULTY" | "FACULTY" => Ok(Self::Faculty),
            "ROLE_STUDENT" | "STUDENT" => Ok(Self::Student),
            _ => Err(counsel_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: admin, faculty, student"
            ))),
        }
    }
}
