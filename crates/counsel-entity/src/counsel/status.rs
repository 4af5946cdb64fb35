//! Counseling session status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a counseling session.
///
/// The backend drives every transition; the client only reads the
/// status to decide which actions to offer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CounselStatus {
    /// Created and waiting for its scheduled start.
    Pending,
    /// Currently in progress.
    Active,
    /// Held and finished.
    Completed,
    /// Called off by the faculty member.
    Cancelled,
}

impl CounselStatus {
    /// Whether students may still register into a session in this state.
    pub fn is_joinable(&self) -> bool {
        matches!(self, Self::Pending | Self::Active)
    }

    /// Return the status in its wire form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for CounselStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CounselStatus {
    type Err = counsel_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PENDING" => Ok(Self::Pending),
            "ACTIVE" => Ok(Self::Active),
            "COMPLETED" => Ok(Self::Completed),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(counsel_core::AppError::validation(format!(
                "Invalid counsel status: '{s}'. Expected one of: PENDING, ACTIVE, COMPLETED, CANCELLED"
            ))),
        }
    }
}
