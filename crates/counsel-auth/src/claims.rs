//! Claims payload embedded in the backend's bearer tokens.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use counsel_entity::user::UserRole;

/// Claims the backend embeds in every bearer token.
///
/// Read-only on the client: decoded once per check, cached only as the
/// raw token string, destroyed on logout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Numeric account id — doubles as the student or faculty id in
    /// the registration and scheduling endpoints.
    pub id: i64,
    /// Subject — the username.
    pub sub: String,
    /// Role names as issued (`ROLE_ADMIN`, `ROLE_FACULTY`, ...).
    #[serde(default)]
    pub roles: Vec<String>,
    /// Expiration timestamp (seconds since epoch), when present.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl Claims {
    /// Returns the username from the subject claim.
    pub fn username(&self) -> &str {
        &self.sub
    }

    /// Roles parsed into the known set; unrecognized role names are
    /// skipped — they can never satisfy a gate either way.
    pub fn roles(&self) -> Vec<UserRole> {
        self.roles.iter().filter_map(|r| r.parse().ok()).collect()
    }

    /// Checks whether the token carries the given role.
    pub fn has_role(&self, role: UserRole) -> bool {
        self.roles().contains(&role)
    }

    /// Returns the expiration as a `DateTime<Utc>`, when the claim is set.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.exp.and_then(|exp| DateTime::from_timestamp(exp, 0))
    }

    /// Checks whether this token has expired (false when no `exp` claim).
    pub fn is_expired(&self) -> bool {
        match self.exp {
            Some(exp) => Utc::now().timestamp() >= exp,
            None => false,
        }
    }
}
