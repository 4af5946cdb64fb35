//! Role-based access gate for protected commands.

use counsel_core::error::AppError;
use counsel_entity::user::UserRole;

use super::claims::Claims;
use super::decoder::decode_claims;

/// Outcome of evaluating an [`AccessGate`] against a stored token.
#[derive(Debug, Clone)]
pub enum AccessDecision {
    /// Token present, decodable, and role-matched (or no roles required).
    Granted(Claims),
    /// No usable token: the user must sign in first.
    SignInRequired,
    /// A valid token whose roles do not intersect the required set.
    Denied {
        /// Roles the token actually carries.
        have: Vec<UserRole>,
    },
}

/// Gates a command on a required set of roles.
///
/// One decode attempt per evaluation, no refresh. Mirrors the route
/// guard of the original client: missing token and undecodable token
/// both route to sign-in, a decodable token with the wrong roles is
/// denied outright.
#[derive(Debug, Clone)]
pub struct AccessGate {
    /// Roles that grant access; empty means any authenticated user.
    required: Vec<UserRole>,
}

impl AccessGate {
    /// Creates a gate requiring any of the given roles.
    pub fn new(required: &[UserRole]) -> Self {
        Self {
            required: required.to_vec(),
        }
    }

    /// Creates a gate that admits any authenticated user.
    pub fn any_authenticated() -> Self {
        Self { required: Vec::new() }
    }

    /// Evaluates the gate against an optional stored token.
    pub fn evaluate(&self, token: Option<&str>) -> AccessDecision {
        let Some(token) = token else {
            return AccessDecision::SignInRequired;
        };

        let claims = match decode_claims(token) {
            Ok(claims) => claims,
            Err(e) => {
                tracing::debug!("token rejected by gate: {e}");
                return AccessDecision::SignInRequired;
            }
        };

        if self.required.is_empty() {
            return AccessDecision::Granted(claims);
        }

        let have = claims.roles();
        if have.iter().any(|role| self.required.contains(role)) {
            AccessDecision::Granted(claims)
        } else {
            AccessDecision::Denied { have }
        }
    }

    /// Evaluates the gate and maps denial outcomes to errors.
    ///
    /// Convenience for call sites that want `?` instead of a match.
    pub fn authorize(&self, token: Option<&str>) -> Result<Claims, AppError> {
        match self.evaluate(token) {
            AccessDecision::Granted(claims) => Ok(claims),
            AccessDecision::SignInRequired => Err(AppError::authentication(
                "Not signed in. Run `counsel login <username>` first",
            )),
            AccessDecision::Denied { have } => {
                let held = if have.is_empty() {
                    "no recognized roles".to_string()
                } else {
                    have.iter()
                        .map(UserRole::as_str)
                        .collect::<Vec<_>>()
                        .join(", ")
                };
                Err(AppError::authorization(format!(
                    "This command requires {} (you hold {held})",
                    self.required
                        .iter()
                        .map(UserRole::as_str)
                        .collect::<Vec<_>>()
                        .join(" or "),
                )))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

    fn token_with_roles(roles: &[&str]) -> String {
        let claims = Claims {
            id: 7,
            sub: "user7".into(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
            exp: None,
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(b"secret"),
        )
        .expect("encode")
    }

    #[test]
    fn test_no_token_requires_sign_in() {
        let gate = AccessGate::new(&[UserRole::Admin]);
        assert!(matches!(gate.evaluate(None), AccessDecision::SignInRequired));
    }

    #[test]
    fn test_malformed_token_requires_sign_in() {
        let gate = AccessGate::new(&[UserRole::Admin]);
        assert!(matches!(
            gate.evaluate(Some("garbage")),
            AccessDecision::SignInRequired
        ));
    }

    #[test]
    fn test_student_denied_admin_gate() {
        let gate = AccessGate::new(&[UserRole::Admin]);
        let token = token_with_roles(&["ROLE_STUDENT"]);
        match gate.evaluate(Some(&token)) {
            AccessDecision::Denied { have } => assert_eq!(have, vec![UserRole::Student]),
            other => panic!("expected denial, got {other:?}"),
        }
        assert!(gate.authorize(Some(&token)).is_err());
    }

    #[test]
    fn test_matching_role_granted() {
        let gate = AccessGate::new(&[UserRole::Faculty]);
        let token = token_with_roles(&["ROLE_FACULTY"]);
        assert!(matches!(
            gate.evaluate(Some(&token)),
            AccessDecision::Granted(_)
        ));
    }

    #[test]
    fn test_empty_required_set_admits_any_valid_token() {
        let gate = AccessGate::any_authenticated();
        let token = token_with_roles(&["ROLE_STUDENT"]);
        assert!(matches!(
            gate.evaluate(Some(&token)),
            AccessDecision::Granted(_)
        ));
    }
}
