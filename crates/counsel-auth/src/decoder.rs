//! Bearer-token claims extraction.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use counsel_core::error::AppError;

use super::claims::Claims;

/// Decodes the claims payload of a bearer token.
///
/// A single decode attempt, no retry. Signature validation is disabled:
/// the client holds no signing secret and the backend rejects tampered
/// tokens with 401 on the next request regardless. `exp` is likewise
/// not enforced here — the backend's 401 already forces re-login.
pub fn decode_claims(token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.required_spec_claims.clear();

    let token_data = decode::<Claims>(token, &DecodingKey::from_secret(&[]), &validation)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::InvalidToken => {
                AppError::authentication("Malformed bearer token")
            }
            _ => AppError::authentication(format!("Token decode failed: {e}")),
        })?;

    Ok(token_data.claims)
}
