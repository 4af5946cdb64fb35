//! Sign-in, sign-out, and identity commands.

use clap::Args;

use counsel_auth::{AccessGate, decode_claims};
use counsel_client::dto::request::LoginRequest;
use counsel_core::config::AppConfig;
use counsel_core::error::AppError;

use crate::output::{self, OutputFormat};

/// Arguments for the login command
#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Username to sign in as
    pub username: String,
}

/// Sign in: prompt for the password, call the backend, cache the token.
pub async fn login(args: &LoginArgs, config: &AppConfig) -> Result<(), AppError> {
    let password = dialoguer::Password::new()
        .with_prompt("Password")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

    let api = super::build_api(config);
    let token = api
        .login(&LoginRequest {
            username: args.username.clone(),
            password,
        })
        .await?;

    match decode_claims(&token) {
        Ok(claims) => {
            let roles = claims
                .roles
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            output::print_success(&format!("Signed in as {} ({roles})", claims.username()));
        }
        // The backend accepted the credentials; an opaque token is its
        // problem to reject later.
        Err(_) => output::print_success(&format!("Signed in as {}", args.username)),
    }
    Ok(())
}

/// Sign out: drop the cached token.
pub fn logout(config: &AppConfig) -> Result<(), AppError> {
    super::token_cache(config).clear()?;
    output::print_success("Signed out");
    Ok(())
}

/// Show the identity behind the cached token.
pub fn whoami(config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    let tokens = super::token_cache(config);
    let claims = AccessGate::any_authenticated().authorize(tokens.load().as_deref())?;

    match format {
        OutputFormat::Json => output::print_item(&claims, format),
        OutputFormat::Table => {
            output::print_kv("Username", claims.username());
            output::print_kv("User id", &claims.id.to_string());
            output::print_kv(
                "Roles",
                &claims
                    .roles
                    .iter()
                    .map(String::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            if let Some(expires_at) = claims.expires_at() {
                let state = if claims.is_expired() { " (expired)" } else { "" };
                output::print_kv("Expires", &format!("{expires_at}{state}"));
            }
        }
    }
    Ok(())
}
