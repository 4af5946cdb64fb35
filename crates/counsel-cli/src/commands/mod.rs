//! CLI command definitions and dispatch.

pub mod admin;
pub mod auth;
pub mod faculty;
pub mod student;

use chrono::NaiveDateTime;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use counsel_auth::{AccessGate, Claims, TokenCache};
use counsel_client::HttpCounselApi;
use counsel_core::config::AppConfig;
use counsel_core::error::AppError;
use counsel_entity::counsel::Counsel;
use counsel_entity::user::UserRole;

use crate::output::OutputFormat;

/// CounselHub — counseling-session management client
#[derive(Debug, Parser)]
#[command(name = "counsel", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Sign in and cache the bearer token
    Login(auth::LoginArgs),
    /// Discard the cached bearer token
    Logout,
    /// Show who the cached token belongs to
    Whoami,
    /// Student commands: browse and register into sessions
    Student(student::StudentArgs),
    /// Faculty commands: create and manage your sessions
    Faculty(faculty::FacultyArgs),
    /// Admin commands: accounts, departments, dashboard
    Admin(admin::AdminArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self, config: &AppConfig) -> Result<(), AppError> {
        match &self.command {
            Commands::Login(args) => auth::login(args, config).await,
            Commands::Logout => auth::logout(config),
            Commands::Whoami => auth::whoami(config, self.format),
            Commands::Student(args) => student::execute(args, config, self.format).await,
            Commands::Faculty(args) => faculty::execute(args, config, self.format).await,
            Commands::Admin(args) => admin::execute(args, config, self.format).await,
        }
    }
}

/// Helper: token cache at the configured location
pub(crate) fn token_cache(config: &AppConfig) -> TokenCache {
    TokenCache::from_config(&config.auth)
}

/// Helper: HTTP API client wired to the token cache
pub(crate) fn build_api(config: &AppConfig) -> HttpCounselApi {
    HttpCounselApi::new(&config.api, token_cache(config))
}

/// Helper: run the access gate for a command requiring one of `roles`
pub(crate) fn authorize(config: &AppConfig, roles: &[UserRole]) -> Result<Claims, AppError> {
    let tokens = token_cache(config);
    AccessGate::new(roles).authorize(tokens.load().as_deref())
}

/// Helper: parse a user-supplied session time (`2026-03-02T10:00`,
/// seconds optional)
pub(crate) fn parse_datetime(raw: &str) -> Result<NaiveDateTime, AppError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .map_err(|_| {
            AppError::validation(format!(
                "Invalid time '{raw}'. Expected e.g. 2026-03-02T10:00"
            ))
        })
}

/// Session display row shared by the student and faculty listings
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct CounselRow {
    /// Session ID
    pub id: String,
    /// Title
    pub title: String,
    /// Faculty
    pub faculty: String,
    /// Start
    pub start: String,
    /// Seats
    pub seats: String,
    /// Status
    pub status: String,
}

impl From<&Counsel> for CounselRow {
    fn from(counsel: &Counsel) -> Self {
        Self {
            id: counsel.id.to_string(),
            title: counsel.title.clone(),
            faculty: counsel
                .faculty_name
                .clone()
                .unwrap_or_else(|| "Faculty".to_string()),
            start: counsel.start_time.format("%Y-%m-%d %H:%M").to_string(),
            seats: format!(
                "{}/{}",
                counsel.current_participants, counsel.max_participants
            ),
            status: counsel.status.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_accepts_both_precisions() {
        assert!(parse_datetime("2026-03-02T10:00").is_ok());
        assert!(parse_datetime("2026-03-02T10:00:30").is_ok());
        assert!(parse_datetime("yesterday").is_err());
    }
}
