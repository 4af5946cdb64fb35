//! Faculty CLI commands: create, inspect, and delete counseling sessions.

use std::sync::Arc;

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use counsel_core::config::AppConfig;
use counsel_core::error::AppError;
use counsel_core::types::{CounselId, FacultyId};
use counsel_entity::user::UserRole;
use counsel_service::{CounselDraft, ScheduleService};

use crate::output::{self, OutputFormat};

use super::CounselRow;

/// Arguments for faculty commands
#[derive(Debug, Args)]
pub struct FacultyArgs {
    /// Faculty subcommand
    #[command(subcommand)]
    pub command: FacultyCommand,
}

/// Faculty subcommands
#[derive(Debug, Subcommand)]
pub enum FacultyCommand {
    /// List your sessions
    List,
    /// Create a session
    Create {
        /// Session title
        #[arg(long)]
        title: String,
        /// Session description
        #[arg(long)]
        description: String,
        /// Start time, e.g. 2026-03-02T10:00
        #[arg(long)]
        start: String,
        /// End time
        #[arg(long)]
        end: Option<String>,
        /// Maximum participants
        #[arg(long, default_value_t = 10)]
        max: u32,
    },
    /// Delete a session; registrations are removed with it
    Delete {
        /// Session ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// Show the participant roster of a session
    Participants {
        /// Session ID
        id: i64,
    },
    /// Your session statistics
    Stats,
}

/// Participant display row
#[derive(Debug, Serialize, Tabled)]
struct ParticipantRow {
    /// Registration ID
    id: String,
    /// Name
    name: String,
    /// Student number
    student_number: String,
    /// Joined
    joined: String,
}

/// Execute faculty commands
pub async fn execute(
    args: &FacultyArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let claims = super::authorize(config, &[UserRole::Faculty])?;
    let api = Arc::new(super::build_api(config));
    let mut service = ScheduleService::new(api, FacultyId::new(claims.id));

    match &args.command {
        FacultyCommand::List => {
            service.refresh().await?;
            let rows: Vec<CounselRow> =
                service.store().counsels().iter().map(CounselRow::from).collect();
            output::print_list(&rows, format);
        }
        FacultyCommand::Create {
            title,
            description,
            start,
            end,
            max,
        } => {
            let draft = CounselDraft {
                title: title.clone(),
                description: description.clone(),
                start_time: Some(super::parse_datetime(start)?),
                end_time: end.as_deref().map(super::parse_datetime).transpose()?,
                max_participants: *max,
            };
            let created = service.create(&draft).await?;
            output::print_success(&format!(
                "Created session {} ('{}')",
                created.id, created.title
            ));
        }
        FacultyCommand::Delete { id, force } => {
            if !force {
                let confirm = dialoguer::Confirm::new()
                    .with_prompt(format!(
                        "Delete session {} and all its registrations?",
                        id
                    ))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            service.refresh().await?;
            service.delete(CounselId::new(*id)).await?;
            output::print_success(&format!("Deleted session {}", id));
        }
        FacultyCommand::Participants { id } => {
            let roster = service.participants(CounselId::new(*id)).await?;
            let rows: Vec<ParticipantRow> = roster
                .iter()
                .map(|p| ParticipantRow {
                    id: p.id.to_string(),
                    name: p.name.clone(),
                    student_number: p.student_number.clone(),
                    joined: p
                        .joined_at
                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        FacultyCommand::Stats => {
            service.refresh().await?;
            let stats = service.stats();
            match format {
                OutputFormat::Json => output::print_item(&stats, format),
                OutputFormat::Table => {
                    output::print_kv("Total sessions", &stats.total.to_string());
                    output::print_kv("Completed", &stats.completed.to_string());
                    output::print_kv("Upcoming", &stats.upcoming.to_string());
                }
            }
        }
    }

    Ok(())
}
