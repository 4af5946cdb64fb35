//! Student CLI commands: browse, join, and cancel counseling sessions.

use std::sync::Arc;

use clap::{Args, Subcommand};

use counsel_core::config::AppConfig;
use counsel_core::error::AppError;
use counsel_core::types::{CounselId, StudentId};
use counsel_entity::user::UserRole;
use counsel_service::RegistrationService;

use crate::output::{self, OutputFormat};

use super::CounselRow;

/// Arguments for student commands
#[derive(Debug, Args)]
pub struct StudentArgs {
    /// Student subcommand
    #[command(subcommand)]
    pub command: StudentCommand,
}

/// Student subcommands
#[derive(Debug, Subcommand)]
pub enum StudentCommand {
    /// List sessions open for registration
    Available {
        /// Filter by title, description, or faculty name
        #[arg(long)]
        search: Option<String>,
    },
    /// Register into a session
    Join {
        /// Session ID
        id: i64,
    },
    /// Cancel your registration for a session
    Cancel {
        /// Session ID
        id: i64,
    },
    /// List sessions you are registered into
    Mine,
    /// Your registration statistics
    Stats,
}

/// Execute student commands
pub async fn execute(
    args: &StudentArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let claims = super::authorize(config, &[UserRole::Student])?;
    let api = Arc::new(super::build_api(config));
    let mut service = RegistrationService::new(api, StudentId::new(claims.id));

    match &args.command {
        StudentCommand::Available { search } => {
            service.refresh().await?;
            let counsels = match search {
                Some(term) => service.store().search(term),
                None => service.store().counsels().iter().collect(),
            };
            let rows: Vec<CounselRow> = counsels
                .iter()
                .map(|c| {
                    let mut row = CounselRow::from(*c);
                    if service.store().is_joined(c.id) {
                        row.status = format!("{} (joined)", row.status);
                    }
                    row
                })
                .collect();
            output::print_list(&rows, format);
        }
        StudentCommand::Join { id } => {
            service.refresh().await?;
            service.join(CounselId::new(*id)).await?;
            output::print_success(&format!("Joined session {}", id));
        }
        StudentCommand::Cancel { id } => {
            service.refresh().await?;
            service.cancel(CounselId::new(*id)).await?;
            output::print_success(&format!("Cancelled registration for session {}", id));
        }
        StudentCommand::Mine => {
            let mine = service.my_counsels().await?;
            let rows: Vec<CounselRow> = mine.iter().map(CounselRow::from).collect();
            output::print_list(&rows, format);
        }
        StudentCommand::Stats => {
            let stats = service.stats().await?;
            match format {
                OutputFormat::Json => output::print_item(&stats, format),
                OutputFormat::Table => {
                    output::print_kv("Registered", &stats.total.to_string());
                    output::print_kv("Completed", &stats.completed.to_string());
                    output::print_kv("Upcoming", &stats.upcoming.to_string());
                }
            }
        }
    }

    Ok(())
}
