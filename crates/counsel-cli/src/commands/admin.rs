//! Admin CLI commands: dashboard, accounts, and departments.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use counsel_client::AdminApi;
use counsel_client::dto::request::{
    CreateDepartmentRequest, CreateFacultyRequest, CreateStudentRequest, UpdateStudentRequest,
};
use counsel_core::config::AppConfig;
use counsel_core::error::AppError;
use counsel_core::types::{DepartmentId, FacultyId, SearchQuery, StudentId};
use counsel_entity::user::{Faculty, Student, UserRole};

use crate::output::{self, OutputFormat};

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Dashboard overview counters
    Stats,
    /// Recent account and session activity
    Activities {
        /// Number of entries to fetch
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Student account management
    Student(StudentAdminArgs),
    /// Activate or deactivate a user account
    SetStatus {
        /// User ID (student or faculty)
        id: i64,
        /// New status, e.g. active or inactive
        status: String,
    },
    /// Faculty account management
    Faculty(FacultyAdminArgs),
    /// Department management
    Department(DepartmentArgs),
}

/// Arguments for student account management
#[derive(Debug, Args)]
pub struct StudentAdminArgs {
    /// Student account subcommand
    #[command(subcommand)]
    pub command: StudentAdminCommand,
}

/// Student account subcommands
#[derive(Debug, Subcommand)]
pub enum StudentAdminCommand {
    /// List all student accounts
    List,
    /// Show one student account
    Show {
        /// Student ID
        id: i64,
    },
    /// Create a student account (password is prompted)
    Add {
        /// Username
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Institutional student number
        #[arg(long)]
        student_number: String,
        /// Grade level
        #[arg(long)]
        grade_level: String,
        /// Department name
        #[arg(long)]
        dept: String,
    },
    /// Update a student account's profile fields
    Update {
        /// Student ID
        id: i64,
        /// New display name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New grade level
        #[arg(long)]
        grade_level: Option<String>,
        /// New department name
        #[arg(long)]
        dept: Option<String>,
    },
    /// Delete a student account
    Remove {
        /// Student ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for faculty account management
#[derive(Debug, Args)]
pub struct FacultyAdminArgs {
    /// Faculty account subcommand
    #[command(subcommand)]
    pub command: FacultyAdminCommand,
}

/// Faculty account subcommands
#[derive(Debug, Subcommand)]
pub enum FacultyAdminCommand {
    /// List faculty accounts, searchable and paginated
    List {
        /// Search term
        #[arg(long)]
        search: Option<String>,
        /// Page number (1-based)
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Items per page
        #[arg(long, default_value_t = 10)]
        limit: u64,
    },
    /// Create a faculty account (password is prompted)
    Add {
        /// Username
        #[arg(long)]
        username: String,
        /// Email address
        #[arg(long)]
        email: String,
        /// Academic title
        #[arg(long, default_value = "")]
        academic_title: String,
        /// Contact phone number
        #[arg(long, default_value = "")]
        contact_number: String,
        /// Department name
        #[arg(long)]
        department: String,
    },
    /// Delete a faculty account
    Remove {
        /// Faculty ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
}

/// Arguments for department management
#[derive(Debug, Args)]
pub struct DepartmentArgs {
    /// Department subcommand
    #[command(subcommand)]
    pub command: DepartmentCommand,
}

/// Department subcommands
#[derive(Debug, Subcommand)]
pub enum DepartmentCommand {
    /// List all departments
    List,
    /// Create a department
    Add {
        /// Department name
        name: String,
    },
    /// Delete a department
    Remove {
        /// Department ID
        id: i64,
        /// Skip confirmation
        #[arg(long)]
        force: bool,
    },
    /// List the faculty members of a department
    Faculties {
        /// Department ID
        id: i64,
    },
}

/// Student account display row
#[derive(Debug, Serialize, Tabled)]
struct StudentRow {
    /// ID
    id: String,
    /// Name
    name: String,
    /// Student number
    student_number: String,
    /// Email
    email: String,
    /// Department
    department: String,
}

impl From<&Student> for StudentRow {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id.to_string(),
            name: student.name.clone().unwrap_or_default(),
            student_number: student.student_number.clone().unwrap_or_default(),
            email: student.email.clone().unwrap_or_default(),
            department: student.department.clone().unwrap_or_default(),
        }
    }
}

/// Faculty account display row
#[derive(Debug, Serialize, Tabled)]
struct FacultyRow {
    /// ID
    id: String,
    /// Username
    username: String,
    /// Title
    title: String,
    /// Email
    email: String,
    /// Department
    department: String,
}

impl From<&Faculty> for FacultyRow {
    fn from(faculty: &Faculty) -> Self {
        Self {
            id: faculty.id.to_string(),
            username: faculty.username.clone().unwrap_or_default(),
            title: faculty.academic_title.clone().unwrap_or_default(),
            email: faculty.email.clone().unwrap_or_default(),
            department: faculty.department.clone().unwrap_or_default(),
        }
    }
}

/// Department display row
#[derive(Debug, Serialize, Tabled)]
struct DepartmentRow {
    /// ID
    id: String,
    /// Name
    name: String,
}

/// Activity feed display row
#[derive(Debug, Serialize, Tabled)]
struct ActivityRow {
    /// Kind
    kind: String,
    /// Title
    title: String,
    /// When
    when: String,
}

/// Execute admin commands
pub async fn execute(
    args: &AdminArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    super::authorize(config, &[UserRole::Admin])?;
    let api = super::build_api(config);

    match &args.command {
        AdminCommand::Stats => {
            let stats = api.dashboard_stats().await?;
            match format {
                OutputFormat::Json => output::print_item(&stats, format),
                OutputFormat::Table => {
                    output::print_kv("Students", &stats.total_students.to_string());
                    output::print_kv("Faculty", &stats.total_faculty.to_string());
                    output::print_kv("Sessions", &stats.total_sessions.to_string());
                }
            }
        }
        AdminCommand::Activities { limit } => {
            let activities = api.recent_activities(*limit).await?;
            let rows: Vec<ActivityRow> = activities
                .iter()
                .map(|a| ActivityRow {
                    kind: a.kind.clone(),
                    title: a.title.clone(),
                    when: a
                        .timestamp
                        .map(|at| at.format("%Y-%m-%d %H:%M").to_string())
                        .unwrap_or_default(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        AdminCommand::Student(student_args) => {
            execute_student(student_args, &api, format).await?;
        }
        AdminCommand::SetStatus { id, status } => {
            api.update_user_status(*id, status).await?;
            output::print_success(&format!("Set user {} status to {}", id, status));
        }
        AdminCommand::Faculty(faculty_args) => {
            execute_faculty(faculty_args, &api, format).await?;
        }
        AdminCommand::Department(department_args) => {
            execute_department(department_args, &api, format).await?;
        }
    }

    Ok(())
}

/// Execute student account subcommands
async fn execute_student(
    args: &StudentAdminArgs,
    api: &impl AdminApi,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        StudentAdminCommand::List => {
            let students = api.all_students().await?;
            let rows: Vec<StudentRow> = students.iter().map(StudentRow::from).collect();
            output::print_list(&rows, format);
        }
        StudentAdminCommand::Show { id } => {
            let student = api.student(StudentId::new(*id)).await?;
            output::print_item(&student, format);
        }
        StudentAdminCommand::Add {
            username,
            email,
            student_number,
            grade_level,
            dept,
        } => {
            let password = prompt_new_password()?;
            let created = api
                .create_student(&CreateStudentRequest {
                    username: username.clone(),
                    email: email.clone(),
                    password,
                    student_number: student_number.clone(),
                    grade_level: grade_level.clone(),
                    dept: dept.clone(),
                    role: CreateStudentRequest::ROLE.to_string(),
                })
                .await?;
            output::print_success(&format!("Created student {} ({})", username, created.id));
        }
        StudentAdminCommand::Update {
            id,
            name,
            email,
            grade_level,
            dept,
        } => {
            let updated = api
                .update_student(
                    StudentId::new(*id),
                    &UpdateStudentRequest {
                        name: name.clone(),
                        email: email.clone(),
                        grade_level: grade_level.clone(),
                        dept: dept.clone(),
                    },
                )
                .await?;
            output::print_success(&format!("Updated student {}", updated.id));
        }
        StudentAdminCommand::Remove { id, force } => {
            if !confirm_removal(&format!("Delete student {}?", id), *force)? {
                return Ok(());
            }
            api.delete_student(StudentId::new(*id)).await?;
            output::print_success(&format!("Deleted student {}", id));
        }
    }
    Ok(())
}

/// Execute faculty account subcommands
async fn execute_faculty(
    args: &FacultyAdminArgs,
    api: &impl AdminApi,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        FacultyAdminCommand::List {
            search,
            page,
            limit,
        } => {
            let faculty = api
                .search_faculty(&SearchQuery::new(search.clone(), *page, *limit))
                .await?;
            let rows: Vec<FacultyRow> = faculty.iter().map(FacultyRow::from).collect();
            output::print_list(&rows, format);
        }
        FacultyAdminCommand::Add {
            username,
            email,
            academic_title,
            contact_number,
            department,
        } => {
            let password = prompt_new_password()?;
            let created = api
                .create_faculty(&CreateFacultyRequest {
                    username: username.clone(),
                    email: email.clone(),
                    password,
                    academic_title: academic_title.clone(),
                    contact_number: contact_number.clone(),
                    department: department.clone(),
                    role: CreateFacultyRequest::ROLE.to_string(),
                })
                .await?;
            output::print_success(&format!("Created faculty {} ({})", username, created.id));
        }
        FacultyAdminCommand::Remove { id, force } => {
            if !confirm_removal(&format!("Delete faculty member {}?", id), *force)? {
                return Ok(());
            }
            api.delete_faculty(FacultyId::new(*id)).await?;
            output::print_success(&format!("Deleted faculty member {}", id));
        }
    }
    Ok(())
}

/// Execute department subcommands
async fn execute_department(
    args: &DepartmentArgs,
    api: &impl AdminApi,
    format: OutputFormat,
) -> Result<(), AppError> {
    match &args.command {
        DepartmentCommand::List => {
            let departments = api.departments().await?;
            let rows: Vec<DepartmentRow> = departments
                .iter()
                .map(|d| DepartmentRow {
                    id: d.id.to_string(),
                    name: d.name.clone(),
                })
                .collect();
            output::print_list(&rows, format);
        }
        DepartmentCommand::Add { name } => {
            let created = api
                .create_department(&CreateDepartmentRequest {
                    deptname: name.clone(),
                })
                .await?;
            output::print_success(&format!("Created department '{}' ({})", name, created.id));
        }
        DepartmentCommand::Remove { id, force } => {
            if !confirm_removal(&format!("Delete department {}?", id), *force)? {
                return Ok(());
            }
            api.delete_department(DepartmentId::new(*id)).await?;
            output::print_success(&format!("Deleted department {}", id));
        }
        DepartmentCommand::Faculties { id } => {
            let faculty = api.department_faculty(DepartmentId::new(*id)).await?;
            let rows: Vec<FacultyRow> = faculty.iter().map(FacultyRow::from).collect();
            output::print_list(&rows, format);
        }
    }
    Ok(())
}

/// Prompt for an initial account password, with confirmation.
fn prompt_new_password() -> Result<String, AppError> {
    dialoguer::Password::new()
        .with_prompt("Initial password")
        .with_confirmation("Confirm password", "Passwords do not match")
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))
}

/// Confirm a destructive action unless `--force` was given.
fn confirm_removal(prompt: &str, force: bool) -> Result<bool, AppError> {
    if force {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| AppError::internal(format!("Input error: {}", e)))?;
    if !confirmed {
        println!("Cancelled.");
    }
    Ok(confirmed)
}
