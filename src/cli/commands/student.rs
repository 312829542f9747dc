use std::path::PathBuf;

use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_collection, output_record, output_success, read_json_input};
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::filter::{RecordFilter, StudentFilter};
use crate::models::{Student, StudentStatus};
use crate::session::Section;
use crate::types::{EntityId, Selector};

#[derive(Subcommand)]
pub enum StudentCommands {
    #[command(about = "List students")]
    List {
        #[arg(long, help = "Search name, email and student number")]
        search: Option<String>,
        #[arg(long, default_value = "ALL", help = "ALL or one of ACTIVE, INACTIVE, GRADUATED, SUSPENDED, WITHDRAWN")]
        status: Selector<StudentStatus>,
    },

    #[command(about = "Show one student")]
    Get {
        #[arg(help = "Student ID")]
        id: EntityId,
    },

    #[command(about = "Create a student from JSON (stdin or --file)")]
    Create {
        #[arg(long, help = "Read the student JSON from this file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Update a student from JSON (stdin or --file)")]
    Update {
        #[arg(help = "Student ID")]
        id: EntityId,
        #[arg(long, help = "Read the student JSON from this file")]
        file: Option<PathBuf>,
    },

    #[command(about = "Delete a student")]
    Delete {
        #[arg(help = "Student ID")]
        id: EntityId,
        #[arg(long, help = "Delete permanently instead of deactivating")]
        hard: bool,
    },
}

pub async fn handle(cmd: StudentCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Students)?;
    let registrar = &ctx.api().registrar;

    match cmd {
        StudentCommands::List { search, status } => {
            let students = registrar.list_students(token).await?;
            let filter = StudentFilter::new(search.unwrap_or_default(), status);
            let matched: Vec<Student> = filter.apply(&students).into_iter().cloned().collect();
            output_collection(output_format, "students", &matched, "No students found", |s| {
                format!(
                    "{:>6}  {:<10} {:<30} {:<30} {}",
                    s.id.map(|id| id.to_string()).unwrap_or_default(),
                    s.student_number,
                    s.full_name(),
                    s.email,
                    s.status.map(|st| st.as_str()).unwrap_or("-"),
                )
            })
        }
        StudentCommands::Get { id } => {
            let student = registrar.get_student(id, token).await?;
            output_record(output_format, &student)
        }
        StudentCommands::Create { file } => {
            let student: Student = serde_json::from_value(read_json_input(file.as_deref())?)?;
            student.validate()?;
            let created = registrar.create_student(&student, token).await?;
            output_success(output_format, "Student created successfully!", Some(json!({ "student": created })))
        }
        StudentCommands::Update { id, file } => {
            let student: Student = serde_json::from_value(read_json_input(file.as_deref())?)?;
            student.validate()?;
            let updated = registrar.update_student(id, &student, token).await?;
            output_success(output_format, "Student updated successfully!", Some(json!({ "student": updated })))
        }
        StudentCommands::Delete { id, hard } => {
            let message = if hard {
                registrar.hard_delete_student(id, token).await?;
                "Student permanently deleted successfully!"
            } else {
                registrar.delete_student(id, token).await?;
                "Student deleted successfully!"
            };
            output_success(output_format, message, Some(json!({ "id": id, "hard": hard })))
        }
    }
}
