use std::path::PathBuf;

use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_collection, output_record, output_success, read_json_input};
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::session::Section;
use crate::types::EntityId;

#[derive(Subcommand)]
pub enum ClassroomCommands {
    #[command(about = "List classrooms")]
    List,

    #[command(about = "Create a classroom from JSON (stdin or --file)")]
    Create {
        #[arg(long)]
        file: Option<PathBuf>,
    },

    #[command(about = "Start a student's membership in a classroom")]
    Start {
        #[arg(help = "Classroom ID")]
        classroom_id: EntityId,
        #[arg(help = "Student ID")]
        student_id: EntityId,
    },

    #[command(about = "End a classroom membership")]
    End {
        #[arg(help = "Membership ID")]
        membership_id: EntityId,
    },

    #[command(about = "Assign a classroom from JSON (stdin or --file)")]
    Assign {
        #[arg(long)]
        file: Option<PathBuf>,
    },
}

pub async fn handle(cmd: ClassroomCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Classrooms)?;
    let registrar = &ctx.api().registrar;

    match cmd {
        ClassroomCommands::List => {
            let classrooms = registrar.list_classrooms(token).await?;
            output_collection(output_format, "classrooms", &classrooms, "No classrooms found", |c| {
                format!("{:>6}  {}", c.id.map(|id| id.to_string()).unwrap_or_default(), c.name)
            })
        }
        ClassroomCommands::Create { file } => {
            let body = read_json_input(file.as_deref())?;
            let created = registrar.create_classroom(&body, token).await?;
            output_success(output_format, "Classroom created", Some(json!({ "classroom": created })))
        }
        ClassroomCommands::Start { classroom_id, student_id } => {
            let membership = registrar
                .start_classroom_membership(classroom_id, student_id, token)
                .await?;
            output_record(output_format, &membership)
        }
        ClassroomCommands::End { membership_id } => {
            let ended = registrar.end_classroom_membership(membership_id, token).await?;
            output_success(output_format, "Membership ended", Some(json!({ "membership": ended })))
        }
        ClassroomCommands::Assign { file } => {
            let body = read_json_input(file.as_deref())?;
            let assigned = registrar.assign_classroom(&body, token).await?;
            output_success(output_format, "Classroom assigned", Some(json!({ "assignment": assigned })))
        }
    }
}
