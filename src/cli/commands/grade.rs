use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::enrollment::{DEFAULT_TERM, DEFAULT_YEAR};
use crate::models::GradeSubmission;
use crate::session::Section;
use crate::types::{EntityId, Term};

#[derive(Subcommand)]
pub enum GradeCommands {
    #[command(about = "Submit a grade for a student in a course")]
    Submit {
        #[arg(help = "Student ID")]
        student_id: EntityId,
        #[arg(help = "Course ID")]
        course_id: EntityId,
        #[arg(help = "Grade, e.g. A or B+")]
        grade: String,
        #[arg(long, default_value_t = DEFAULT_TERM)]
        term: Term,
        #[arg(long, default_value_t = DEFAULT_YEAR)]
        year: i32,
    },
}

pub async fn handle(cmd: GradeCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Grades)?;

    match cmd {
        GradeCommands::Submit { student_id, course_id, grade, term, year } => {
            let submission = GradeSubmission {
                student_id,
                course_id,
                year,
                term,
                grade,
            };
            let result = ctx.api().faculty.submit_grade(&submission, token).await?;
            output_success(output_format, "Grade submitted", Some(json!({ "grade": result })))
        }
    }
}
