use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_collection, output_success};
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::filter::{CourseFilter, RecordFilter};
use crate::models::course::DEFAULT_CREDIT_HOURS;
use crate::models::{Course, CoursePatch};
use crate::session::Section;
use crate::types::EntityId;

#[derive(Subcommand)]
pub enum CourseCommands {
    #[command(about = "List courses")]
    List {
        #[arg(long, help = "Search course code and title")]
        search: Option<String>,
    },

    #[command(about = "Create a course")]
    Create {
        #[arg(help = "Course code, e.g. CS401")]
        code: String,
        #[arg(help = "Course title")]
        title: String,
        #[arg(long, default_value_t = DEFAULT_CREDIT_HOURS, help = "Credit hours (1-12)")]
        credit_hours: i32,
    },

    #[command(about = "Update the given fields of a course")]
    Update {
        #[arg(help = "Course ID")]
        id: EntityId,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        credit_hours: Option<i32>,
    },

    #[command(about = "Delete a course")]
    Delete {
        #[arg(help = "Course ID")]
        id: EntityId,
    },
}

pub async fn handle(cmd: CourseCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Courses)?;
    let registrar = &ctx.api().registrar;

    match cmd {
        CourseCommands::List { search } => {
            let courses = registrar.list_courses(token).await?;
            let filter = CourseFilter::new(search.unwrap_or_default());
            let matched: Vec<Course> = filter.apply(&courses).into_iter().cloned().collect();
            output_collection(output_format, "courses", &matched, "No courses found", |c| {
                format!(
                    "{:>6}  {:<10} {:<40} {} cr",
                    c.id.map(|id| id.to_string()).unwrap_or_default(),
                    c.course_code,
                    c.title,
                    c.credit_hours
                )
            })
        }
        CourseCommands::Create { code, title, credit_hours } => {
            let course = Course::new(code, title, credit_hours);
            course.validate()?;
            let created = registrar.create_course(&course, token).await?;
            output_success(output_format, "Course created successfully!", Some(json!({ "course": created })))
        }
        CourseCommands::Update { id, code, title, credit_hours } => {
            let patch = CoursePatch {
                course_code: code,
                title,
                credit_hours,
            };
            patch.validate()?;
            let updated = registrar.update_course(id, &patch, token).await?;
            output_success(output_format, "Course updated successfully!", Some(json!({ "course": updated })))
        }
        CourseCommands::Delete { id } => {
            registrar.delete_course(id, token).await?;
            output_success(output_format, "Course deleted successfully!", Some(json!({ "id": id })))
        }
    }
}
