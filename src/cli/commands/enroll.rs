use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::output_success;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::enrollment::{BulkEnrollment, DEFAULT_TERM, DEFAULT_YEAR};
use crate::error::ArmsError;
use crate::roster::Roster;
use crate::session::Section;
use crate::types::{EntityId, Term};

#[derive(Subcommand)]
pub enum EnrollCommands {
    #[command(about = "Enroll several students in one course")]
    Students {
        #[arg(help = "Course ID")]
        course_id: EntityId,
        #[arg(help = "Student IDs", num_args = 1..)]
        student_ids: Vec<EntityId>,
        #[arg(long, default_value_t = DEFAULT_TERM, help = "SPRING, SUMMER, FALL or WINTER")]
        term: Term,
        #[arg(long, default_value_t = DEFAULT_YEAR, help = "Academic year (2020-2030)")]
        year: i32,
    },

    #[command(about = "Enroll one student in several courses")]
    Courses {
        #[arg(help = "Student ID")]
        student_id: EntityId,
        #[arg(help = "Course IDs", num_args = 1..)]
        course_ids: Vec<EntityId>,
        #[arg(long, default_value_t = DEFAULT_TERM, help = "SPRING, SUMMER, FALL or WINTER")]
        term: Term,
        #[arg(long, default_value_t = DEFAULT_YEAR, help = "Academic year (2020-2030)")]
        year: i32,
    },
}

pub async fn handle(cmd: EnrollCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Enrollments)?;

    let (mut form, kind) = match cmd {
        EnrollCommands::Students { course_id, student_ids, term, year } => {
            let mut form = BulkEnrollment::students_into_course(course_id).with_term(term, year);
            form.select(student_ids);
            (form, Kind::Student)
        }
        EnrollCommands::Courses { student_id, course_ids, term, year } => {
            let mut form = BulkEnrollment::courses_for_student(student_id).with_term(term, year);
            form.select(course_ids);
            (form, Kind::Course)
        }
    };
    let anchor = form.validate()?;

    let roster = ctx.roster();
    roster.refresh(token).await?;
    let selected: Vec<EntityId> = form.selected().collect();
    let anchor_label = match kind {
        Kind::Student => {
            let course = roster
                .find_course(anchor)
                .await
                .ok_or_else(|| ArmsError::validation(format!("Course {} not found", anchor)))?;
            ensure_known(&roster, &selected, Kind::Student).await?;
            course.label()
        }
        Kind::Course => {
            let student = roster
                .find_student(anchor)
                .await
                .ok_or_else(|| ArmsError::validation(format!("Student {} not found", anchor)))?;
            ensure_known(&roster, &selected, Kind::Course).await?;
            student.full_name()
        }
    };

    let outcome = form.submit(&ctx.api().registrar, token).await?;
    output_success(
        output_format,
        &outcome.message,
        Some(json!({
            "anchor": anchor_label,
            "term": form.term(),
            "year": form.year(),
            "enrolled": outcome.enrolled,
            "created": outcome.created,
        })),
    )
}

#[derive(Clone, Copy)]
enum Kind {
    Student,
    Course,
}

/// Reject ids the roster does not know before anything is submitted
async fn ensure_known(roster: &Roster, ids: &[EntityId], kind: Kind) -> Result<(), ArmsError> {
    let mut unknown = Vec::new();
    for &id in ids {
        let found = match kind {
            Kind::Student => roster.find_student(id).await.is_some(),
            Kind::Course => roster.find_course(id).await.is_some(),
        };
        if !found {
            unknown.push(id.to_string());
        }
    }
    if unknown.is_empty() {
        return Ok(());
    }
    let noun = match kind {
        Kind::Student => "student",
        Kind::Course => "course",
    };
    Err(ArmsError::validation(format!("Unknown {} id(s): {}", noun, unknown.join(", "))))
}
