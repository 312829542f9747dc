use clap::Subcommand;

use crate::cli::utils::output_record;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::session::Section;
use crate::types::EntityId;

#[derive(Subcommand)]
pub enum TranscriptCommands {
    #[command(about = "Show a student's transcript")]
    Show {
        #[arg(help = "Student ID")]
        student_id: EntityId,
    },

    #[command(about = "Show a student's profile")]
    Profile {
        #[arg(help = "Student ID")]
        student_id: EntityId,
    },
}

pub async fn handle(cmd: TranscriptCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Transcripts)?;
    let student = &ctx.api().student;

    match cmd {
        TranscriptCommands::Show { student_id } => {
            let transcript = student.get_transcript(student_id, token).await?;
            output_record(output_format, &transcript)
        }
        TranscriptCommands::Profile { student_id } => {
            let profile = student.get_profile(student_id, token).await?;
            output_record(output_format, &profile)
        }
    }
}
