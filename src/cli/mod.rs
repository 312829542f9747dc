pub mod commands;
pub mod utils;

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::config;
use crate::context::AppContext;
use crate::error::ArmsError;

#[derive(Parser)]
#[command(name = "arms")]
#[command(about = "ARMS CLI - Academic records management from the command line")]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "Output in human-readable text format")]
    pub text: bool,

    #[arg(long, global = true, help = "Output in JSON format")]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Login, logout and session status")]
    Auth {
        #[command(subcommand)]
        cmd: commands::auth::AuthCommands,
    },

    #[command(about = "Sections available to the current user")]
    Nav {
        #[command(subcommand)]
        cmd: commands::nav::NavCommands,
    },

    #[command(about = "Student records")]
    Student {
        #[command(subcommand)]
        cmd: commands::student::StudentCommands,
    },

    #[command(about = "Course catalog")]
    Course {
        #[command(subcommand)]
        cmd: commands::course::CourseCommands,
    },

    #[command(about = "Bulk enrollment")]
    Enroll {
        #[command(subcommand)]
        cmd: commands::enroll::EnrollCommands,
    },

    #[command(about = "Classrooms and memberships")]
    Classroom {
        #[command(subcommand)]
        cmd: commands::classroom::ClassroomCommands,
    },

    #[command(about = "Grade submission")]
    Grade {
        #[command(subcommand)]
        cmd: commands::grade::GradeCommands,
    },

    #[command(about = "User accounts and roles")]
    User {
        #[command(subcommand)]
        cmd: commands::user::UserCommands,
    },

    #[command(about = "Student profile and transcript")]
    Transcript {
        #[command(subcommand)]
        cmd: commands::transcript::TranscriptCommands,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_cli(cli: &Cli) -> Self {
        if cli.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let output_format = OutputFormat::from_cli(&cli);
    let mut ctx = AppContext::from_config(config::config())?;

    let result = match cli.command {
        Commands::Auth { cmd } => commands::auth::handle(cmd, &mut ctx, &output_format).await,
        Commands::Nav { cmd } => commands::nav::handle(cmd, &ctx, &output_format).await,
        Commands::Student { cmd } => commands::student::handle(cmd, &ctx, &output_format).await,
        Commands::Course { cmd } => commands::course::handle(cmd, &ctx, &output_format).await,
        Commands::Enroll { cmd } => commands::enroll::handle(cmd, &ctx, &output_format).await,
        Commands::Classroom { cmd } => commands::classroom::handle(cmd, &ctx, &output_format).await,
        Commands::Grade { cmd } => commands::grade::handle(cmd, &ctx, &output_format).await,
        Commands::User { cmd } => commands::user::handle(cmd, &ctx, &output_format).await,
        Commands::Transcript { cmd } => commands::transcript::handle(cmd, &ctx, &output_format).await,
    };

    // JSON callers get a structured error body; the exit status comes from main
    if let (Err(err), OutputFormat::Json) = (&result, &output_format) {
        let (message, code) = error_details(err);
        utils::output_error(&output_format, &message, code)?;
    }
    result
}

/// Message and machine-readable code for a failed command
fn error_details(err: &anyhow::Error) -> (String, Option<&'static str>) {
    match err.downcast_ref::<ArmsError>() {
        Some(arms) => (arms.to_string(), Some(arms.error_code())),
        None => (format!("{:#}", err), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    #[test]
    fn arms_errors_carry_their_code() {
        let err = anyhow::Error::from(ArmsError::Unauthenticated);
        let (message, code) = error_details(&err);
        assert_eq!(message, ArmsError::Unauthenticated.to_string());
        assert_eq!(code, Some(ArmsError::Unauthenticated.error_code()));
    }

    #[test]
    fn other_errors_still_produce_a_message() {
        let err = serde_json::from_str::<serde_json::Value>("not json")
            .context("input is not valid JSON")
            .unwrap_err();
        let (message, code) = error_details(&err);
        assert!(message.starts_with("input is not valid JSON: "));
        assert_eq!(code, None);
    }
}
