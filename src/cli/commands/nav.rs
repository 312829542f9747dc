use clap::Subcommand;

use crate::cli::utils::output_collection;
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::error::ArmsError;
use crate::session::visible_sections;

#[derive(Subcommand)]
pub enum NavCommands {
    #[command(about = "List the sections the current user can open")]
    Sections,
}

pub async fn handle(cmd: NavCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    match cmd {
        NavCommands::Sections => {
            if !ctx.session().is_authenticated() {
                return Err(ArmsError::Unauthenticated.into());
            }
            let sections = visible_sections(ctx.session());
            output_collection(output_format, "sections", &sections, "No sections available", |section| {
                format!("{:<12} {}", section.id(), section.label())
            })
        }
    }
}
