use clap::Subcommand;
use serde_json::json;

use crate::api::Credentials;
use crate::cli::utils::{output_record, output_success, resolve_password};
use crate::cli::OutputFormat;
use crate::context::AppContext;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Login to the ARMS backend")]
    Login {
        #[arg(help = "Username")]
        username: String,
        #[arg(long, help = "Password (ARMS_PASSWORD or a prompt when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Forget the stored session")]
    Logout,

    #[command(about = "Show current authentication status")]
    Status,

    #[command(about = "Show current user information")]
    Whoami,
}

pub async fn handle(cmd: AuthCommands, ctx: &mut AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Login { username, password } => {
            let password = resolve_password(password)?;
            let profile = ctx.login(&Credentials::new(username, password)).await?;
            output_success(
                output_format,
                &format!("Logged in as {}", profile.greeting_name()),
                Some(json!({ "user": profile })),
            )
        }
        AuthCommands::Logout => {
            ctx.logout();
            output_success(output_format, "Logged out", None)
        }
        AuthCommands::Status => {
            let session = ctx.session();
            let status = json!({
                "authenticated": session.is_authenticated(),
                "username": session.user().map(|u| u.username.clone()),
                "roles": session.user().map(|u| u.roles.clone()).unwrap_or_default(),
                "expires_at": session.user().and_then(|u| u.expires_at()),
            });
            match output_format {
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&status)?),
                OutputFormat::Text => match session.user() {
                    Some(user) => {
                        println!("Logged in as {} ({})", user.username, user.roles.join(", "));
                        if let Some(expires) = user.expires_at() {
                            println!("Token expires: {}", expires.to_rfc3339());
                        }
                    }
                    None => println!("Not logged in"),
                },
            }
            Ok(())
        }
        AuthCommands::Whoami => {
            let user = ctx.session().user().ok_or(crate::error::ArmsError::Unauthenticated)?;
            output_record(output_format, user)
        }
    }
}
