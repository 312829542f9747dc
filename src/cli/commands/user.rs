use clap::Subcommand;
use serde_json::json;

use crate::cli::utils::{output_collection, output_record, output_success, resolve_password};
use crate::cli::OutputFormat;
use crate::context::AppContext;
use crate::models::NewUser;
use crate::session::{Role, Section};

#[derive(Subcommand)]
pub enum UserCommands {
    #[command(about = "List user accounts")]
    List,

    #[command(about = "Show one user")]
    Get {
        username: String,
    },

    #[command(about = "Create a user account")]
    Create {
        username: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long = "role", required = true, help = "Role to grant; repeat for several")]
        roles: Vec<Role>,
        #[arg(long, help = "Initial password (ARMS_PASSWORD or a prompt when omitted)")]
        password: Option<String>,
    },

    #[command(about = "Replace a user's roles")]
    Roles {
        username: String,
        #[arg(required = true, num_args = 1..)]
        roles: Vec<Role>,
    },

    #[command(about = "Enable a user account")]
    Enable {
        username: String,
    },

    #[command(about = "Disable a user account")]
    Disable {
        username: String,
    },
}

fn role_names(roles: &[Role]) -> Vec<String> {
    roles.iter().map(|r| r.as_str().to_string()).collect()
}

pub async fn handle(cmd: UserCommands, ctx: &AppContext, output_format: &OutputFormat) -> anyhow::Result<()> {
    let token = ctx.require_section(Section::Users)?;
    let admin = &ctx.api().admin;

    match cmd {
        UserCommands::List => {
            let users = admin.list_users(token).await?;
            output_collection(output_format, "users", &users, "No users found", |u| {
                format!(
                    "{:<20} {:<8} {}",
                    u.username,
                    if u.enabled { "enabled" } else { "disabled" },
                    u.roles.join(", ")
                )
            })
        }
        UserCommands::Get { username } => {
            let user = admin.get_user(&username, token).await?;
            output_record(output_format, &user)
        }
        UserCommands::Create { username, email, roles, password } => {
            let user = NewUser {
                username,
                password: resolve_password(password)?,
                email,
                roles: role_names(&roles),
            };
            let created = admin.create_user(&user, token).await?;
            output_success(
                output_format,
                &format!("User {} created", user.username),
                Some(json!({ "user": created })),
            )
        }
        UserCommands::Roles { username, roles } => {
            let updated = admin.update_user_roles(&username, &role_names(&roles), token).await?;
            output_success(
                output_format,
                &format!("Roles updated for {}", username),
                Some(json!({ "user": updated })),
            )
        }
        UserCommands::Enable { username } => {
            admin.set_user_enabled(&username, true, token).await?;
            output_success(output_format, &format!("User {} enabled", username), None)
        }
        UserCommands::Disable { username } => {
            admin.set_user_enabled(&username, false, token).await?;
            output_success(output_format, &format!("User {} disabled", username), None)
        }
    }
}
