use clap::Subcommand;
use serde_json::Value;

use crate::cli::client::ApiClient;
use crate::cli::utils::output_value;
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum UsersCommands {
    #[command(about = "List all registered users")]
    List {
        #[arg(long, env = "DEMO_API_TOKEN", help = "Bearer token from `demo auth login`")]
        token: String,
    },
}

pub async fn handle(client: &ApiClient, cmd: UsersCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        UsersCommands::List { token } => {
            let body = client.get("/api/users", Some(&token)).await?;

            match output_format {
                OutputFormat::Json => output_value(&body),
                OutputFormat::Text => {
                    println!("{}", render_users(&body));
                    Ok(())
                }
            }
        }
    }
}

/// One line per user: id, email, created_at
fn render_users(body: &Value) -> String {
    let users = body.as_array().map(Vec::as_slice).unwrap_or_default();
    if users.is_empty() {
        return "No users registered".to_string();
    }

    users
        .iter()
        .map(|user| {
            format!(
                "{}  {}  {}",
                user["id"].as_str().unwrap_or("?"),
                user["email"].as_str().unwrap_or("?"),
                user["created_at"].as_str().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
