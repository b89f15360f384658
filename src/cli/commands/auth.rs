use clap::Subcommand;
use serde_json::json;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum AuthCommands {
    #[command(about = "Register new user")]
    Register {
        #[arg(long, help = "Email")]
        email: String,
        #[arg(long, env = "DEMO_API_PASSWORD", help = "Password")]
        password: String,
    },

    #[command(about = "Login and print an access token")]
    Login {
        #[arg(long, help = "Email")]
        email: String,
        #[arg(long, env = "DEMO_API_PASSWORD", help = "Password")]
        password: String,
    },
}

pub async fn handle(client: &ApiClient, cmd: AuthCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        AuthCommands::Register { email, password } => {
            let body = client
                .post("/api/register", &json!({ "email": email, "password": password }))
                .await?;

            match output_format {
                OutputFormat::Json => output_value(&body),
                OutputFormat::Text => {
                    let id = body["user"]["id"].as_str().unwrap_or("?");
                    output_success(&format!("Registered {} ({})", email, id))
                }
            }
        }
        AuthCommands::Login { email, password } => {
            let body = client
                .post("/api/login", &json!({ "email": email, "password": password }))
                .await?;

            match output_format {
                OutputFormat::Json => output_value(&body),
                OutputFormat::Text => {
                    // Bare token so it can be captured: export DEMO_API_TOKEN=$(demo auth login ...)
                    println!("{}", body["access_token"].as_str().unwrap_or_default());
                    Ok(())
                }
            }
        }
    }
}
