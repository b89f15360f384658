use clap::Subcommand;

use crate::cli::client::ApiClient;
use crate::cli::utils::{output_success, output_value};
use crate::cli::OutputFormat;

#[derive(Subcommand)]
pub enum ServerCommands {
    #[command(about = "Check server health status from the /up endpoint")]
    Health,

    #[command(about = "Show server information from API root endpoint")]
    Info,
}

pub async fn handle(client: &ApiClient, cmd: ServerCommands, output_format: OutputFormat) -> anyhow::Result<()> {
    match cmd {
        ServerCommands::Health => {
            let body = client.get("/up", None).await?;
            match output_format {
                OutputFormat::Json => output_value(&body),
                OutputFormat::Text => output_success(
                    &format!("Server is up (database: {})", body["database"].as_str().unwrap_or("?")),
                ),
            }
        }
        ServerCommands::Info => {
            let body = client.get("/", None).await?;
            match output_format {
                OutputFormat::Json => output_value(&body),
                OutputFormat::Text => {
                    println!(
                        "{} {}",
                        body["name"].as_str().unwrap_or("?"),
                        body["version"].as_str().unwrap_or("")
                    );
                    if let Some(endpoints) = body["endpoints"].as_object() {
                        for (name, route) in endpoints {
                            println!("  {:<10} {}", name, route.as_str().unwrap_or(""));
                        }
                    }
                    Ok(())
                }
            }
        }
    }
}
