//! Vasari command-line binary.

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use vasari::cli::{Cli, Commands, handle_generate_command, handle_tasks_command};
use vasari::{ClientConfig, OpenAiClient, VasariDriver};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let client = build_client(&cli)?;
    info!(model = client.model_name(), "Client ready");

    match cli.command {
        Commands::Generate {
            kind,
            description,
            persona,
            integration,
            component,
            epic,
            format,
        } => {
            handle_generate_command(
                client,
                kind,
                description,
                persona,
                integration,
                component,
                epic,
                format,
            )
            .await
        }
        Commands::Tasks {
            description,
            personas,
            integrations,
            concurrency,
        } => handle_tasks_command(client, description, personas, integrations, concurrency).await,
    }
}

/// Resolve client configuration from the command line and environment.
///
/// An explicit `--api-key` wins over the `OPENAI_KEY` environment variable,
/// and `--model` overrides the configured model. Configuration errors abort
/// here, before any remote call.
fn build_client(cli: &Cli) -> Result<OpenAiClient> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)?,
        None => ClientConfig::default(),
    };
    config = match &cli.api_key {
        Some(key) => config.with_api_key(key),
        None => config.with_api_key(ClientConfig::api_key_from_env()?),
    };
    if let Some(model) = &cli.model {
        config = config.with_model(model);
    }
    Ok(OpenAiClient::from_config(&config)?)
}
