//! Tasks command handler.

use tracing::{info, instrument};
use vasari_models::OpenAiClient;
use vasari_pipeline::{BatchOptions, GenerationPipeline};

/// Handles the tasks command.
///
/// Runs the integration-task fan-out over every persona × integration pair
/// and prints one titled checklist per pair.
#[instrument(skip_all, fields(personas = personas.len(), integrations = integrations.len()))]
pub async fn handle_tasks_command(
    client: OpenAiClient,
    description: String,
    personas: Vec<String>,
    integrations: Vec<String>,
    concurrency: usize,
) -> anyhow::Result<()> {
    info!("Starting task matrix generation");

    let pipeline = GenerationPipeline::new(client);
    let matrix = pipeline
        .generate_task_matrix(
            &description,
            &personas,
            &integrations,
            &BatchOptions { concurrency },
        )
        .await?;
    info!(pairs = matrix.len(), "Task matrix complete");

    for (key, result) in matrix.iter() {
        println!(
            "Integration Tasks for {} with {}",
            key.persona(),
            key.integration()
        );
        for item in result.items() {
            println!("[ ] {}", item);
        }
        println!();
    }

    Ok(())
}
