//! Generate command handler.

use crate::cli::{FormatArg, KindArg};
use tracing::{info, instrument};
use vasari_core::{ArtifactKind, GenerationContext, GenerationRequest};
use vasari_models::OpenAiClient;
use vasari_pipeline::GenerationPipeline;

/// Handles the generate command.
///
/// Renders the prompt for one artifact kind, runs the completion, and prints
/// the parsed items as a checklist.
#[instrument(skip_all, fields(kind = ?kind, format = ?format))]
pub async fn handle_generate_command(
    client: OpenAiClient,
    kind: KindArg,
    description: String,
    persona: Option<String>,
    integration: Option<String>,
    component: Option<String>,
    epic: Option<String>,
    format: FormatArg,
) -> anyhow::Result<()> {
    let kind = ArtifactKind::from(kind);
    info!(kind = %kind, "Starting generation");

    let mut context = GenerationContext::new();
    if let Some(persona) = persona {
        context = context.with_persona(persona);
    }
    if let Some(integration) = integration {
        context = context.with_integration(integration);
    }
    if let Some(component) = component {
        context = context.with_component(component);
    }
    if let Some(epic) = epic {
        context = context.with_epic(epic);
    }

    let request = GenerationRequest::new(kind, description)
        .with_context(context)
        .with_format(format.into());

    let pipeline = GenerationPipeline::new(client);
    let result = pipeline.generate(&request).await?;
    info!(items = result.len(), "Generation complete");

    for item in result.items() {
        println!("[ ] {}", item);
    }

    Ok(())
}
