//! Generation orchestration.

use crate::{parser, renderer};
use tracing::{debug, info, instrument};
use vasari_core::{ArtifactKind, GenerationContext, GenerationRequest, GenerationResult};
use vasari_error::VasariResult;
use vasari_interface::VasariDriver;

/// Runs one generation at a time: render, complete, parse.
///
/// The pipeline owns nothing but the injected driver. It keeps no state
/// between calls, so one instance can serve concurrent independent
/// generations; every call is a fresh remote call with no caching or
/// deduplication.
pub struct GenerationPipeline<D: VasariDriver> {
    driver: D,
}

impl<D: VasariDriver> GenerationPipeline<D> {
    /// Create a pipeline around the given completion driver.
    pub fn new(driver: D) -> Self {
        Self { driver }
    }

    /// Access the injected driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Run one generation request through render, complete, and parse.
    ///
    /// The stages run strictly in order and the first failure ends the
    /// call with that stage's typed error. There is no partial result: the
    /// caller gets either parsed items or an error.
    #[instrument(
        skip(self, request),
        fields(kind = %request.kind(), format = %request.format())
    )]
    pub async fn generate(&self, request: &GenerationRequest) -> VasariResult<GenerationResult> {
        let completion_request = renderer::render(request)?;
        debug!(
            prompt_chars = completion_request.prompt.len(),
            "Rendered prompt"
        );

        let completion = self.driver.complete(&completion_request).await?;
        debug!(raw_chars = completion.text.len(), "Received completion");

        let result = parser::parse(&completion.text, *request.format())?;
        info!(items = result.len(), "Parsed generation result");

        Ok(result)
    }

    /// Generate application personas for a business description.
    pub async fn generate_personas(
        &self,
        business_description: &str,
    ) -> VasariResult<GenerationResult> {
        self.generate(&GenerationRequest::new(
            ArtifactKind::Persona,
            business_description,
        ))
        .await
    }

    /// Generate third-party integrations for a business description.
    pub async fn generate_integrations(
        &self,
        business_description: &str,
    ) -> VasariResult<GenerationResult> {
        self.generate(&GenerationRequest::new(
            ArtifactKind::Integration,
            business_description,
        ))
        .await
    }

    /// Generate sub-application components for a business description.
    pub async fn generate_components(
        &self,
        business_description: &str,
    ) -> VasariResult<GenerationResult> {
        self.generate(&GenerationRequest::new(
            ArtifactKind::Component,
            business_description,
        ))
        .await
    }

    /// Generate epics for a selected component.
    pub async fn generate_epics(
        &self,
        business_description: &str,
        component: &str,
    ) -> VasariResult<GenerationResult> {
        let request = GenerationRequest::new(ArtifactKind::Epic, business_description)
            .with_context(GenerationContext::new().with_component(component));
        self.generate(&request).await
    }

    /// Generate user stories for a selected component and epic.
    pub async fn generate_user_stories(
        &self,
        business_description: &str,
        component: &str,
        epic: &str,
    ) -> VasariResult<GenerationResult> {
        let request = GenerationRequest::new(ArtifactKind::UserStory, business_description)
            .with_context(
                GenerationContext::new()
                    .with_component(component)
                    .with_epic(epic),
            );
        self.generate(&request).await
    }

    /// Generate integration tasks for one persona and one integration.
    pub async fn generate_integration_tasks(
        &self,
        business_description: &str,
        persona: &str,
        integration: &str,
    ) -> VasariResult<GenerationResult> {
        let request = GenerationRequest::new(ArtifactKind::IntegrationTask, business_description)
            .with_context(
                GenerationContext::new()
                    .with_persona(persona)
                    .with_integration(integration),
            );
        self.generate(&request).await
    }
}
