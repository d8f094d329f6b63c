//! Prompt rendering.
//!
//! Rendering is a pure function from a [`GenerationRequest`] to a
//! [`CompletionRequest`]: one canonical instruction per artifact kind, the
//! business description and required context embedded verbatim, and the
//! output-format contract clause appended last. No I/O happens here, and a
//! request that fails validation never reaches a driver.

use vasari_core::{ArtifactKind, CompletionRequest, ContextKey, GenerationRequest, ResponseFormat};
use vasari_error::{PromptError, PromptErrorKind};

/// Render a request into a prompt ready for a completion backend.
///
/// # Errors
///
/// Returns [`PromptErrorKind::MissingContext`] when the request's kind
/// requires a context value the caller did not supply.
pub fn render(request: &GenerationRequest) -> Result<CompletionRequest, PromptError> {
    let description = request.business_description();

    let body = match request.kind() {
        ArtifactKind::Persona => format!(
            "Based on the provided business description, please generate a list of \
             application personas (e.g. admin, customer, manager) for the app: {}",
            description
        ),
        ArtifactKind::Integration => format!(
            "Based on the provided business description, please generate 3rd party \
             integrations: {}",
            description
        ),
        ArtifactKind::Component => format!(
            "Based on the provided business description, please list down possible \
             sub applications: {}",
            description
        ),
        ArtifactKind::Epic => {
            let component = require(request, ContextKey::Component)?;
            format!(
                "Based on the provided business description and selected component, \
                 please list down possible epics: {}, {}",
                description, component
            )
        }
        ArtifactKind::UserStory => {
            let component = require(request, ContextKey::Component)?;
            let epic = require(request, ContextKey::Epic)?;
            format!(
                "Based on the provided business description, selected component, and \
                 epic, please generate user stories: {}, {}, {}",
                description, component, epic
            )
        }
        ArtifactKind::IntegrationTask => {
            let persona = require(request, ContextKey::Persona)?;
            let integration = require(request, ContextKey::Integration)?;
            format!(
                "Based on the provided business description, selected persona, and 3rd \
                 party integration, please generate integration tasks: {}, {}, {}",
                description, persona, integration
            )
        }
    };

    let prompt = format!("{} {}", body, format_clause(*request.kind(), *request.format()));

    Ok(CompletionRequest {
        prompt,
        format: *request.format(),
        max_tokens: None,
        temperature: None,
    })
}

/// Fetch a required context value or fail with the kind that wanted it.
fn require<'a>(
    request: &'a GenerationRequest,
    key: ContextKey,
) -> Result<&'a str, PromptError> {
    request.context().get(key).ok_or_else(|| {
        PromptError::new(PromptErrorKind::MissingContext {
            key: key.to_string(),
            kind: request.kind().to_string(),
        })
    })
}

/// The output-format contract clause appended to every prompt.
fn format_clause(kind: ArtifactKind, format: ResponseFormat) -> String {
    match format {
        ResponseFormat::LegacyBracket => {
            let (first, second) = legacy_example(kind);
            format!(
                "List down in Array in this format: ['{}', '{}']",
                first, second
            )
        }
        ResponseFormat::JsonObject => {
            "Respond with a JSON object containing a single \"data\" key whose value \
             is an array of strings."
                .to_string()
        }
    }
}

/// Per-kind example pair for the legacy clause, matching the legacy prompts.
fn legacy_example(kind: ArtifactKind) -> (&'static str, &'static str) {
    match kind {
        ArtifactKind::Persona => ("Persona 1", "Persona 2"),
        ArtifactKind::Integration => ("Integration 1", "Integration 2"),
        ArtifactKind::Component => ("Payments", "Delivery"),
        ArtifactKind::Epic => ("Epic 1", "Epic 2"),
        ArtifactKind::UserStory => ("Story 1", "Story 2"),
        ArtifactKind::IntegrationTask => ("Task 1", "Task 2"),
    }
}
