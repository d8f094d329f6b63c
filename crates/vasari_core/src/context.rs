//! Caller-supplied context for narrowing generations.

use crate::ContextKey;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Selections from earlier generations, passed into later ones.
///
/// All slots are optional; each [`crate::ArtifactKind`] declares which of
/// them it actually requires. Unused slots are ignored by rendering.
///
/// # Examples
///
/// ```
/// use vasari_core::{ContextKey, GenerationContext};
///
/// let context = GenerationContext::new()
///     .with_component("Payments")
///     .with_epic("Checkout flow");
///
/// assert_eq!(context.get(ContextKey::Component), Some("Payments"));
/// assert_eq!(context.get(ContextKey::Persona), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationContext {
    /// Selected persona, if any
    persona: Option<String>,
    /// Selected third-party integration, if any
    integration: Option<String>,
    /// Selected component, if any
    component: Option<String>,
    /// Selected epic, if any
    epic: Option<String>,
}

impl GenerationContext {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the persona selection.
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = Some(persona.into());
        self
    }

    /// Set the integration selection.
    pub fn with_integration(mut self, integration: impl Into<String>) -> Self {
        self.integration = Some(integration.into());
        self
    }

    /// Set the component selection.
    pub fn with_component(mut self, component: impl Into<String>) -> Self {
        self.component = Some(component.into());
        self
    }

    /// Set the epic selection.
    pub fn with_epic(mut self, epic: impl Into<String>) -> Self {
        self.epic = Some(epic.into());
        self
    }

    /// Look up a context value by key.
    pub fn get(&self, key: ContextKey) -> Option<&str> {
        match key {
            ContextKey::Persona => self.persona.as_deref(),
            ContextKey::Integration => self.integration.as_deref(),
            ContextKey::Component => self.component.as_deref(),
            ContextKey::Epic => self.epic.as_deref(),
        }
    }

    /// True when no slot is set.
    pub fn is_empty(&self) -> bool {
        self.persona.is_none()
            && self.integration.is_none()
            && self.component.is_none()
            && self.epic.is_none()
    }
}
