//! Artifact kinds and their context contracts.

use serde::{Deserialize, Serialize};

/// The backlog artifact families a pipeline can generate.
///
/// Each kind maps to one prompt template and declares which context values
/// it needs via [`ArtifactKind::required_context`]. The enum is closed, so a
/// request can never name an unsupported kind.
///
/// # Examples
///
/// ```
/// use vasari_core::{ArtifactKind, ContextKey};
///
/// assert!(ArtifactKind::Persona.required_context().is_empty());
/// assert_eq!(
///     ArtifactKind::UserStory.required_context(),
///     &[ContextKey::Component, ContextKey::Epic]
/// );
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ArtifactKind {
    /// User archetypes of the application (admin, customer, manager...)
    Persona,
    /// Third-party services the application connects to
    Integration,
    /// Sub-applications the product splits into
    Component,
    /// Large bodies of work within one component
    Epic,
    /// User stories within a component and epic
    UserStory,
    /// Work items for one persona against one third-party integration
    IntegrationTask,
}

impl ArtifactKind {
    /// Context keys a request of this kind must supply.
    ///
    /// Persona, integration, and component generation work from the business
    /// description alone. The narrower kinds need the caller's earlier
    /// selections.
    pub fn required_context(&self) -> &'static [ContextKey] {
        match self {
            ArtifactKind::Persona | ArtifactKind::Integration | ArtifactKind::Component => &[],
            ArtifactKind::Epic => &[ContextKey::Component],
            ArtifactKind::UserStory => &[ContextKey::Component, ContextKey::Epic],
            ArtifactKind::IntegrationTask => &[ContextKey::Persona, ContextKey::Integration],
        }
    }
}

/// Keys under which callers pass earlier selections to later generations.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ContextKey {
    /// A previously generated persona
    Persona,
    /// A previously generated integration
    Integration,
    /// A previously generated component
    Component,
    /// A previously generated epic
    Epic,
}
