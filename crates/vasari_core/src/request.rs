//! Request and result types for backlog generation.

use crate::{ArtifactKind, GenerationContext, ResponseFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// One generation call: which artifact kind to produce, for which product.
///
/// An empty business description is accepted. It produces a vague prompt and
/// low-quality output, but it is the model's problem, not an input error.
///
/// # Examples
///
/// ```
/// use vasari_core::{ArtifactKind, GenerationContext, GenerationRequest, ResponseFormat};
///
/// let request = GenerationRequest::new(ArtifactKind::Epic, "An online bakery")
///     .with_context(GenerationContext::new().with_component("Ordering"))
///     .with_format(ResponseFormat::LegacyBracket);
///
/// assert_eq!(*request.kind(), ArtifactKind::Epic);
/// assert_eq!(request.business_description(), "An online bakery");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationRequest {
    /// Artifact kind to generate
    kind: ArtifactKind,
    /// Free-text description of the product
    business_description: String,
    /// Selections from earlier generations
    context: GenerationContext,
    /// Reply shape the model is held to
    format: ResponseFormat,
}

impl GenerationRequest {
    /// Create a request with an empty context and the default format.
    pub fn new(kind: ArtifactKind, business_description: impl Into<String>) -> Self {
        Self {
            kind,
            business_description: business_description.into(),
            context: GenerationContext::default(),
            format: ResponseFormat::default(),
        }
    }

    /// Attach context selections.
    pub fn with_context(mut self, context: GenerationContext) -> Self {
        self.context = context;
        self
    }

    /// Override the response format.
    pub fn with_format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }
}

/// A successfully parsed generation.
///
/// Items keep the model's order and are not deduplicated; `raw` keeps the
/// unparsed model text for diagnostics and re-parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationResult {
    /// Parsed items, in model order
    items: Vec<String>,
    /// The raw model text the items were parsed from
    raw: String,
}

impl GenerationResult {
    /// Create a result from parsed items and the raw text they came from.
    pub fn new(items: Vec<String>, raw: impl Into<String>) -> Self {
        Self {
            items,
            raw: raw.into(),
        }
    }

    /// Number of parsed items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the model produced an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Consume the result, keeping only the items.
    pub fn into_items(self) -> Vec<String> {
        self.items
    }
}
