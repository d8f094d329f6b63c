//! Completion call types exchanged with backends.

use crate::ResponseFormat;
use serde::{Deserialize, Serialize};

/// A rendered prompt ready to send to a completion backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompletionRequest {
    /// The full prompt text
    pub prompt: String,
    /// Reply shape the backend should request from the model
    pub format: ResponseFormat,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature
    pub temperature: Option<f32>,
}

/// The raw text of a completion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unmodified text of the first choice
    pub text: String,
}
