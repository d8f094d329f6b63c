//! Completion driver trait definitions.

use async_trait::async_trait;
use vasari_core::{CompletionRequest, CompletionResponse};
use vasari_error::VasariResult;

/// A chat-completion backend the pipeline can send rendered prompts to.
///
/// The pipeline is generic over this trait; production code injects one
/// configured HTTP client, tests inject mocks. Implementations must be safe
/// to share across concurrent calls.
#[async_trait]
pub trait VasariDriver: Send + Sync {
    /// Send one rendered prompt and return the raw completion text.
    async fn complete(&self, req: &CompletionRequest) -> VasariResult<CompletionResponse>;

    /// Name of the provider (for logging/tracing).
    fn provider_name(&self) -> &'static str;

    /// Model identifier the driver sends requests to.
    fn model_name(&self) -> &str;
}
