//! Vasari turns a business description into backlog artifacts with LLM chat
//! completions.
//!
//! The crate re-exports the public surface of the workspace: core request
//! types, the driver trait, the OpenAI-compatible client, and the generation
//! pipeline, plus the [`session::SelectionStore`] for tracking user
//! selections across generation steps.
//!
//! # Examples
//!
//! ```no_run
//! use vasari::{ClientConfig, GenerationPipeline, OpenAiClient, VasariResult};
//!
//! # async fn run() -> VasariResult<()> {
//! let config = ClientConfig::from_env()?;
//! let client = OpenAiClient::from_config(&config)?;
//! let pipeline = GenerationPipeline::new(client);
//!
//! let personas = pipeline.generate_personas("An online bakery").await?;
//! for persona in personas.items() {
//!     println!("{}", persona);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod session;

pub use session::SelectionStore;
pub use vasari_core::{
    ArtifactKind, CompletionRequest, CompletionResponse, ContextKey, GenerationContext,
    GenerationRequest, GenerationResult, ResponseFormat,
};
pub use vasari_error::{
    CompletionError, CompletionErrorKind, CompletionResult, ConfigError, ParseError,
    ParseErrorKind, PromptError, PromptErrorKind, VasariError, VasariErrorKind, VasariResult,
};
pub use vasari_interface::VasariDriver;
pub use vasari_models::{API_KEY_VAR, ClientConfig, OpenAiClient, RetryConfig};
pub use vasari_pipeline::{BatchOptions, GenerationPipeline, TaskKey, TaskMatrix};
