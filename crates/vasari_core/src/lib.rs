//! Core data types for the Vasari backlog generation library.
//!
//! This crate provides the foundation data types used across all Vasari
//! interfaces: artifact kinds and their context contracts, generation
//! requests and results, and the completion call types backends exchange.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod artifact;
mod completion;
mod context;
mod format;
mod request;

pub use artifact::{ArtifactKind, ContextKey};
pub use completion::{CompletionRequest, CompletionResponse};
pub use context::GenerationContext;
pub use format::ResponseFormat;
pub use request::{GenerationRequest, GenerationResult};
