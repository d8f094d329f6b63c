//! OpenAI chat completions backend.
//!
//! The wire format is the common chat completions shape, so the client also
//! works against compatible endpoints by overriding the base URL in
//! [`crate::ClientConfig`].

mod client;
mod conversions;
mod dto;

pub use client::OpenAiClient;
pub use dto::{ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseFormat, ChatUsage};
