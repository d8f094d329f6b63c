//! Completion backends for Vasari.
//!
//! One production backend ships today: the OpenAI chat completions client.
//! Anything OpenAI-compatible works by pointing [`ClientConfig`] at a
//! different base URL. All backends implement
//! [`vasari_interface::VasariDriver`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod openai;
mod retry;

pub use config::{API_KEY_VAR, ClientConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};
pub use openai::{
    ChatChoice, ChatMessage, ChatRequest, ChatResponse, ChatResponseFormat, ChatUsage,
    OpenAiClient,
};
pub use retry::{RetryConfig, retry_with_backoff};
