//! Error types for the Vasari library.
//!
//! Each stage of the generation pipeline has its own error type with source
//! location tracking: configuration, prompt rendering, the completion call,
//! and response parsing. [`VasariError`] unifies them for callers that work
//! across stages.
//!
//! A failed generation always surfaces as one of these types. No stage maps
//! a failure to an empty item list, so an empty result can only mean the
//! model produced an empty sequence.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod completion;
mod config;
mod parse;
mod prompt;

pub use completion::{CompletionError, CompletionErrorKind, CompletionResult};
pub use config::ConfigError;
pub use parse::{ParseError, ParseErrorKind};
pub use prompt::{PromptError, PromptErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From)]
pub enum VasariErrorKind {
    /// Configuration error
    Config(ConfigError),
    /// Prompt rendering error
    Prompt(PromptError),
    /// Completion transport error
    Completion(CompletionError),
    /// Response parsing error
    Parse(ParseError),
}

impl std::fmt::Display for VasariErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VasariErrorKind::Config(e) => write!(f, "{}", e),
            VasariErrorKind::Prompt(e) => write!(f, "{}", e),
            VasariErrorKind::Completion(e) => write!(f, "{}", e),
            VasariErrorKind::Parse(e) => write!(f, "{}", e),
        }
    }
}

/// Vasari error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vasari_error::{ConfigError, VasariError, VasariErrorKind};
///
/// let err = VasariError::from(ConfigError::new("no API key"));
/// assert!(matches!(err.kind(), VasariErrorKind::Config(_)));
/// ```
#[derive(Debug)]
pub struct VasariError(Box<VasariErrorKind>);

impl VasariError {
    /// Create a new error from a kind.
    pub fn new(kind: VasariErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VasariErrorKind {
        &self.0
    }
}

impl std::fmt::Display for VasariError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Vasari Error: {}", self.0)
    }
}

impl std::error::Error for VasariError {}

// Generic From implementation for any type that converts to VasariErrorKind
impl<T> From<T> for VasariError
where
    T: Into<VasariErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vasari operations.
pub type VasariResult<T> = std::result::Result<T, VasariError>;
