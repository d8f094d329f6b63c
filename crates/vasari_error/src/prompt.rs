//! Prompt rendering error types.

/// Specific error conditions for prompt rendering.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PromptErrorKind {
    /// A context value required by the artifact kind was not supplied
    MissingContext {
        /// Name of the missing context key
        key: String,
        /// Artifact kind whose contract requires the key
        kind: String,
    },
}

impl std::fmt::Display for PromptErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PromptErrorKind::MissingContext { key, kind } => write!(
                f,
                "Context key '{}' is required to generate {} but was not supplied",
                key, kind
            ),
        }
    }
}

/// Error type for prompt rendering.
///
/// Rendering validates the request before any remote call: a request whose
/// kind requires context the caller did not supply fails here, never at the
/// completion layer.
///
/// # Examples
///
/// ```
/// use vasari_error::{PromptError, PromptErrorKind};
///
/// let err = PromptError::new(PromptErrorKind::MissingContext {
///     key: "component".to_string(),
///     kind: "epic".to_string(),
/// });
/// assert!(format!("{}", err).contains("component"));
/// ```
#[derive(Debug, Clone)]
pub struct PromptError {
    /// The specific error condition
    pub kind: PromptErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PromptError {
    /// Create a new PromptError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PromptErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for PromptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Prompt Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for PromptError {}
