//! Completion transport error types and retry classification.

/// Specific error conditions for completion calls.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CompletionErrorKind {
    /// Network-level request failure
    Http(String),
    /// The per-call deadline elapsed before a response arrived
    Timeout(String),
    /// The service answered with a non-success status
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or status text
        message: String,
    },
    /// The response body could not be decoded as a chat completion
    Decode(String),
    /// The service returned a completion with no choices
    NoChoices,
    /// Failed to assemble the outgoing request
    Builder(String),
}

impl std::fmt::Display for CompletionErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionErrorKind::Http(msg) => write!(f, "HTTP request failed: {}", msg),
            CompletionErrorKind::Timeout(msg) => write!(f, "Request timed out: {}", msg),
            CompletionErrorKind::Api { status, message } => {
                write!(f, "API error {}: {}", status, message)
            }
            CompletionErrorKind::Decode(msg) => {
                write!(f, "Failed to decode completion response: {}", msg)
            }
            CompletionErrorKind::NoChoices => write!(f, "No choices in response"),
            CompletionErrorKind::Builder(msg) => write!(f, "Failed to build request: {}", msg),
        }
    }
}

impl CompletionErrorKind {
    /// Check if this error condition should be retried.
    ///
    /// Connection failures, timeouts, and transient status codes are worth
    /// another attempt; auth rejections, malformed bodies, and empty choice
    /// lists are not.
    ///
    /// # Examples
    ///
    /// ```
    /// use vasari_error::CompletionErrorKind;
    ///
    /// let overloaded = CompletionErrorKind::Api {
    ///     status: 503,
    ///     message: "Service unavailable".to_string(),
    /// };
    /// assert!(overloaded.is_retryable());
    /// assert!(!CompletionErrorKind::NoChoices.is_retryable());
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            CompletionErrorKind::Http(_) => true,
            CompletionErrorKind::Timeout(_) => true,
            CompletionErrorKind::Api { status, .. } => {
                matches!(*status, 408 | 429 | 500 | 502 | 503 | 504)
            }
            _ => false,
        }
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use vasari_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::NoChoices);
/// assert!(format!("{}", err).contains("No choices"));
/// ```
#[derive(Debug, Clone)]
pub struct CompletionError {
    /// The specific error condition
    pub kind: CompletionErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Check if the underlying condition should be retried.
    pub fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl std::fmt::Display for CompletionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Completion Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for CompletionError {}

/// Result type for completion calls.
pub type CompletionResult<T> = Result<T, CompletionError>;
