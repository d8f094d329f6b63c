//! Configuration error types.

/// Configuration error with source location.
///
/// Raised when client construction cannot proceed: a missing or empty API
/// key, an unreadable config file, or unparseable TOML. Configuration
/// problems surface before any remote call is attempted.
///
/// # Examples
///
/// ```
/// use vasari_error::ConfigError;
///
/// let err = ConfigError::new("OPENAI_KEY environment variable not set");
/// assert!(format!("{}", err).contains("OPENAI_KEY"));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigError {
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Configuration Error: {} at line {} in {}",
            self.message, self.line, self.file
        )
    }
}

impl std::error::Error for ConfigError {}
