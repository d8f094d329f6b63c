//! Response parsing error types.

/// Specific error conditions for response parsing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// The model returned an empty or whitespace-only string
    EmptyResponse,
    /// The response is not valid JSON
    MalformedJson(String),
    /// The JSON root is not an object with a `data` key
    MissingDataKey,
    /// The `data` value is not an array of strings
    DataNotStrings(String),
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseErrorKind::EmptyResponse => write!(f, "Model returned an empty response"),
            ParseErrorKind::MalformedJson(msg) => write!(f, "Response is not valid JSON: {}", msg),
            ParseErrorKind::MissingDataKey => {
                write!(f, "Response has no top-level 'data' key")
            }
            ParseErrorKind::DataNotStrings(msg) => {
                write!(f, "The 'data' value is not an array of strings: {}", msg)
            }
        }
    }
}

/// Parse error with source location and the offending model text.
///
/// An error never stands in for an empty result: a model that legitimately
/// produced zero items parses successfully, while anything unusable fails
/// with the raw text attached for diagnostics.
///
/// # Examples
///
/// ```
/// use vasari_error::{ParseError, ParseErrorKind};
///
/// let err = ParseError::new(ParseErrorKind::MissingDataKey).with_raw("{\"items\": []}");
/// assert!(format!("{}", err).contains("data"));
/// assert_eq!(err.raw.as_deref(), Some("{\"items\": []}"));
/// ```
#[derive(Debug, Clone)]
pub struct ParseError {
    /// The specific error condition
    pub kind: ParseErrorKind,
    /// The raw model text that failed to parse, when available
    pub raw: Option<String>,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl ParseError {
    /// Create a new ParseError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ParseErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            raw: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Attach the raw model text that failed to parse.
    pub fn with_raw(mut self, raw: impl Into<String>) -> Self {
        self.raw = Some(raw.into());
        self
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse Error: {} at line {} in {}",
            self.kind, self.line, self.file
        )
    }
}

impl std::error::Error for ParseError {}
