//! Response format selection.

use serde::{Deserialize, Serialize};

/// How the model is asked to shape its reply, and how the reply is parsed.
///
/// The hint travels with the request: rendering appends the matching
/// output-format contract clause to the prompt, the completion layer emits
/// the wire-level directive where one exists, and parsing selects the
/// matching decoder.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, strum::Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ResponseFormat {
    /// A JSON object with a single `data` key holding an array of strings
    /// (default). Strict: anything else is a parse error.
    #[default]
    JsonObject,

    /// The legacy quoted-bracket array, e.g. `['Admin', 'Customer']`.
    /// Parsed by literal character stripping; kept for compatibility with
    /// the legacy prompts.
    LegacyBracket,
}
