//! Response parsing.
//!
//! Parsing is pure and idempotent: the same raw text always yields the same
//! outcome, and nothing is cached or repaired. The legacy decoder
//! reproduces the historical strip-and-split algorithm exactly, brittleness
//! included; the JSON decoder is strict about the `{"data": [...]}` shape.

use vasari_core::{GenerationResult, ResponseFormat};
use vasari_error::{ParseError, ParseErrorKind};

/// Parse raw model text into an ordered item list.
///
/// Items keep model order and are not deduplicated. An empty `data` array
/// parses to an empty result; only an empty *response* is an error.
///
/// # Errors
///
/// - [`ParseErrorKind::EmptyResponse`] when `raw` is empty or whitespace,
///   in either format.
/// - [`ParseErrorKind::MalformedJson`], [`ParseErrorKind::MissingDataKey`],
///   or [`ParseErrorKind::DataNotStrings`] when JSON-object decoding fails;
///   the error carries the raw text.
pub fn parse(raw: &str, format: ResponseFormat) -> Result<GenerationResult, ParseError> {
    if raw.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::EmptyResponse));
    }

    let items = match format {
        ResponseFormat::LegacyBracket => parse_legacy(raw),
        ResponseFormat::JsonObject => parse_json_object(raw)?,
    };

    Ok(GenerationResult::new(items, raw))
}

/// The historical decoder: drop every `[`, `]`, and `'` character, split on
/// the literal `", "` separator, trim each fragment.
///
/// The separator must be comma-space exactly, so a reply without the space
/// collapses into one item. That behavior is deliberate and covered by
/// tests; compatibility outweighs robustness here.
fn parse_legacy(raw: &str) -> Vec<String> {
    let stripped: String = raw
        .chars()
        .filter(|c| !matches!(c, '[' | ']' | '\''))
        .collect();

    stripped
        .split(", ")
        .map(|item| item.trim().to_string())
        .collect()
}

/// Strict decoder for the structured format: a JSON object whose single
/// relevant key `data` holds an array of strings.
fn parse_json_object(raw: &str) -> Result<Vec<String>, ParseError> {
    let value: serde_json::Value = serde_json::from_str(raw)
        .map_err(|e| ParseError::new(ParseErrorKind::MalformedJson(e.to_string())).with_raw(raw))?;

    let data = value
        .get("data")
        .ok_or_else(|| ParseError::new(ParseErrorKind::MissingDataKey).with_raw(raw))?;

    let array = data.as_array().ok_or_else(|| {
        ParseError::new(ParseErrorKind::DataNotStrings(format!(
            "expected an array, found {}",
            json_type_name(data)
        )))
        .with_raw(raw)
    })?;

    array
        .iter()
        .map(|element| {
            element.as_str().map(String::from).ok_or_else(|| {
                ParseError::new(ParseErrorKind::DataNotStrings(format!(
                    "expected a string element, found {}",
                    json_type_name(element)
                )))
                .with_raw(raw)
            })
        })
        .collect()
}

fn json_type_name(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_two_items() {
        let result = parse("['Admin', 'Customer']", ResponseFormat::LegacyBracket)
            .expect("parse failed");
        assert_eq!(result.items(), &["Admin", "Customer"]);
        assert_eq!(result.raw(), "['Admin', 'Customer']");
    }

    #[test]
    fn test_legacy_single_item() {
        let result =
            parse("['Only One']", ResponseFormat::LegacyBracket).expect("parse failed");
        assert_eq!(result.items(), &["Only One"]);
    }

    #[test]
    fn test_legacy_trims_fragments() {
        let result = parse("[ 'Admin' ,  'Customer' ]", ResponseFormat::LegacyBracket)
            .expect("parse failed");
        assert_eq!(result.items(), &["Admin", "Customer"]);
    }

    #[test]
    fn test_legacy_requires_comma_space_separator() {
        let result = parse("['Admin','Customer']", ResponseFormat::LegacyBracket)
            .expect("parse failed");
        assert_eq!(result.items(), &["Admin,Customer"]);
    }

    #[test]
    fn test_legacy_empty_brackets_yield_single_blank_item() {
        let result = parse("[]", ResponseFormat::LegacyBracket).expect("parse failed");
        assert_eq!(result.items(), &[""]);
    }

    #[test]
    fn test_json_object_items() {
        let raw = r#"{"data": ["Admin", "Customer"]}"#;
        let result = parse(raw, ResponseFormat::JsonObject).expect("parse failed");
        assert_eq!(result.items(), &["Admin", "Customer"]);
        assert_eq!(result.raw(), raw);
    }

    #[test]
    fn test_json_empty_data_is_not_an_error() {
        let result = parse(r#"{"data": []}"#, ResponseFormat::JsonObject).expect("parse failed");
        assert!(result.is_empty());
    }

    #[test]
    fn test_json_preserves_order_and_duplicates() {
        let raw = r#"{"data": ["Baker", "Admin", "Baker"]}"#;
        let result = parse(raw, ResponseFormat::JsonObject).expect("parse failed");
        assert_eq!(result.items(), &["Baker", "Admin", "Baker"]);
    }

    #[test]
    fn test_invalid_json_is_malformed() {
        let raw = "{data: [oops]}";
        let err = parse(raw, ResponseFormat::JsonObject).expect_err("expected failure");
        assert!(matches!(err.kind, ParseErrorKind::MalformedJson(_)));
        assert_eq!(err.raw.as_deref(), Some(raw));
    }

    #[test]
    fn test_missing_data_key() {
        let err = parse(r#"{"items": ["Admin"]}"#, ResponseFormat::JsonObject)
            .expect_err("expected failure");
        assert_eq!(err.kind, ParseErrorKind::MissingDataKey);
    }

    #[test]
    fn test_non_object_root_has_no_data_key() {
        let err =
            parse(r#"["Admin", "Customer"]"#, ResponseFormat::JsonObject).expect_err("expected failure");
        assert_eq!(err.kind, ParseErrorKind::MissingDataKey);
    }

    #[test]
    fn test_data_not_an_array() {
        let err = parse(r#"{"data": "Admin"}"#, ResponseFormat::JsonObject)
            .expect_err("expected failure");
        assert!(matches!(err.kind, ParseErrorKind::DataNotStrings(_)));
    }

    #[test]
    fn test_non_string_element() {
        let err = parse(r#"{"data": ["Admin", 7]}"#, ResponseFormat::JsonObject)
            .expect_err("expected failure");
        assert!(matches!(err.kind, ParseErrorKind::DataNotStrings(_)));
    }

    #[test]
    fn test_empty_response_in_both_formats() {
        for format in [ResponseFormat::LegacyBracket, ResponseFormat::JsonObject] {
            let err = parse("   \n  ", format).expect_err("expected failure");
            assert_eq!(err.kind, ParseErrorKind::EmptyResponse);
        }
    }

    #[test]
    fn test_parsing_is_idempotent() {
        let raw = r#"{"data": ["Admin", "Customer"]}"#;
        let first = parse(raw, ResponseFormat::JsonObject).expect("parse failed");
        let second = parse(raw, ResponseFormat::JsonObject).expect("parse failed");
        assert_eq!(first, second);

        let raw = "['Admin', 'Customer']";
        let first = parse(raw, ResponseFormat::LegacyBracket).expect("parse failed");
        let second = parse(raw, ResponseFormat::LegacyBracket).expect("parse failed");
        assert_eq!(first, second);
    }

    #[test]
    fn test_fenced_json_is_rejected_not_repaired() {
        let raw = "```json\n{\"data\": [\"Admin\"]}\n```";
        let err = parse(raw, ResponseFormat::JsonObject).expect_err("fences are not stripped");
        assert!(matches!(err.kind, ParseErrorKind::MalformedJson(_)));
    }
}
