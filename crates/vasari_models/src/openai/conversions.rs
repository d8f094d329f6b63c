//! Type conversions between Vasari and OpenAI formats.

use crate::openai::{ChatMessage, ChatRequest, ChatResponse, ChatResponseFormat};
use vasari_core::{CompletionRequest, CompletionResponse, ResponseFormat};
use vasari_error::{CompletionError, CompletionErrorKind, CompletionResult};

/// Converts a rendered prompt to an OpenAI chat request.
///
/// The prompt travels as a single user-role message. The structured-output
/// directive is emitted only for [`ResponseFormat::JsonObject`]; legacy
/// requests rely on the prompt's contract clause alone.
pub fn to_chat_request(req: &CompletionRequest, model: &str) -> CompletionResult<ChatRequest> {
    let messages = vec![ChatMessage {
        role: "user".to_string(),
        content: req.prompt.clone(),
    }];

    let response_format = match req.format {
        ResponseFormat::JsonObject => Some(ChatResponseFormat::json_object()),
        ResponseFormat::LegacyBracket => None,
    };

    let mut builder = ChatRequest::builder();
    builder
        .model(model.to_string())
        .messages(messages)
        .response_format(response_format);

    if let Some(max_tokens) = req.max_tokens {
        builder.max_tokens(max_tokens);
    }

    if let Some(temperature) = req.temperature {
        builder.temperature(temperature);
    }

    builder.build().map_err(|e| {
        CompletionError::new(CompletionErrorKind::Builder(format!(
            "Failed to build request: {}",
            e
        )))
    })
}

/// Extracts the completion text from an OpenAI chat response.
///
/// Only the first choice is used; a response with no choices is a
/// completion error, not an empty result.
pub fn from_chat_response(response: &ChatResponse) -> CompletionResult<CompletionResponse> {
    let text = response
        .choices
        .first()
        .map(|choice| choice.message.content.clone())
        .ok_or_else(|| CompletionError::new(CompletionErrorKind::NoChoices))?;

    Ok(CompletionResponse { text })
}
