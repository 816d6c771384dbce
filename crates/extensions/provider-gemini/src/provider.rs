//! Gemini inference provider implementation.

use async_trait::async_trait;
use tracing::{debug, warn};

use quizlens_protocols::{AnswerRequest, AnswerResponse, InferenceProvider, ProviderError};

use crate::client::GeminiClient;
use crate::keyring::KeyRing;
use crate::types::*;

const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Gemini inference provider with round-robin key rotation.
pub struct GeminiProvider {
    client: GeminiClient,
    keys: KeyRing,
    model: String,
}

impl GeminiProvider {
    /// Create a provider over the given keys against the production API.
    pub fn new(api_keys: Vec<String>) -> Self {
        Self {
            client: GeminiClient::new(),
            keys: KeyRing::new(api_keys),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    /// Use a different model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Point the provider at a custom endpoint.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.client = GeminiClient::with_base_url(base_url);
        self
    }

    fn build_request(&self, request: &AnswerRequest) -> GenerateContentRequest {
        let parts = match &request.image {
            Some(image) => vec![
                Part::InlineData {
                    inline_data: InlineData {
                        mime_type: image.mime_type.clone(),
                        data: image.data.clone(),
                    },
                },
                Part::Text {
                    text: image_prompt().to_string(),
                },
            ],
            None => vec![Part::Text {
                text: build_prompt(&request.question, &request.options),
            }],
        };

        GenerateContentRequest {
            contents: vec![Content::user(parts)],
            generation_config: Some(GenerationConfig {
                temperature: Some(0.0),
                max_output_tokens: Some(256),
            }),
        }
    }

    /// Whether a failure is worth retrying with the next key.
    fn should_rotate(error: &ProviderError) -> bool {
        matches!(
            error,
            ProviderError::AuthenticationFailed(_) | ProviderError::RateLimited(_)
        )
    }
}

#[async_trait]
impl InferenceProvider for GeminiProvider {
    fn id(&self) -> &str {
        "gemini"
    }

    async fn answer(&self, request: AnswerRequest) -> Result<AnswerResponse, ProviderError> {
        if self.keys.is_empty() {
            return Err(ProviderError::AuthenticationFailed(
                "no API keys configured".to_string(),
            ));
        }

        let gemini_request = self.build_request(&request);

        let mut last_error = None;
        for attempt in 0..self.keys.len() {
            let key = self.keys.current();
            debug!("Gemini answer: model={} attempt={}", self.model, attempt);

            match self
                .client
                .generate_content(key, &self.model, &gemini_request)
                .await
            {
                Ok(response) => {
                    return match extract_text(&response) {
                        Some(text) => Ok(AnswerResponse::new(text)),
                        None => Err(ProviderError::InvalidResponse(
                            "no text in model reply".to_string(),
                        )),
                    };
                }
                Err(error) if Self::should_rotate(&error) => {
                    warn!("Gemini key rejected, rotating: {}", error);
                    self.keys.advance();
                    last_error = Some(error);
                }
                Err(error) => return Err(error),
            }
        }

        Err(last_error.expect("at least one attempt was made"))
    }
}

/// Prompt for an extracted question with lettered options.
fn build_prompt(question: &str, options: &[String]) -> String {
    let lettered: Vec<String> = options
        .iter()
        .enumerate()
        .map(|(i, option)| format!("{}) {}", (b'A' + i as u8) as char, option))
        .collect();
    format!(
        "Question: {}\nOptions:\n{}\n\nReturn ONLY the correct option text exactly as it \
         appears in the list above. If you cannot determine the answer, respond with 'UNKNOWN'.",
        question,
        lettered.join("\n")
    )
}

/// Prompt accompanying a page image.
fn image_prompt() -> &'static str {
    "This is a screenshot of a page containing a multiple-choice question. Identify the \
     question and its options, then return ONLY the text of the correct option. If you \
     cannot determine the answer, respond with 'UNKNOWN'."
}

/// Pull the reply text out of a response.
///
/// Prefers the typed candidate-content path; when that yields nothing,
/// falls back to the first string found anywhere in the undecoded
/// remainder of the payload.
fn extract_text(response: &GenerateContentResponse) -> Option<String> {
    for candidate in &response.candidates {
        let mut text = String::new();
        for part in &candidate.content.parts {
            match part {
                Part::Text { text: t } => text.push_str(t),
                Part::Other(value) => {
                    if text.is_empty() {
                        if let Some(found) = find_first_string(value) {
                            text.push_str(found);
                        }
                    }
                }
                Part::InlineData { .. } => {}
            }
        }
        let text = text.trim();
        if !text.is_empty() {
            return Some(text.to_string());
        }
    }

    for value in response.extra.values() {
        if let Some(found) = find_first_string(value) {
            let found = found.trim();
            if !found.is_empty() {
                return Some(found.to_string());
            }
        }
    }
    None
}

/// Depth-first search for the first string inside a JSON value.
fn find_first_string(value: &serde_json::Value) -> Option<&str> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Array(items) => items.iter().find_map(find_first_string),
        serde_json::Value::Object(map) => map.values().find_map(find_first_string),
        _ => None,
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
