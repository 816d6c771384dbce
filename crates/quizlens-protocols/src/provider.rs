//! Remote inference provider trait definition.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::candidate::McqCandidate;
use crate::error::ProviderError;

/// Sentinel returned by the model when it cannot determine an answer.
pub const UNKNOWN_SENTINEL: &str = "UNKNOWN";

/// A single inference request: either an extracted question with its
/// options, or a page image for the model to read itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRequest {
    pub question: String,
    pub options: Vec<String>,
    pub image: Option<InlineImage>,
}

impl AnswerRequest {
    /// Build a request from an extracted candidate.
    pub fn from_candidate(candidate: &McqCandidate) -> Self {
        Self {
            question: candidate.question.clone(),
            options: candidate.options.clone(),
            image: None,
        }
    }

    /// Build a request carrying a page image instead of extracted text.
    pub fn from_image(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            question: String::new(),
            options: Vec::new(),
            image: Some(InlineImage {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
        }
    }
}

/// Base64-encoded inline image payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineImage {
    pub mime_type: String,
    pub data: String,
}

/// Raw free-text reply from the model.
///
/// No guarantee of matching any option verbatim; reconciliation against
/// the option list is the matcher's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerResponse {
    pub text: String,
}

impl AnswerResponse {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// True when the model explicitly declined to answer.
    pub fn is_unknown(&self) -> bool {
        self.text.trim().eq_ignore_ascii_case(UNKNOWN_SENTINEL)
    }
}

/// Core trait for remote inference providers.
#[async_trait]
pub trait InferenceProvider: Send + Sync {
    /// Returns the provider ID.
    fn id(&self) -> &str;

    /// Ask the model for a best-effort answer.
    async fn answer(&self, request: AnswerRequest) -> Result<AnswerResponse, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_from_candidate() {
        let candidate = McqCandidate::new("Q?", vec!["a".to_string(), "b".to_string()]);
        let request = AnswerRequest::from_candidate(&candidate);
        assert_eq!(request.question, "Q?");
        assert_eq!(request.options.len(), 2);
        assert!(request.image.is_none());
    }

    #[test]
    fn test_request_from_image() {
        let request = AnswerRequest::from_image("image/png", "aGVsbG8=");
        assert!(request.question.is_empty());
        assert!(request.options.is_empty());
        let image = request.image.unwrap();
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn test_response_unknown_sentinel() {
        assert!(AnswerResponse::new("UNKNOWN").is_unknown());
        assert!(AnswerResponse::new("  unknown  ").is_unknown());
        assert!(!AnswerResponse::new("London").is_unknown());
    }
}
