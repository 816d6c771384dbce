use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::*;

fn request(text: &str) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content::user(vec![Part::Text {
            text: text.to_string(),
        }])],
        generation_config: None,
    }
}

#[tokio::test]
async fn test_generate_content_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.0-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "contents": [{"role": "user", "parts": [{"text": "Question"}]}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "London"}]},
                "finishReason": "STOP"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri());
    let response = client
        .generate_content("test-key", "gemini-2.0-flash", &request("Question"))
        .await
        .unwrap();

    assert_eq!(response.candidates.len(), 1);
    match &response.candidates[0].content.parts[0] {
        Part::Text { text } => assert_eq!(text, "London"),
        other => panic!("unexpected part: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_content_api_error_with_detail() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri());
    let err = client
        .generate_content("k", "gemini-2.0-flash", &request("Q"))
        .await
        .unwrap_err();

    match err {
        ProviderError::RateLimited(message) => assert!(message.contains("Quota exceeded")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_content_auth_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri());
    let err = client
        .generate_content("bad-key", "gemini-2.0-flash", &request("Q"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::AuthenticationFailed(_)));
}

#[tokio::test]
async fn test_generate_content_plain_error_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri());
    let err = client
        .generate_content("k", "gemini-2.0-flash", &request("Q"))
        .await
        .unwrap_err();

    match err {
        ProviderError::ApiError { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "boom");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_generate_content_unparseable_success_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = GeminiClient::with_base_url(server.uri());
    let err = client
        .generate_content("k", "gemini-2.0-flash", &request("Q"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::InvalidResponse(_)));
}

#[tokio::test]
async fn test_generate_content_network_error() {
    // Nothing is listening on this port.
    let client = GeminiClient::with_base_url("http://127.0.0.1:9");
    let err = client
        .generate_content("k", "gemini-2.0-flash", &request("Q"))
        .await
        .unwrap_err();

    assert!(matches!(err, ProviderError::Network(_)));
}
