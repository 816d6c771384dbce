use super::*;

#[test]
fn test_request_serializes_camel_case() {
    let request = GenerateContentRequest {
        contents: vec![Content::user(vec![Part::Text {
            text: "hello".to_string(),
        }])],
        generation_config: Some(GenerationConfig {
            temperature: Some(0.0),
            max_output_tokens: Some(64),
        }),
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(json.contains("generationConfig"));
    assert!(json.contains("maxOutputTokens"));
    assert!(json.contains(r#""role":"user""#));
}

#[test]
fn test_request_omits_empty_generation_config() {
    let request = GenerateContentRequest {
        contents: vec![],
        generation_config: None,
    };
    let json = serde_json::to_string(&request).unwrap();
    assert!(!json.contains("generationConfig"));
}

#[test]
fn test_inline_data_part_shape() {
    let part = Part::InlineData {
        inline_data: InlineData {
            mime_type: "image/png".to_string(),
            data: "aGk=".to_string(),
        },
    };
    let json = serde_json::to_string(&part).unwrap();
    assert!(json.contains("inline_data"));
    assert!(json.contains("image/png"));
}

#[test]
fn test_response_decodes_text_candidate() {
    let json = r#"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "London"}]},
            "finishReason": "STOP"
        }]
    }"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    assert_eq!(response.candidates.len(), 1);
    assert_eq!(
        response.candidates[0].finish_reason.as_deref(),
        Some("STOP")
    );
    match &response.candidates[0].content.parts[0] {
        Part::Text { text } => assert_eq!(text, "London"),
        other => panic!("unexpected part: {other:?}"),
    }
}

#[test]
fn test_response_tolerates_missing_candidates() {
    let response: GenerateContentResponse =
        serde_json::from_str(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#).unwrap();
    assert!(response.candidates.is_empty());
    assert!(response.extra.contains_key("promptFeedback"));
}

#[test]
fn test_unknown_part_shape_falls_into_other() {
    let json = r#"{
        "candidates": [{
            "content": {"role": "model", "parts": [{"functionCall": {"name": "x"}}]}
        }]
    }"#;
    let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
    assert!(matches!(
        response.candidates[0].content.parts[0],
        Part::Other(_)
    ));
}

#[test]
fn test_error_response_decodes() {
    let json = r#"{
        "error": {"code": 429, "message": "Quota exceeded", "status": "RESOURCE_EXHAUSTED"}
    }"#;
    let error: GeminiError = serde_json::from_str(json).unwrap();
    assert_eq!(error.error.code, 429);
    assert_eq!(error.error.status, "RESOURCE_EXHAUSTED");
}
