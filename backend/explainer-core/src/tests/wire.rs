// Unit tests for the generateContent wire types

use crate::gemini::wire::{GenerateContentRequest, GenerateContentResponse};

#[test]
fn given_prompt_when_request_built_then_serializes_to_contents_parts_shape() {
    let request = GenerateContentRequest::from_prompt(String::from("explain this"));

    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(json["contents"][0]["parts"][0]["text"], "explain this");
}

#[test]
fn given_full_response_when_parsed_then_first_candidate_text_found() {
    let body = r#"{
        "candidates": [
            {"content": {"parts": [{"text": "It adds numbers."}]}},
            {"content": {"parts": [{"text": "Second candidate, ignored."}]}}
        ],
        "modelVersion": "test"
    }"#;

    let response: GenerateContentResponse = serde_json::from_str(body).unwrap();

    assert_eq!(response.first_candidate_text(), Some("It adds numbers."));
}

/// **VALUE**: A body without candidates - or with an empty candidate - must
/// parse cleanly and yield no text, so the client can report "no
/// explanation generated" instead of a deserialization fault.
#[test]
fn given_degenerate_bodies_when_parsed_then_no_candidate_text() {
    let no_candidates: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
    assert_eq!(no_candidates.first_candidate_text(), None);

    let empty_list: GenerateContentResponse =
        serde_json::from_str(r#"{"candidates": []}"#).unwrap();
    assert_eq!(empty_list.first_candidate_text(), None);

    let no_content: GenerateContentResponse =
        serde_json::from_str(r#"{"candidates": [{}]}"#).unwrap();
    assert_eq!(no_content.first_candidate_text(), None);

    let no_parts: GenerateContentResponse =
        serde_json::from_str(r#"{"candidates": [{"content": {}}]}"#).unwrap();
    assert_eq!(no_parts.first_candidate_text(), None);
}
