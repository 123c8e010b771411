// Unit tests for Match Client wire formats

use match_client::models::{MatchPayload, MatchResult, NextMatch, ProfileId, UpdateMatchResponse};
use match_client::MatchClientError;
use serde_json::json;

#[test]
fn test_payload_wire_format_string_id() {
    let payload = MatchPayload::new("dajkdanwhjkdnijd2i3j1jkn", MatchResult::Success);

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"otherProfileId": "dajkdanwhjkdnijd2i3j1jkn", "result": "success"})
    );
}

#[test]
fn test_payload_wire_format_numeric_id() {
    let payload = MatchPayload::new(1234_u64, MatchResult::Denial);

    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        json!({"otherProfileId": 1234, "result": "denial"})
    );
}

#[test]
fn test_payload_has_exactly_two_fields() {
    let value = serde_json::to_value(MatchPayload::new("p", MatchResult::Denial)).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert!(object.contains_key("otherProfileId"));
    assert!(object.contains_key("result"));
}

#[test]
fn test_payload_deserialize_rejects_unknown_result() {
    let parsed: Result<MatchPayload, _> =
        serde_json::from_value(json!({"otherProfileId": "p", "result": "maybe"}));
    assert!(parsed.is_err());

    let parsed: Result<MatchPayload, _> =
        serde_json::from_value(json!({"otherProfileId": "p", "result": null}));
    assert!(parsed.is_err());
}

#[test]
fn test_profile_id_deserialize_keeps_kind() {
    let numeric: ProfileId = serde_json::from_value(json!(7)).unwrap();
    let text: ProfileId = serde_json::from_value(json!("7")).unwrap();

    assert_eq!(numeric, ProfileId::from(7_i64));
    assert_eq!(text, ProfileId::from("7"));
    assert_ne!(numeric, text);
    assert_eq!(numeric.to_string(), text.to_string());
}

#[test]
fn test_match_result_try_from() {
    assert_eq!(MatchResult::try_from("denial").unwrap(), MatchResult::Denial);
    assert!(matches!(
        MatchResult::try_from("nope"),
        Err(MatchClientError::InvalidArgument(_))
    ));
}

#[test]
fn test_next_match_minimal_body() {
    let next: NextMatch = serde_json::from_value(json!({"name": "Marc"})).unwrap();

    assert_eq!(next.name, "Marc");
    assert!(next.pictures.is_empty());
    assert!(next.link_to_profile.is_none());
    assert!(next.extra.is_empty());
}

#[test]
fn test_update_response_rejects_unknown_result() {
    let parsed: Result<UpdateMatchResponse, _> =
        serde_json::from_value(json!({"message": "ok", "result": "pending"}));
    assert!(parsed.is_err());
}
