use neura_core::{
    ChildProfile, DecisionOptions, IllustrationBatchRequest, IllustrationRequest, StoryStart,
};

#[test]
fn profile_uses_public_field_names() {
    let json = r#"{
        "username": "Sam",
        "age": 7,
        "gender": "boy",
        "favoriteColor": "blue",
        "favoriteAnimal": "dog",
        "favoriteFood": "pizza",
        "favoriteCartoon": "Bluey",
        "target_behavior": "sharing toys"
    }"#;

    let profile: ChildProfile = serde_json::from_str(json).expect("profile parses");
    assert_eq!(profile.favorite_cartoon(), "Bluey");
    assert_eq!(*profile.age(), 7);
    assert!(profile.validate().is_ok());
}

#[test]
fn profile_interests_are_optional() {
    let json = r#"{"username": "Ada", "age": 5, "target_behavior": "waiting in line"}"#;
    let profile: ChildProfile = serde_json::from_str(json).expect("profile parses");
    assert_eq!(profile.normalized().favorite_animal(), "not specified");
}

#[test]
fn story_start_serializes_options_as_array() {
    let start = StoryStart {
        partial_story: "1. Title\nTaking Turns".into(),
        title: "Taking Turns".into(),
        options: DecisionOptions::new("Wait.", "Push.", "Leave.").unwrap(),
    };

    let value = serde_json::to_value(&start).unwrap();
    assert_eq!(value["options"], serde_json::json!(["Wait.", "Push.", "Leave."]));
}

#[test]
fn decision_options_reject_wrong_length_on_deserialize() {
    let two: Result<DecisionOptions, _> = serde_json::from_str(r#"["a", "b"]"#);
    assert!(two.is_err());

    let dupes: Result<DecisionOptions, _> = serde_json::from_str(r#"["a", "A ", "b"]"#);
    assert!(dupes.is_err());
}

#[test]
fn illustration_request_defaults_are_unset() {
    let request: IllustrationRequest =
        serde_json::from_str(r#"{"section_text": "Sam waits for the slide."}"#).unwrap();
    assert_eq!(request.width, None);
    assert_eq!(request.nologo, None);
    assert!(request.validate().is_ok());
}

#[test]
fn illustration_request_rejects_out_of_range_section() {
    let request = IllustrationRequest::new("Sam waits.").with_section_index(10u8);
    assert_eq!(request.validate().unwrap_err().field, "section_index");
}

#[test]
fn batch_must_hold_one_to_nine_sections() {
    assert!(IllustrationBatchRequest::new(Vec::<String>::new()).validate().is_err());
    assert!(IllustrationBatchRequest::new(vec!["x"; 10]).validate().is_err());
    assert!(IllustrationBatchRequest::new(vec!["x"; 9]).validate().is_ok());
}
