//! Start, continue and full-story flows against a scripted generator.

use async_trait::async_trait;
use neura_core::{ChildProfile, ContinueRequest, DecisionOptions, OptionRole};
use neura_error::{
    CompletionError, CompletionErrorKind, NeuraErrorKind, NeuraResult, StoryErrorKind,
};
use neura_interface::{GenerateRequest, TextGenerator};
use neura_story::StoryGenerator;
use std::collections::VecDeque;
use std::sync::Mutex;

/// One scripted model reply.
enum Reply {
    Text(&'static str),
    Unavailable,
}

/// Mock generator that replays a script and records every request.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<Reply>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedGenerator {
    fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            requests: Mutex::new(Vec::new()),
        }
    }

    fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, req: &GenerateRequest) -> NeuraResult<String> {
        self.requests.lock().unwrap().push(req.clone());
        match self.replies.lock().unwrap().pop_front() {
            Some(Reply::Text(text)) => Ok(text.to_string()),
            Some(Reply::Unavailable) | None => Err(CompletionError::new(
                CompletionErrorKind::UpstreamUnavailable("connection refused".to_string()),
            )
            .into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "scripted"
    }

    fn model_name(&self) -> &str {
        "scripted-v1"
    }
}

fn sam() -> ChildProfile {
    ChildProfile::builder()
        .username("Sam")
        .age(7u8)
        .favorite_animal("dog")
        .target_behavior("waiting in line")
        .build()
        .unwrap()
}

const WELL_FORMED: &str = "1. Title\nWaiting in Line\n2. Sam is at the cafeteria with his class.\n3. The line is long. What should Sam do?\n4. Decision\nA. Sam waits for his turn.\nB. Sam pushes to the front.\nC. Sam leaves the line.";

const DUPLICATED: &str = "1. Title\nLunch\n2. Sam is hungry.\n3. What should Sam do?\n4. Decision\nA. Sam waits.\nB. sam   waits.\nC. Sam waits.";

#[tokio::test]
async fn start_story_parses_well_formed_output() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(WELL_FORMED)]));
    let start = generator.start_story(&sam()).await.unwrap();

    assert_eq!(start.title, "Waiting in Line");
    assert_eq!(
        start.options.as_slice(),
        &[
            "Sam waits for his turn.",
            "Sam pushes to the front.",
            "Sam leaves the line."
        ]
    );
    assert_eq!(start.partial_story, WELL_FORMED);

    let requests = generator.generator().requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(*requests[0].max_tokens(), Some(900));
    assert!(requests[0].prompt().contains("Name: Sam"));
}

const BULLETED: &str = "1. Title\nWaiting in Line\n2. Sam is at the cafeteria.\n3. What should Sam do?\n4. Decision\n- Sam waits for his turn.\n- Sam pushes to the front.\n- Sam leaves the line.";

const UNMARKED: &str = "1. Title\nWaiting in Line\n2. Sam is at the cafeteria.\n3. What should Sam do?\n4. Decision\nSam waits for his turn.\n\nSam pushes to the front.\nSam leaves the line.";

#[tokio::test]
async fn start_story_reads_bulleted_and_unmarked_decisions() {
    for reply in [BULLETED, UNMARKED] {
        let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(reply)]));
        let start = generator.start_story(&sam()).await.unwrap();

        assert_eq!(
            start.options.as_slice(),
            &[
                "Sam waits for his turn.",
                "Sam pushes to the front.",
                "Sam leaves the line."
            ]
        );
        assert_eq!(start.title, "Waiting in Line");
        assert_eq!(generator.generator().requests().len(), 1);
    }
}

#[tokio::test]
async fn start_story_retries_with_stricter_prompt() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![
        Reply::Text(DUPLICATED),
        Reply::Text(WELL_FORMED),
    ]));
    let start = generator.start_story(&sam()).await.unwrap();

    assert_eq!(start.title, "Waiting in Line");
    assert_eq!(start.options.get(OptionRole::Avoidant), "Sam leaves the line.");

    let requests = generator.generator().requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(*requests[1].max_tokens(), Some(700));
    assert!(!requests[0].prompt().contains("too similar"));
    assert!(requests[1].prompt().contains("too similar"));
}

#[tokio::test]
async fn start_story_falls_back_after_two_bad_attempts() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![
        Reply::Text(DUPLICATED),
        Reply::Text("I am sorry, I cannot help with that."),
    ]));
    let start = generator.start_story(&sam()).await.unwrap();

    assert_eq!(start.options, DecisionOptions::fallback_for("waiting in line"));
    assert_eq!(start.partial_story, "I am sorry, I cannot help with that.");
    assert_eq!(start.title, "Story");
    assert_eq!(generator.generator().requests().len(), 2);
}

#[tokio::test]
async fn start_story_keeps_first_text_when_retry_fails() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![
        Reply::Text(DUPLICATED),
        Reply::Unavailable,
    ]));
    let start = generator.start_story(&sam()).await.unwrap();

    assert_eq!(start.partial_story, DUPLICATED);
    assert_eq!(start.title, "Lunch");
    assert_eq!(start.options, DecisionOptions::fallback_for("waiting in line"));
}

#[tokio::test]
async fn start_story_surfaces_error_when_nothing_came_back() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![
        Reply::Unavailable,
        Reply::Unavailable,
    ]));
    let err = generator.start_story(&sam()).await.unwrap_err();

    assert_eq!(err.status_code(), 502);
    assert_eq!(generator.generator().requests().len(), 2);
}

#[tokio::test]
async fn start_story_validates_before_calling_the_model() {
    let profile = ChildProfile::builder()
        .username("Sam")
        .target_behavior("  ")
        .build()
        .unwrap();
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(WELL_FORMED)]));
    let err = generator.start_story(&profile).await.unwrap_err();

    assert!(matches!(err.kind(), NeuraErrorKind::Validation(_)));
    assert!(generator.generator().requests().is_empty());
}

#[tokio::test]
async fn continue_story_returns_sections_five_to_nine() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(
        "[Output]\n5. Sam waits.\n6. Mia smiles.\n7. Sam says thanks.\n8. They eat.\n9. Sam is proud.\nRules: none",
    )]));
    let request = ContinueRequest::new(WELL_FORMED, "Sam jumps on the table.");
    let continuation = generator.continue_story(&request).await.unwrap();

    assert_eq!(
        continuation.continuation,
        "5. Sam waits.\n6. Mia smiles.\n7. Sam says thanks.\n8. They eat.\n9. Sam is proud."
    );
    let requests = generator.generator().requests();
    assert!(requests[0].prompt().contains("Sam jumps on the table."));
    assert_eq!(*requests[0].max_tokens(), None);
}

#[tokio::test]
async fn continue_story_rejects_output_without_section_five() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(
        "Sam waited and everyone was happy.",
    )]));
    let request = ContinueRequest::new(WELL_FORMED, "Sam waits for his turn.");
    let err = generator.continue_story(&request).await.unwrap_err();

    match err.kind() {
        NeuraErrorKind::Story(e) => assert_eq!(e.kind, StoryErrorKind::InvalidContinuation),
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(err.status_code(), 502);
}

#[tokio::test]
async fn continue_story_requires_both_fields() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![]));
    let err = generator
        .continue_story(&ContinueRequest::new(WELL_FORMED, " "))
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), 400);
    assert!(generator.generator().requests().is_empty());
}

#[tokio::test]
async fn full_story_returns_prompt_and_text() {
    let generator = StoryGenerator::new(ScriptedGenerator::new(vec![Reply::Text(
        "1. Title\nLine Up\n2. ...\n9. Sam is proud.",
    )]));
    let story = generator.full_story(&sam()).await.unwrap();

    assert!(story.prompt.contains("Target Behavior: waiting in line"));
    assert!(story.story.ends_with("Sam is proud."));
    assert_eq!(generator.generator().requests()[0].prompt(), &story.prompt);
}
