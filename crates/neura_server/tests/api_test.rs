//! HTTP surface tests against the real router on an ephemeral port.

use async_trait::async_trait;
use neura_error::{CompletionError, CompletionErrorKind, NeuraResult};
use neura_illustration::{IllustrationConfig, Illustrator};
use neura_interface::{GenerateRequest, TextGenerator};
use neura_server::{AppState, create_router};
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Mock generator that replays canned replies; an exhausted script fails
/// like an unreachable provider.
struct ScriptedGenerator {
    replies: Mutex<VecDeque<&'static str>>,
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, _req: &GenerateRequest) -> NeuraResult<String> {
        match self.replies.lock().unwrap().pop_front() {
            Some(reply) => Ok(reply.to_string()),
            None => Err(CompletionError::new(CompletionErrorKind::UpstreamUnavailable(
                "connection refused".to_string(),
            ))
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

async fn spawn_server(replies: Vec<&'static str>) -> String {
    let generator = Arc::new(ScriptedGenerator {
        replies: Mutex::new(replies.into()),
    });
    let illustrator = Illustrator::new(
        IllustrationConfig::builder()
            .base_url("https://img.test/prompt/")
            .build()
            .unwrap(),
    );
    let app = create_router(AppState::new(generator, illustrator));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn post(base: &str, path: &str, body: Value) -> (u16, Value) {
    let response = reqwest::Client::new()
        .post(format!("{}{}", base, path))
        .json(&body)
        .send()
        .await
        .unwrap();
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

fn profile() -> Value {
    json!({
        "username": "Sam",
        "age": 7,
        "gender": "boy",
        "favoriteColor": "blue",
        "favoriteAnimal": "dog",
        "favoriteFood": "",
        "favoriteCartoon": "",
        "target_behavior": "waiting in line"
    })
}

const START: &str = "1. Title\nWaiting in Line\n2. Sam is at the cafeteria.\n3. The line is long. What should Sam do?\n4. Decision\nA. Sam waits for his turn.\nB. Sam pushes to the front.\nC. Sam leaves the line.";

#[tokio::test]
async fn health_reports_ok() {
    let base = spawn_server(vec![]).await;
    let body: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn start_then_continue() {
    let base = spawn_server(vec![
        START,
        "5. Sam waits.\n6. Mia smiles.\n7. Sam says thanks.\n8. They eat.\n9. Sam is proud.",
    ])
    .await;

    let (status, start) = post(&base, "/api/story/generate-story/start", profile()).await;
    assert_eq!(status, 200);
    assert_eq!(start["title"], "Waiting in Line");
    assert_eq!(
        start["options"],
        json!([
            "Sam waits for his turn.",
            "Sam pushes to the front.",
            "Sam leaves the line."
        ])
    );

    let (status, rest) = post(
        &base,
        "/api/story/generate-story/continue",
        json!({
            "partial_story": start["partial_story"],
            "selected_option": start["options"][0],
        }),
    )
    .await;
    assert_eq!(status, 200);
    assert!(rest["continuation"].as_str().unwrap().starts_with("5. Sam waits."));
}

#[tokio::test]
async fn full_story_returns_prompt_and_story() {
    let base = spawn_server(vec!["1. Title\nLine Up\n9. Sam is proud."]).await;
    let (status, body) = post(&base, "/api/story/generate-story", profile()).await;

    assert_eq!(status, 200);
    assert!(body["prompt"].as_str().unwrap().contains("Favorite Food: not specified"));
    assert_eq!(body["story"], "1. Title\nLine Up\n9. Sam is proud.");
}

#[tokio::test]
async fn blank_username_is_bad_request() {
    let base = spawn_server(vec![START]).await;
    let mut body = profile();
    body["username"] = json!("  ");
    let (status, body) = post(&base, "/api/story/generate-story/start", body).await;

    assert_eq!(status, 400);
    assert_eq!(body["detail"], "username is required");
}

#[tokio::test]
async fn malformed_body_is_bad_request() {
    let base = spawn_server(vec![]).await;
    let (status, body) = post(&base, "/api/story/generate-story/start", json!({"age": 7})).await;

    assert_eq!(status, 400);
    assert!(body["detail"].as_str().unwrap().contains("username"));
}

#[tokio::test]
async fn invalid_continuation_is_bad_gateway() {
    let base = spawn_server(vec!["Sam waited and everyone was happy."]).await;
    let (status, body) = post(
        &base,
        "/api/story/generate-story/continue",
        json!({"partial_story": START, "selected_option": "Sam waits."}),
    )
    .await;

    assert_eq!(status, 502);
    assert_eq!(
        body["detail"],
        "Model returned invalid continuation. Please try again."
    );
}

#[tokio::test]
async fn unreachable_provider_is_bad_gateway() {
    let base = spawn_server(vec![]).await;
    let (status, body) = post(&base, "/api/story/generate-story", profile()).await;

    assert_eq!(status, 502);
    assert!(body["detail"].as_str().unwrap().contains("network"));
}

#[tokio::test]
async fn illustrate_single_section() {
    let base = spawn_server(vec![]).await;
    let (status, body) = post(
        &base,
        "/api/images/illustrate",
        json!({"section_text": "Sam waits for the slide.", "width": 10000, "username": "alice", "section_index": 3}),
    )
    .await;

    assert_eq!(status, 200);
    let url = body["url"].as_str().unwrap();
    assert!(url.starts_with("https://img.test/prompt/"));
    assert!(url.ends_with("?width=1536&height=896&seed=986383321&nologo=true"));
    assert!(body["prompt"].as_str().unwrap().contains("Sam waits for the slide."));
}

#[tokio::test]
async fn illustrate_batch_numbers_sections() {
    let base = spawn_server(vec![]).await;
    let (status, body) = post(
        &base,
        "/api/images/illustrate/batch",
        json!({"sections": ["Sam wakes up.", "", "Sam eats."], "seed": 5}),
    )
    .await;

    assert_eq!(status, 200);
    let sections: Vec<u64> = body["images"]
        .as_array()
        .unwrap()
        .iter()
        .map(|item| item["section"].as_u64().unwrap())
        .collect();
    assert_eq!(sections, vec![1, 3]);
}

#[tokio::test]
async fn illustrate_batch_of_blanks_is_bad_request() {
    let base = spawn_server(vec![]).await;
    let (status, body) = post(
        &base,
        "/api/images/illustrate/batch",
        json!({"sections": ["  ", ""]}),
    )
    .await;

    assert_eq!(status, 400);
    assert_eq!(body["detail"], "No valid sections provided.");
}
