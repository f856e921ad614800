//! HTTP API for story generation and illustration.

use crate::NeuraConfig;
use axum::{
    Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use neura_completion::CompletionClient;
use neura_core::{
    ChildProfile, ContinueRequest, FullStory, Illustration, IllustrationBatch,
    IllustrationBatchRequest, IllustrationRequest, StoryContinuation, StoryStart,
};
use neura_error::{NeuraError, NeuraResult, ValidationError};
use neura_illustration::Illustrator;
use neura_interface::TextGenerator;
use neura_story::StoryGenerator;
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    stories: Arc<StoryGenerator<Arc<dyn TextGenerator>>>,
    illustrator: Arc<Illustrator>,
}

impl AppState {
    /// Creates state from a text generator and an illustrator.
    pub fn new(generator: Arc<dyn TextGenerator>, illustrator: Illustrator) -> Self {
        Self {
            stories: Arc::new(StoryGenerator::new(generator)),
            illustrator: Arc::new(illustrator),
        }
    }

    /// Builds the completion client and illustrator described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn from_config(config: &NeuraConfig) -> NeuraResult<Self> {
        let client = CompletionClient::new(config.completion().clone())?;
        Ok(Self::new(
            Arc::new(client),
            Illustrator::new(config.illustration().clone()),
        ))
    }
}

/// A [`NeuraError`] rendered as `{"detail": ...}` with its HTTP status.
#[derive(Debug)]
pub struct ApiError(NeuraError);

impl<E: Into<NeuraError>> From<E> for ApiError {
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self.0, "Request failed");
        } else {
            warn!(status = status.as_u16(), error = %self.0, "Request rejected");
        }
        (status, Json(json!({ "detail": self.0.detail() }))).into_response()
    }
}

/// Unwraps a JSON body, turning malformed payloads into validation errors.
fn payload<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, ApiError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| ValidationError::new("body", rejection.body_text()).into())
}

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/api/story/generate-story", post(generate_story))
        .route("/api/story/generate-story/start", post(start_story))
        .route("/api/story/generate-story/continue", post(continue_story))
        .route("/api/images/illustrate", post(illustrate))
        .route("/api/images/illustrate/batch", post(illustrate_batch))
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}

async fn generate_story(
    State(state): State<AppState>,
    body: Result<Json<ChildProfile>, JsonRejection>,
) -> Result<Json<FullStory>, ApiError> {
    let profile = payload(body)?;
    Ok(Json(state.stories.full_story(&profile).await?))
}

async fn start_story(
    State(state): State<AppState>,
    body: Result<Json<ChildProfile>, JsonRejection>,
) -> Result<Json<StoryStart>, ApiError> {
    let profile = payload(body)?;
    Ok(Json(state.stories.start_story(&profile).await?))
}

async fn continue_story(
    State(state): State<AppState>,
    body: Result<Json<ContinueRequest>, JsonRejection>,
) -> Result<Json<StoryContinuation>, ApiError> {
    let request = payload(body)?;
    Ok(Json(state.stories.continue_story(&request).await?))
}

async fn illustrate(
    State(state): State<AppState>,
    body: Result<Json<IllustrationRequest>, JsonRejection>,
) -> Result<Json<Illustration>, ApiError> {
    let request = payload(body)?;
    Ok(Json(state.illustrator.illustrate(&request)?))
}

async fn illustrate_batch(
    State(state): State<AppState>,
    body: Result<Json<IllustrationBatchRequest>, JsonRejection>,
) -> Result<Json<IllustrationBatch>, ApiError> {
    let request = payload(body)?;
    Ok(Json(state.illustrator.illustrate_batch(&request)?))
}
