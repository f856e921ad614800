//! Configuration for the text-generation provider connection

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://text.pollinations.ai/openai";
const DEFAULT_MODEL: &str = "openai";

/// Configuration for the text-generation provider connection.
///
/// `base_url` is the full chat-completion endpoint; the client posts to it as is.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default, build_fn(error = "neura_error::BuilderError"))]
#[serde(default)]
pub struct CompletionConfig {
    /// Chat-completion endpoint URL
    base_url: String,
    /// Model identifier sent with every request
    model: String,
    /// Optional bearer credential
    #[builder(setter(into, strip_option))]
    #[serde(skip_serializing)]
    api_key: Option<String>,
    /// Request timeout in seconds
    timeout_secs: u64,
    /// Sampling temperature
    temperature: f32,
    /// Output token budget when the caller does not set one
    default_max_tokens: u32,
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_secs: 60,
            temperature: 0.6,
            default_max_tokens: 900,
        }
    }
}

impl CompletionConfig {
    /// Creates a new config builder.
    pub fn builder() -> CompletionConfigBuilder {
        CompletionConfigBuilder::default()
    }
}
