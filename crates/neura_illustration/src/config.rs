//! Renderer endpoint and request defaults.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "https://image.pollinations.ai/prompt/";

/// Image renderer configuration.
///
/// Request fields left unset fall back to these values.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into), default, build_fn(error = "neura_error::BuilderError"))]
#[serde(default)]
pub struct IllustrationConfig {
    /// Prompt endpoint; the encoded prompt is appended as the last path segment
    base_url: String,
    /// Width used when a request sets none
    default_width: u32,
    /// Height used when a request sets none
    default_height: u32,
    /// Whether to ask for no renderer logo when a request does not say
    default_nologo: bool,
}

impl Default for IllustrationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_width: 896,
            default_height: 896,
            default_nologo: true,
        }
    }
}

impl IllustrationConfig {
    /// Creates a new config builder.
    pub fn builder() -> IllustrationConfigBuilder {
        IllustrationConfigBuilder::default()
    }
}
