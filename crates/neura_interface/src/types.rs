//! Provider-neutral request type.

use serde::{Deserialize, Serialize};

/// A single-prompt generation request.
///
/// A request without a token budget leaves the choice to the generator's
/// configured default.
///
/// # Examples
///
/// ```
/// use neura_interface::GenerateRequest;
///
/// let request = GenerateRequest::new("Write a story.").with_max_tokens(700);
/// assert_eq!(*request.max_tokens(), Some(700));
/// assert_eq!(*GenerateRequest::new("x").max_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, derive_getters::Getters)]
pub struct GenerateRequest {
    /// Prompt sent as the single user message
    prompt: String,
    /// Maximum number of output tokens, if the caller sets one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl GenerateRequest {
    /// Creates a request that uses the generator's default token budget.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            max_tokens: None,
        }
    }

    /// Sets the output token budget.
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}
