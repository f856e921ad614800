use serde::Deserialize;

/// Lenient view of a chat completion response body.
///
/// Every field is optional so that OpenAI-shaped bodies and the simpler
/// `{"response": ...}` / `{"text": ...}` variants all deserialize.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct ChatCompletionBody {
    /// Generated completions (OpenAI shape)
    #[serde(default)]
    pub choices: Vec<Choice>,
    /// Single-field variant
    #[serde(default)]
    pub response: Option<String>,
    /// Single-field variant
    #[serde(default)]
    pub text: Option<String>,
}

/// A completion choice
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Choice {
    /// The generated message
    #[serde(default)]
    pub message: ChoiceMessage,
}

/// Message in a choice
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ChoiceMessage {
    /// Generated content
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionBody {
    /// First non-blank of `choices[0].message.content`, `response`, `text`.
    pub fn content(&self) -> Option<&str> {
        let from_choice = self
            .choices
            .first()
            .and_then(|c| c.message.content.as_deref());
        [from_choice, self.response.as_deref(), self.text.as_deref()]
            .into_iter()
            .flatten()
            .find(|s| !s.trim().is_empty())
    }
}

/// Normalize a provider response body to trimmed plain text.
///
/// JSON bodies with recognizable content yield that content; anything else
/// (plain text, JSON without content) is returned as the whole body.
///
/// # Examples
///
/// ```
/// use neura_completion::normalize_body;
///
/// let json = r#"{"choices":[{"message":{"content":"  Once upon a time  "}}]}"#;
/// assert_eq!(normalize_body(json), "Once upon a time");
/// assert_eq!(normalize_body(r#"{"response":"hi"}"#), "hi");
/// assert_eq!(normalize_body("  plain story \n"), "plain story");
/// ```
pub fn normalize_body(body: &str) -> String {
    serde_json::from_str::<ChatCompletionBody>(body)
        .ok()
        .and_then(|parsed| parsed.content().map(|c| c.trim().to_string()))
        .unwrap_or_else(|| body.trim().to_string())
}
