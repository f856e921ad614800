//! Story request and response records.

use crate::DecisionOptions;
use neura_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Result of the start-story flow: sections 1-4 plus the parsed decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryStart {
    /// Raw text of sections 1-4 from the last attempt; the caller keeps it
    /// and sends it back on the continue call
    pub partial_story: String,
    /// Parsed title, `"Story"` when none was found
    pub title: String,
    /// Exactly three options in A, B, C order
    pub options: DecisionOptions,
}

/// Continue-story request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct ContinueRequest {
    /// Sections 1-4 as returned by the start call
    partial_story: String,
    /// The option text the child picked
    selected_option: String,
}

impl ContinueRequest {
    /// Creates a continue request.
    pub fn new(partial_story: impl Into<String>, selected_option: impl Into<String>) -> Self {
        Self {
            partial_story: partial_story.into(),
            selected_option: selected_option.into(),
        }
    }

    /// Checks both fields are present.
    ///
    /// The selected option is not required to match one of the original options.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.partial_story.trim().is_empty() {
            return Err(ValidationError::new("partial_story", "is required"));
        }
        if self.selected_option.trim().is_empty() {
            return Err(ValidationError::new("selected_option", "is required"));
        }
        Ok(())
    }
}

/// Sections 5-9 produced by the continue flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContinuation {
    /// Cleaned continuation text starting at section 5
    pub continuation: String,
}

/// A single-shot nine-section story and the prompt that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FullStory {
    /// Prompt sent to the model
    pub prompt: String,
    /// Model output
    pub story: String,
}

/// One numbered section ("page") of a story.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StorySection {
    /// Section number as written by the model
    pub number: u8,
    /// First line of the section, number stripped
    pub heading: String,
    /// Remaining lines
    pub body: String,
}

impl StorySection {
    /// Text used as illustration input: `"<n>. <heading>\n<body>"`.
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_core::StorySection;
    ///
    /// let section = StorySection {
    ///     number: 2,
    ///     heading: "Introduction".into(),
    ///     body: "Sam is at the park.".into(),
    /// };
    /// assert_eq!(section.illustration_text(), "2. Introduction\nSam is at the park.");
    /// ```
    pub fn illustration_text(&self) -> String {
        format!("{}. {}\n{}", self.number, self.heading, self.body)
    }
}
