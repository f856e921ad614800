//! Illustration request and response records.

use neura_error::ValidationError;
use serde::{Deserialize, Serialize};

/// Shortest accepted section text, after trimming.
pub const MIN_SECTION_TEXT_CHARS: usize = 3;

/// Most sections a batch may carry (one per story section).
pub const MAX_BATCH_SECTIONS: usize = 9;

/// Request to illustrate one story section.
///
/// Unset dimensions and `nologo` fall back to the illustrator's configuration.
///
/// # Examples
///
/// ```
/// use neura_core::IllustrationRequest;
///
/// let request = IllustrationRequest::new("Sam waits for the slide.")
///     .with_username("Sam")
///     .with_section_index(3u8);
/// assert!(request.validate().is_ok());
/// assert!(IllustrationRequest::new(" a ").validate().is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct IllustrationRequest {
    /// Section text to draw
    #[setters(skip)]
    pub section_text: String,
    /// Requested width in pixels, clamped to 256-1536
    #[serde(default)]
    pub width: Option<u32>,
    /// Requested height in pixels, clamped to 256-1536
    #[serde(default)]
    pub height: Option<u32>,
    /// Explicit seed
    #[serde(default)]
    pub seed: Option<u64>,
    /// Renderer model name
    #[serde(default)]
    pub model: Option<String>,
    /// Ask the renderer to omit its logo
    #[serde(default)]
    pub nologo: Option<bool>,
    /// Ordered reference image URLs (main child first, then other characters, then places)
    #[serde(default)]
    pub reference_images: Option<Vec<String>>,
    /// Used with `section_index` to derive a stable seed
    #[serde(default)]
    pub username: Option<String>,
    /// 1-based story section (1-9)
    #[serde(default)]
    pub section_index: Option<u8>,
}

impl IllustrationRequest {
    /// Creates a request for `section_text` with every option unset.
    pub fn new(section_text: impl Into<String>) -> Self {
        Self {
            section_text: section_text.into(),
            ..Self::default()
        }
    }

    /// Checks the section text length and section index range.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.section_text.trim().chars().count() < MIN_SECTION_TEXT_CHARS {
            return Err(ValidationError::new(
                "section_text",
                format!("must be at least {} characters", MIN_SECTION_TEXT_CHARS),
            ));
        }
        match self.section_index {
            Some(index) if !(1..=MAX_BATCH_SECTIONS).contains(&usize::from(index)) => {
                Err(ValidationError::new(
                    "section_index",
                    format!("must be between 1 and {}, got {}", MAX_BATCH_SECTIONS, index),
                ))
            }
            _ => Ok(()),
        }
    }
}

/// Request to illustrate several sections at once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, derive_setters::Setters)]
#[setters(prefix = "with_", strip_option, into)]
pub struct IllustrationBatchRequest {
    /// Section texts in story order; blank entries are skipped
    #[setters(skip)]
    pub sections: Vec<String>,
    /// Requested width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Requested height in pixels
    #[serde(default)]
    pub height: Option<u32>,
    /// Explicit seed applied to every section
    #[serde(default)]
    pub seed: Option<u64>,
    /// Renderer model name
    #[serde(default)]
    pub model: Option<String>,
    /// Ask the renderer to omit its logo
    #[serde(default)]
    pub nologo: Option<bool>,
    /// Ordered reference image URLs shared by all sections
    #[serde(default)]
    pub reference_images: Option<Vec<String>>,
    /// Used to derive per-section seeds when no explicit seed is set
    #[serde(default)]
    pub username: Option<String>,
}

impl IllustrationBatchRequest {
    /// Creates a batch request with every option unset.
    pub fn new<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sections: sections.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Checks the batch carries between 1 and 9 entries.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.sections.is_empty() {
            return Err(ValidationError::new("sections", "must be a non-empty list"));
        }
        if self.sections.len() > MAX_BATCH_SECTIONS {
            return Err(ValidationError::new(
                "sections",
                format!(
                    "must contain at most {} entries, got {}",
                    MAX_BATCH_SECTIONS,
                    self.sections.len()
                ),
            ));
        }
        Ok(())
    }
}

/// A renderable image URL and the prompt encoded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Illustration {
    /// Fully encoded renderer URL
    pub url: String,
    /// Prompt text (at most 6000 characters)
    pub prompt: String,
}

/// One illustrated section of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustrationBatchItem {
    /// 1-based index of the section in the request
    pub section: u8,
    /// Fully encoded renderer URL
    pub url: String,
    /// Prompt text
    pub prompt: String,
}

/// Result of a batch request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IllustrationBatch {
    /// Illustrated sections in request order, blanks omitted
    pub images: Vec<IllustrationBatchItem>,
}
