//! Top-level error wrapper types.

use crate::{
    BuilderError, CompletionError, CompletionErrorKind, ConfigError, IllustrationError,
    StoryError, ValidationError,
};

/// Every failure a Neura operation can surface.
///
/// # Examples
///
/// ```
/// use neura_error::{NeuraError, ValidationError};
///
/// let err: NeuraError = ValidationError::new("username", "is required").into();
/// assert!(format!("{}", err).contains("Validation Error"));
/// assert_eq!(err.status_code(), 400);
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum NeuraErrorKind {
    /// Missing or malformed request field
    #[from(ValidationError)]
    Validation(ValidationError),
    /// Text-generation provider failure
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Story pipeline failure
    #[from(StoryError)]
    Story(StoryError),
    /// Illustration failure
    #[from(IllustrationError)]
    Illustration(IllustrationError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Builder error
    #[from(BuilderError)]
    Builder(BuilderError),
}

/// Neura error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Neura Error: {}", _0)]
pub struct NeuraError(Box<NeuraErrorKind>);

impl NeuraError {
    /// Create a new error from a kind.
    pub fn new(kind: NeuraErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &NeuraErrorKind {
        &self.0
    }

    /// HTTP status the error should be reported with.
    ///
    /// Validation problems and empty batches are the caller's fault (400);
    /// provider failures and unusable continuations are gateway errors (502);
    /// an empty model response and local misconfiguration are 500.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            NeuraErrorKind::Validation(_) | NeuraErrorKind::Illustration(_) => 400,
            NeuraErrorKind::Completion(e) => match e.kind {
                CompletionErrorKind::UpstreamUnavailable(_)
                | CompletionErrorKind::UpstreamError { .. } => 502,
                CompletionErrorKind::UpstreamEmptyResponse
                | CompletionErrorKind::Configuration(_) => 500,
            },
            NeuraErrorKind::Story(_) => 502,
            NeuraErrorKind::Config(_) | NeuraErrorKind::Builder(_) => 500,
        }
    }

    /// Message suitable for an API response body, without source locations.
    pub fn detail(&self) -> String {
        match self.kind() {
            NeuraErrorKind::Validation(e) => e.detail(),
            NeuraErrorKind::Completion(e) => e.kind.to_string(),
            NeuraErrorKind::Story(e) => e.kind.to_string(),
            NeuraErrorKind::Illustration(e) => e.kind.to_string(),
            NeuraErrorKind::Config(e) => e.message.clone(),
            NeuraErrorKind::Builder(e) => e.kind().to_string(),
        }
    }
}

// Generic From implementation for any type that converts to NeuraErrorKind
impl<T> From<T> for NeuraError
where
    T: Into<NeuraErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Neura operations.
pub type NeuraResult<T> = std::result::Result<T, NeuraError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{IllustrationErrorKind, StoryErrorKind};

    #[test]
    fn status_codes_follow_taxonomy() {
        let unavailable: NeuraError =
            CompletionError::new(CompletionErrorKind::UpstreamUnavailable("refused".into())).into();
        assert_eq!(unavailable.status_code(), 502);

        let upstream: NeuraError =
            CompletionError::new(CompletionErrorKind::upstream(500, "boom", "")).into();
        assert_eq!(upstream.status_code(), 502);

        let empty: NeuraError =
            CompletionError::new(CompletionErrorKind::UpstreamEmptyResponse).into();
        assert_eq!(empty.status_code(), 500);

        let continuation: NeuraError = StoryError::new(StoryErrorKind::InvalidContinuation).into();
        assert_eq!(continuation.status_code(), 502);

        let batch: NeuraError =
            IllustrationError::new(IllustrationErrorKind::NoValidSections).into();
        assert_eq!(batch.status_code(), 400);
    }

    #[test]
    fn detail_omits_location() {
        let err: NeuraError =
            CompletionError::new(CompletionErrorKind::upstream(429, "slow down", "")).into();
        assert_eq!(err.detail(), "Story generation failed (HTTP 429): slow down");
        assert!(!err.detail().contains("line"));
    }
}
