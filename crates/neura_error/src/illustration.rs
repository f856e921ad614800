//! Illustration error types.

/// Specific error conditions for illustration requests.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IllustrationErrorKind {
    /// Every entry of a batch request was blank
    #[display("No valid sections provided.")]
    NoValidSections,
}

/// Error type for illustration operations.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Illustration Error: {} at line {} in {}", kind, line, file)]
pub struct IllustrationError {
    /// The specific error condition
    pub kind: IllustrationErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl IllustrationError {
    /// Create a new IllustrationError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IllustrationErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
