//! Errors raised while talking to the text-generation provider.

/// Error kinds for completion requests.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
pub enum CompletionErrorKind {
    /// The provider could not be reached (DNS, connect, timeout, ...).
    #[display("Story generation failed (network): {}", _0)]
    UpstreamUnavailable(String),

    /// The provider answered with a non-success status.
    #[display("Story generation failed (HTTP {}): {}", status, snippet)]
    UpstreamError {
        /// HTTP status code returned by the provider
        status: u16,
        /// First 300 characters of the response body
        snippet: String,
    },

    /// The provider answered but the normalized text was empty.
    #[display("Empty response from model.")]
    UpstreamEmptyResponse,

    /// The client could not be constructed from its configuration.
    #[display("Completion client configuration error: {}", _0)]
    Configuration(String),
}

impl CompletionErrorKind {
    /// Maximum number of body characters kept in [`CompletionErrorKind::UpstreamError`].
    pub const SNIPPET_LIMIT: usize = 300;

    /// Build an `UpstreamError`, truncating the body to [`Self::SNIPPET_LIMIT`] characters.
    ///
    /// An empty body falls back to `reason` (the canonical status text).
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_error::CompletionErrorKind;
    ///
    /// let body = "x".repeat(1000);
    /// match CompletionErrorKind::upstream(503, &body, "Service Unavailable") {
    ///     CompletionErrorKind::UpstreamError { status, snippet } => {
    ///         assert_eq!(status, 503);
    ///         assert_eq!(snippet.chars().count(), 300);
    ///     }
    ///     other => panic!("unexpected kind: {other}"),
    /// }
    /// ```
    pub fn upstream(status: u16, body: &str, reason: &str) -> Self {
        let snippet = if body.is_empty() {
            reason.to_string()
        } else {
            body.chars().take(Self::SNIPPET_LIMIT).collect()
        };
        Self::UpstreamError { status, snippet }
    }
}

/// Completion error wrapper with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The error kind
    pub kind: CompletionErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// File where error occurred
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
