//! Request validation errors.

/// A required field was missing, empty, or out of range.
///
/// Surfaced to the caller immediately and never retried.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Validation Error: {} {} at line {} in {}", field, reason, line, file)]
pub struct ValidationError {
    /// Name of the offending field
    pub field: String,
    /// What is wrong with it
    pub reason: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ValidationError {
    /// Create a new ValidationError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use neura_error::ValidationError;
    ///
    /// let err = ValidationError::new("target_behavior", "is required");
    /// assert_eq!(err.field, "target_behavior");
    /// assert!(err.to_string().contains("is required"));
    /// ```
    #[track_caller]
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            field: field.into(),
            reason: reason.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Human readable message without location information.
    pub fn detail(&self) -> String {
        format!("{} {}", self.field, self.reason)
    }
}
