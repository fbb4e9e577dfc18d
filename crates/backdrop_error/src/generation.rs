//! Empty generation error types.

/// The image service answered successfully but returned no image.
///
/// Kept apart from [`ServiceError`](crate::ServiceError) so callers can tell a
/// refused or empty generation from a transport failure.
///
/// # Examples
///
/// ```
/// use backdrop_error::EmptyGenerationError;
///
/// let err = EmptyGenerationError::new("No image generated");
/// assert_eq!(err.message, "No image generated");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Empty Generation: {} at line {} in {}", message, line, file)]
pub struct EmptyGenerationError {
    /// Explanation, including any block reason reported by the service
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl EmptyGenerationError {
    /// Create a new EmptyGenerationError with the given message at the current location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
