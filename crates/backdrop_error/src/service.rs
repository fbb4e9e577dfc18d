//! Image service error types and retry classification.

/// Failure conditions reported by the external image service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ServiceErrorKind {
    /// HTTP client could not be constructed
    #[display("Failed to create image service client: {}", _0)]
    ClientCreation(String),
    /// Request never produced a response (connect, timeout, TLS)
    #[display("Image service request failed: {}", _0)]
    Transport(String),
    /// Service answered with a non-success status
    #[display("HTTP {} error: {}", status_code, message)]
    HttpStatus {
        /// HTTP status code
        status_code: u16,
        /// Response body or reason
        message: String,
    },
    /// Response body did not match the expected shape
    #[display("Failed to parse image service response: {}", _0)]
    ResponseParsing(String),
    /// Inline image payload was not valid base64
    #[display("Base64 decode error: {}", _0)]
    Base64Decode(String),
}

impl ServiceErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ServiceErrorKind::HttpStatus { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ServiceErrorKind::Transport(_) => true,
            _ => false,
        }
    }
}

/// Image service error with source location tracking.
///
/// # Examples
///
/// ```
/// use backdrop_error::{ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::HttpStatus {
///     status_code: 429,
///     message: "quota exceeded".to_string(),
/// });
/// assert!(format!("{}", err).contains("HTTP 429"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Service Error: {} at line {} in {}", kind, line, file)]
pub struct ServiceError {
    /// The kind of error that occurred
    pub kind: ServiceErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ServiceError {
    /// Create a new ServiceError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ServiceErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Classifies errors a caller could reasonably retry.
///
/// Nothing in the workspace retries on its own; this only tells a caller
/// which failures are transient.
///
/// # Examples
///
/// ```
/// use backdrop_error::{EmptyGenerationError, RetryableError, ServiceError, ServiceErrorKind};
///
/// let err = ServiceError::new(ServiceErrorKind::HttpStatus {
///     status_code: 401,
///     message: "API key not valid".to_string(),
/// });
/// assert!(!err.is_retryable());
/// assert!(EmptyGenerationError::new("No image generated").is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for ServiceError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}

impl RetryableError for crate::EmptyGenerationError {
    fn is_retryable(&self) -> bool {
        true
    }
}
