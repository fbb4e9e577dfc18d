//! Error types for the Backdrop carousel background generator.
//!
//! Every error records the source location where it was raised. The umbrella
//! [`BackdropError`] wraps one of the specific kinds below.

mod config;
mod decode;
mod generation;
mod service;
mod validation;
mod write;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use generation::EmptyGenerationError;
pub use service::{RetryableError, ServiceError, ServiceErrorKind};
pub use validation::ValidationError;
pub use write::{WriteError, WriteErrorKind};

/// Crate-level error variants.
#[derive(Debug, derive_more::From, derive_more::Display)]
pub enum BackdropErrorKind {
    /// Reference or generated image could not be decoded
    #[display("{}", _0)]
    Decode(DecodeError),
    /// Image service returned no image
    #[display("{}", _0)]
    EmptyGeneration(EmptyGenerationError),
    /// Transport, auth or rate-limit failure from the image service
    #[display("{}", _0)]
    Service(ServiceError),
    /// Persisting a generated image failed
    #[display("{}", _0)]
    Write(WriteError),
    /// Client request was missing a required field
    #[display("{}", _0)]
    Validation(ValidationError),
    /// Process configuration was invalid
    #[display("{}", _0)]
    Config(ConfigError),
}

/// Backdrop error with kind discrimination.
#[derive(Debug)]
pub struct BackdropError(Box<BackdropErrorKind>);

impl BackdropError {
    /// Create a new error from a kind.
    pub fn new(kind: BackdropErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &BackdropErrorKind {
        &self.0
    }

    /// Message suitable for API clients, without the source location.
    ///
    /// # Examples
    ///
    /// ```
    /// use backdrop_error::{BackdropError, EmptyGenerationError};
    ///
    /// let err = BackdropError::from(EmptyGenerationError::new("No image generated"));
    /// assert_eq!(err.summary(), "No image generated");
    /// ```
    pub fn summary(&self) -> String {
        match self.kind() {
            BackdropErrorKind::Decode(e) => e.message.clone(),
            BackdropErrorKind::EmptyGeneration(e) => e.message.clone(),
            BackdropErrorKind::Service(e) => e.kind.to_string(),
            BackdropErrorKind::Write(e) => e.kind.to_string(),
            BackdropErrorKind::Validation(e) => e.message.clone(),
            BackdropErrorKind::Config(e) => e.message.clone(),
        }
    }

    /// Whether a caller could reasonably retry the failed operation.
    pub fn is_retryable(&self) -> bool {
        match self.kind() {
            BackdropErrorKind::EmptyGeneration(e) => e.is_retryable(),
            BackdropErrorKind::Service(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl std::fmt::Display for BackdropError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Backdrop Error: {}", self.0)
    }
}

impl std::error::Error for BackdropError {}

// Generic From implementation for any type that converts to BackdropErrorKind
impl<T> From<T> for BackdropError
where
    T: Into<BackdropErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Backdrop operations.
pub type BackdropResult<T> = std::result::Result<T, BackdropError>;
