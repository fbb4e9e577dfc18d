//! Output persistence error types.

/// Kinds of persistence errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum WriteErrorKind {
    /// Output directory could not be created
    #[display("Failed to create output directory {}: {}", path, message)]
    CreateDir {
        /// Directory path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Image bytes could not be written
    #[display("Failed to write {}: {}", path, message)]
    Write {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Stored image could not be read back
    #[display("Failed to read {}: {}", path, message)]
    Read {
        /// File path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Requested output name would leave the output directory
    #[display("Invalid output name: {}", _0)]
    InvalidName(String),
    /// No stored output with this name
    #[display("Output not found: {}", _0)]
    NotFound(String),
}

/// Persistence error with location tracking.
///
/// # Examples
///
/// ```
/// use backdrop_error::{WriteError, WriteErrorKind};
///
/// let err = WriteError::new(WriteErrorKind::NotFound("slide_1_A4.png".to_string()));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Write Error: {} at line {} in {}", kind, line, file)]
pub struct WriteError {
    /// The kind of error that occurred
    pub kind: WriteErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WriteError {
    /// Create a new write error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WriteErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
