//! Deterministic output names.

use backdrop_error::{WriteError, WriteErrorKind};

/// Output file name for a slide: `slide_{index + 1}_{trope}.png`.
///
/// Characters outside `[A-Za-z0-9_-]` in the trope key become `_`, so a
/// client-supplied key can never point outside the output directory.
///
/// # Examples
///
/// ```
/// use backdrop_storage::output_file_name;
///
/// assert_eq!(output_file_name(0, "A4"), "slide_1_A4.png");
/// assert_eq!(output_file_name(2, "../x"), "slide_3____x.png");
/// ```
pub fn output_file_name(slide_index: usize, trope_id: &str) -> String {
    let trope: String = trope_id
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("slide_{}_{}.png", slide_index + 1, trope)
}

/// Rejects names that are empty, hidden, or contain path components.
pub fn validate_file_name(file_name: &str) -> Result<(), WriteError> {
    let invalid = file_name.is_empty()
        || file_name.starts_with('.')
        || file_name.contains(['/', '\\'])
        || file_name.contains("..");

    if invalid {
        Err(WriteError::new(WriteErrorKind::InvalidName(
            file_name.to_string(),
        )))
    } else {
        Ok(())
    }
}
