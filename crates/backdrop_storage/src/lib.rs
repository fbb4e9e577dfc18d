//! Output storage for generated backgrounds.

mod filesystem;
mod naming;

pub use filesystem::FilesystemStore;
pub use naming::{output_file_name, validate_file_name};
