use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every component was converted
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Conversion error (workspace, directory, file or encoding failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while converting an OpenControl workspace into OSCAL SSPs.
///
/// Every variant is fatal to the run. The use case returns the first one
/// it meets, wrapped in `anyhow::Error`, and leaves already written files alone.
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Failed to open OpenControl workspace: {location}\nDetails: {details}\n\n💡 Hint: Please specify a local OpenControl workspace directory (or a file:// URI)")]
    WorkspaceOpen { location: String, details: String },

    #[error("Failed to create output directory: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the parent directory is writable")]
    DirectoryError { path: PathBuf, details: String },

    #[error("Error opening output file {path}: {details}\n\n💡 Hint: Please verify that the output directory is writable")]
    FileCreateError { path: PathBuf, details: String },

    #[error("Failed to encode system security plan as XML: {path}\nDetails: {details}")]
    SerializationError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the disk is not full and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid component key: {key:?}\nReason: {reason}\n\n💡 Hint: Component keys become file names; use letters, digits, '-', '_' or '.'")]
    InvalidComponentKey { key: String, reason: String },

    /// Validation error for configuration and request values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
