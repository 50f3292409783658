use crate::shared::Result;
use crate::ssp_generation::domain::SystemSecurityPlan;
use std::path::Path;

/// SspWriter port for persisting generated plans
pub trait SspWriter {
    /// Ensures the output directory exists, creating missing parents
    ///
    /// An existing directory is left untouched.
    ///
    /// # Errors
    /// Returns `ConversionError::DirectoryError` if the directory cannot be created
    fn prepare_output_directory(&self, output_directory: &Path) -> Result<()>;

    /// Writes one plan to `output_file`, replacing any existing file
    ///
    /// # Errors
    /// Returns `ConversionError::FileCreateError` when the file cannot be opened,
    /// `SerializationError` when encoding fails and `FileWriteError` on I/O failure
    fn write_ssp(&self, plan: &SystemSecurityPlan<'_>, output_file: &Path) -> Result<()>;
}
