use crate::ports::outbound::{SspFormatter, SspWriter};
use crate::shared::error::ConversionError;
use crate::shared::Result;
use crate::ssp_generation::domain::SystemSecurityPlan;
use std::fs::{self, DirBuilder, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Permissions for created output directories (unix only)
#[cfg(unix)]
const OUTPUT_DIRECTORY_MODE: u32 = 0o755;

/// FileSystemWriter adapter for writing SSP documents to disk
///
/// This adapter implements the SspWriter port. Encoding is delegated to the
/// injected formatter; this type owns directory creation and file handles.
pub struct FileSystemWriter<F> {
    formatter: F,
}

impl<F: SspFormatter> FileSystemWriter<F> {
    pub fn new(formatter: F) -> Self {
        Self { formatter }
    }

    /// Rejects writing through a symlink that sits at the output path
    fn validate_output_file(&self, output_file: &Path) -> Result<()> {
        if let Ok(metadata) = fs::symlink_metadata(output_file) {
            if metadata.is_symlink() {
                return Err(ConversionError::FileCreateError {
                    path: output_file.to_path_buf(),
                    details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }

    fn directory_builder() -> DirBuilder {
        let mut builder = DirBuilder::new();
        builder.recursive(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::DirBuilderExt;
            builder.mode(OUTPUT_DIRECTORY_MODE);
        }
        builder
    }
}

impl<F: SspFormatter> SspWriter for FileSystemWriter<F> {
    fn prepare_output_directory(&self, output_directory: &Path) -> Result<()> {
        if output_directory.is_dir() {
            return Ok(());
        }

        if output_directory.exists() {
            return Err(ConversionError::DirectoryError {
                path: output_directory.to_path_buf(),
                details: "Path exists but is not a directory".to_string(),
            }
            .into());
        }

        Self::directory_builder()
            .create(output_directory)
            .map_err(|e| {
                ConversionError::DirectoryError {
                    path: output_directory.to_path_buf(),
                    details: e.to_string(),
                }
                .into()
            })
    }

    fn write_ssp(&self, plan: &SystemSecurityPlan<'_>, output_file: &Path) -> Result<()> {
        self.validate_output_file(output_file)?;

        // Create (or truncate) first; the handle is closed when `writer` drops on any path
        let file = File::create(output_file).map_err(|e| ConversionError::FileCreateError {
            path: output_file.to_path_buf(),
            details: e.to_string(),
        })?;
        let mut writer = BufWriter::new(file);

        let content =
            self.formatter
                .format(plan)
                .map_err(|e| ConversionError::SerializationError {
                    path: output_file.to_path_buf(),
                    details: format!("{:#}", e),
                })?;

        writer
            .write_all(content.as_bytes())
            .and_then(|_| writer.flush())
            .map_err(|e| ConversionError::FileWriteError {
                path: output_file.to_path_buf(),
                details: e.to_string(),
            })?;

        Ok(())
    }
}
