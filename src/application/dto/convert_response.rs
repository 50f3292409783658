use crate::ssp_generation::domain::SspMetadata;
use std::path::PathBuf;

/// ConvertResponse - Result of a successful conversion run
#[derive(Debug, Clone)]
pub struct ConvertResponse {
    /// Written documents, in component order
    pub written_files: Vec<PathBuf>,
    /// Metadata block shared by every written document
    pub metadata: SspMetadata,
}

impl ConvertResponse {
    pub fn new(written_files: Vec<PathBuf>, metadata: SspMetadata) -> Self {
        Self {
            written_files,
            metadata,
        }
    }
}
