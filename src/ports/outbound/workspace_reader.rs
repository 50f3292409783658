use crate::shared::Result;
use crate::ssp_generation::domain::Workspace;

/// WorkspaceReader port for opening an OpenControl workspace
pub trait WorkspaceReader {
    /// Opens the workspace at `location` and lists its components
    ///
    /// # Arguments
    /// * `location` - Local path or supported URI of the workspace
    ///
    /// # Errors
    /// Returns `ConversionError::WorkspaceOpen` if the location cannot be
    /// resolved or the workspace files cannot be loaded
    fn open_workspace(&self, location: &str) -> Result<Workspace>;
}
