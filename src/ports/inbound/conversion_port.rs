use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::shared::Result;

/// ConversionPort - Inbound port for the workspace conversion use case
///
/// This is the application's public API: one OSCAL SSP per OpenControl
/// component, written into the requested output directory.
pub trait ConversionPort {
    /// Converts every component of the requested workspace
    ///
    /// # Errors
    /// Returns the first error met. Files written before it stay on disk.
    fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse>;
}
