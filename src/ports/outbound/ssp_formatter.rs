use crate::shared::Result;
use crate::ssp_generation::domain::SystemSecurityPlan;

/// SspFormatter port for encoding a plan as an OSCAL document
pub trait SspFormatter {
    /// Encodes the plan, root envelope included, as indented text
    ///
    /// # Errors
    /// Returns an error if the encoder rejects the document
    fn format(&self, plan: &SystemSecurityPlan<'_>) -> Result<String>;
}
