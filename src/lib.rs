//! oc2oscal - OpenControl to OSCAL System Security Plan conversion
//!
//! This library turns every component of an OpenControl workspace into one
//! OSCAL System Security Plan (SSP) XML document, following hexagonal
//! architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`ssp_generation`): Components, the SSP model and the mapping rules
//! - **Application Layer** (`application`): The batch conversion use case
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! # fn main() -> oc2oscal::shared::Result<()> {
//! // Writes ./oscal/<component-key>.xml for every component
//! oc2oscal::convert("./compliance", "./oscal")?;
//! # Ok(())
//! # }
//! ```
//!
//! The use case can also be wired by hand:
//!
//! ```no_run
//! use oc2oscal::prelude::*;
//!
//! # fn main() -> Result<()> {
//! let use_case = ConvertWorkspaceUseCase::new(
//!     OpenControlReader::new(),
//!     FileSystemWriter::new(OscalXmlFormatter::new()),
//!     StderrProgressReporter::new(),
//! );
//!
//! let request = ConvertRequest::new("./compliance", "./oscal")
//!     .with_plan_id_policy(PlanIdPolicy::Random);
//! let response = use_case.execute(request)?;
//! println!("{} file(s) written", response.written_files.len());
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod adapters;
pub mod application;
pub mod ports;
pub mod shared;
pub mod ssp_generation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::{SilentProgressReporter, StderrProgressReporter};
    pub use crate::adapters::outbound::filesystem::FileSystemWriter;
    pub use crate::adapters::outbound::formatters::OscalXmlFormatter;
    pub use crate::adapters::outbound::opencontrol::OpenControlReader;
    pub use crate::application::dto::{ConvertRequest, ConvertResponse};
    pub use crate::application::use_cases::ConvertWorkspaceUseCase;
    pub use crate::ports::inbound::ConversionPort;
    pub use crate::ports::outbound::{ProgressReporter, SspFormatter, SspWriter, WorkspaceReader};
    pub use crate::shared::error::ConversionError;
    pub use crate::shared::Result;
    pub use crate::ssp_generation::domain::{
        Component, ComponentKey, SspMetadata, SystemSecurityPlan, Workspace,
    };
    pub use crate::ssp_generation::services::{ComponentMapper, MetadataGenerator, PlanIdPolicy};
}

/// Converts the OpenControl workspace at `repository_location` into one
/// OSCAL SSP per component under `output_directory`
///
/// The output directory is created when missing. Conversion stops at the
/// first error, which is returned unchanged; documents written before it
/// remain on disk.
pub fn convert(repository_location: &str, output_directory: impl AsRef<Path>) -> shared::Result<()> {
    use crate::prelude::*;

    let use_case = ConvertWorkspaceUseCase::new(
        OpenControlReader::new(),
        FileSystemWriter::new(OscalXmlFormatter::new()),
        SilentProgressReporter,
    );

    use_case.execute(ConvertRequest::new(
        repository_location,
        output_directory.as_ref(),
    ))?;
    Ok(())
}
