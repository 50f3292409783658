pub mod component;
pub mod ssp_metadata;
pub mod system_security_plan;
pub mod workspace;

pub use component::{Component, ComponentKey};
pub use ssp_metadata::SspMetadata;
pub use system_security_plan::{
    AuthorizationBoundary, ImpactLevel, ImportProfile, InformationType, SecurityImpactLevel,
    SensitivityLevel, SystemCharacteristics, SystemId, SystemInformation, SystemSecurityPlan,
    SystemState,
};
pub use workspace::Workspace;
