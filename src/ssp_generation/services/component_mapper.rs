use super::PlanIdPolicy;
use crate::shared::Result;
use crate::ssp_generation::domain::{
    AuthorizationBoundary, Component, ComponentKey, ImpactLevel, ImportProfile, InformationType,
    SecurityImpactLevel, SensitivityLevel, SspMetadata, SystemCharacteristics, SystemId,
    SystemInformation, SystemSecurityPlan, SystemState,
};
use std::path::{Path, PathBuf};

/// Baseline profile every generated plan imports. Embedded as text, never fetched.
pub const FEDRAMP_MODERATE_PROFILE_HREF: &str = "https://raw.githubusercontent.com/usnistgov/OSCAL/master/content/fedramp.gov/xml/FedRAMP_MODERATE-baseline_profile.xml";

/// Placeholder FedRAMP system identifier
pub const PLACEHOLDER_SYSTEM_ID: &str = "F00000000";
pub const FEDRAMP_IDENTIFIER_TYPE: &str = "https://fedramp.gov";

pub const INFORMATION_TYPE_NAME: &str = "Information Type Name";
pub const INFORMATION_TYPE_DESCRIPTION: &str = "This item is useless nevertheless required.";
pub const AUTHORIZATION_BOUNDARY_DESCRIPTION: &str =
    "A holistic, top-level explanation of the FedRAMP authorization boundary.";

const DESCRIPTION_PREFIX: &str = "Automatically generated OSCAL SSP from OpenControl guidance for ";

/// ComponentMapper service - maps one OpenControl component onto one SSP
///
/// Only `system-name`, `system-name-short` and the description depend on the
/// component. Everything else comes from the static defaults below and is
/// identical for every document.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentMapper {
    plan_id_policy: PlanIdPolicy,
}

impl ComponentMapper {
    pub fn new(plan_id_policy: PlanIdPolicy) -> Self {
        Self { plan_id_policy }
    }

    /// Builds the SSP for `component`, borrowing the run's shared metadata
    pub fn map<'a>(
        &self,
        component: &Component,
        metadata: &'a SspMetadata,
    ) -> SystemSecurityPlan<'a> {
        SystemSecurityPlan {
            id: self.plan_id_policy.generate(),
            metadata,
            import_profile: ImportProfile {
                href: FEDRAMP_MODERATE_PROFILE_HREF.to_string(),
            },
            system_characteristics: Self::system_characteristics(component),
        }
    }

    /// Destination of the component's document: `<output_directory>/<key>.xml`
    ///
    /// # Errors
    /// Returns `InvalidComponentKey` if the key cannot be used as a file name
    pub fn output_path(component: &Component, output_directory: &Path) -> Result<PathBuf> {
        let key = ComponentKey::try_from(component)?;
        Ok(output_directory.join(key.file_name()))
    }

    fn system_characteristics(component: &Component) -> SystemCharacteristics {
        SystemCharacteristics {
            system_ids: Self::static_system_ids(),
            system_name: component.name().to_string(),
            system_name_short: component.key().to_string(),
            description: format!("{}{}", DESCRIPTION_PREFIX, component.name()),
            security_sensitivity_level: SensitivityLevel::Low,
            system_information: Self::static_system_information(),
            security_impact_level: SecurityImpactLevel::uniform(ImpactLevel::Moderate),
            status: SystemState::Operational,
            authorization_boundary: Self::static_authorization_boundary(),
        }
    }

    fn static_system_ids() -> Vec<SystemId> {
        vec![SystemId {
            identifier_type: FEDRAMP_IDENTIFIER_TYPE.to_string(),
            value: PLACEHOLDER_SYSTEM_ID.to_string(),
        }]
    }

    fn static_system_information() -> SystemInformation {
        SystemInformation {
            information_types: vec![InformationType {
                name: INFORMATION_TYPE_NAME.to_string(),
                description: INFORMATION_TYPE_DESCRIPTION.to_string(),
                confidentiality_impact: ImpactLevel::Moderate,
                integrity_impact: ImpactLevel::Moderate,
                availability_impact: ImpactLevel::Moderate,
            }],
        }
    }

    fn static_authorization_boundary() -> AuthorizationBoundary {
        AuthorizationBoundary {
            description: AUTHORIZATION_BOUNDARY_DESCRIPTION.to_string(),
        }
    }
}
