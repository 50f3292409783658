//! OSCAL System Security Plan model
//!
//! Mirrors the subset of the OSCAL SSP schema that is generated from an
//! OpenControl component. Element names live in the XML formatter; this
//! module only carries values.

use super::SspMetadata;

/// FIPS-199 impact level used for information types and security objectives
///
/// Every generated plan is a FedRAMP moderate baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImpactLevel {
    Moderate,
}

impl ImpactLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactLevel::Moderate => "fips-199-moderate",
        }
    }
}

/// Security sensitivity level of the system
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensitivityLevel {
    Low,
}

impl SensitivityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SensitivityLevel::Low => "low",
        }
    }
}

/// Operational state reported in the `status` element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemState {
    Operational,
}

impl SystemState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SystemState::Operational => "operational",
        }
    }
}

/// Root SSP document, one per component
///
/// The metadata block is borrowed: every plan of a run points at the same value.
#[derive(Debug, Clone, PartialEq)]
pub struct SystemSecurityPlan<'a> {
    pub id: String,
    pub metadata: &'a SspMetadata,
    pub import_profile: ImportProfile,
    pub system_characteristics: SystemCharacteristics,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportProfile {
    pub href: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemCharacteristics {
    pub system_ids: Vec<SystemId>,
    pub system_name: String,
    pub system_name_short: String,
    /// Single paragraph of prose
    pub description: String,
    pub security_sensitivity_level: SensitivityLevel,
    pub system_information: SystemInformation,
    pub security_impact_level: SecurityImpactLevel,
    pub status: SystemState,
    pub authorization_boundary: AuthorizationBoundary,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemId {
    pub identifier_type: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SystemInformation {
    pub information_types: Vec<InformationType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InformationType {
    pub name: String,
    pub description: String,
    pub confidentiality_impact: ImpactLevel,
    pub integrity_impact: ImpactLevel,
    pub availability_impact: ImpactLevel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecurityImpactLevel {
    pub confidentiality: ImpactLevel,
    pub integrity: ImpactLevel,
    pub availability: ImpactLevel,
}

impl SecurityImpactLevel {
    /// Same level for all three security objectives
    pub fn uniform(level: ImpactLevel) -> Self {
        Self {
            confidentiality: level,
            integrity: level,
            availability: level,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationBoundary {
    pub description: String,
}
