use crate::ports::outbound::SspFormatter;
use crate::shared::Result;
use crate::ssp_generation::domain::{
    InformationType, SecurityImpactLevel, SspMetadata, SystemCharacteristics, SystemId,
    SystemSecurityPlan,
};
use quick_xml::se::Serializer;
use serde::Serialize;

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
const OSCAL_NAMESPACE: &str = "http://csrc.nist.gov/ns/oscal/1.0";
const ROOT_ELEMENT: &str = "system-security-plan";
const INDENT_WIDTH: usize = 2;

#[derive(Debug, Serialize)]
struct SystemSecurityPlanDocument<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "@id")]
    id: &'a str,
    metadata: Metadata<'a>,
    #[serde(rename = "import-profile")]
    import_profile: ImportProfile<'a>,
    #[serde(rename = "system-characteristics")]
    system_characteristics: SystemCharacteristicsElement<'a>,
}

#[derive(Debug, Serialize)]
struct Metadata<'a> {
    title: &'a str,
    #[serde(rename = "last-modified")]
    last_modified: &'a str,
    version: &'a str,
    #[serde(rename = "oscal-version")]
    oscal_version: &'a str,
}

#[derive(Debug, Serialize)]
struct ImportProfile<'a> {
    #[serde(rename = "@href")]
    href: &'a str,
}

#[derive(Debug, Serialize)]
struct SystemCharacteristicsElement<'a> {
    #[serde(rename = "system-id")]
    system_ids: Vec<SystemIdElement<'a>>,
    #[serde(rename = "system-name")]
    system_name: &'a str,
    #[serde(rename = "system-name-short")]
    system_name_short: &'a str,
    description: Markup<'a>,
    #[serde(rename = "security-sensitivity-level")]
    security_sensitivity_level: &'static str,
    #[serde(rename = "system-information")]
    system_information: SystemInformationElement<'a>,
    #[serde(rename = "security-impact-level")]
    security_impact_level: SecurityImpactLevelElement,
    status: Status,
    #[serde(rename = "authorization-boundary")]
    authorization_boundary: AuthorizationBoundaryElement<'a>,
}

#[derive(Debug, Serialize)]
struct SystemIdElement<'a> {
    #[serde(rename = "@identifier-type")]
    identifier_type: &'a str,
    #[serde(rename = "$text")]
    value: &'a str,
}

/// OSCAL markup-multiline holding a single paragraph
#[derive(Debug, Serialize)]
struct Markup<'a> {
    p: &'a str,
}

#[derive(Debug, Serialize)]
struct SystemInformationElement<'a> {
    #[serde(rename = "information-type")]
    information_types: Vec<InformationTypeElement<'a>>,
}

#[derive(Debug, Serialize)]
struct InformationTypeElement<'a> {
    #[serde(rename = "@name")]
    name: &'a str,
    description: Markup<'a>,
    #[serde(rename = "confidentiality-impact")]
    confidentiality_impact: Impact,
    #[serde(rename = "integrity-impact")]
    integrity_impact: Impact,
    #[serde(rename = "availability-impact")]
    availability_impact: Impact,
}

#[derive(Debug, Serialize)]
struct Impact {
    base: &'static str,
}

#[derive(Debug, Serialize)]
struct SecurityImpactLevelElement {
    #[serde(rename = "security-objective-confidentiality")]
    confidentiality: &'static str,
    #[serde(rename = "security-objective-integrity")]
    integrity: &'static str,
    #[serde(rename = "security-objective-availability")]
    availability: &'static str,
}

#[derive(Debug, Serialize)]
struct Status {
    #[serde(rename = "@state")]
    state: &'static str,
}

#[derive(Debug, Serialize)]
struct AuthorizationBoundaryElement<'a> {
    description: Markup<'a>,
}

/// OscalXmlFormatter adapter for generating OSCAL SSP XML
///
/// This adapter implements the SspFormatter port. Output is always indented
/// and carries the XML declaration and the OSCAL namespace on the root element.
pub struct OscalXmlFormatter;

impl OscalXmlFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for OscalXmlFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl SspFormatter for OscalXmlFormatter {
    fn format(&self, plan: &SystemSecurityPlan<'_>) -> Result<String> {
        let document = SystemSecurityPlanDocument {
            xmlns: OSCAL_NAMESPACE,
            id: &plan.id,
            metadata: self.build_metadata(plan.metadata),
            import_profile: ImportProfile {
                href: &plan.import_profile.href,
            },
            system_characteristics: self.build_system_characteristics(&plan.system_characteristics),
        };

        let mut body = String::new();
        let mut serializer = Serializer::with_root(&mut body, Some(ROOT_ELEMENT))?;
        serializer.indent(' ', INDENT_WIDTH);
        document.serialize(serializer)?;

        Ok(format!("{}\n{}\n", XML_DECLARATION, body))
    }
}

impl OscalXmlFormatter {
    fn build_metadata<'a>(&self, metadata: &'a SspMetadata) -> Metadata<'a> {
        Metadata {
            title: metadata.title(),
            last_modified: metadata.last_modified(),
            version: metadata.version(),
            oscal_version: metadata.oscal_version(),
        }
    }

    fn build_system_characteristics<'a>(
        &self,
        chars: &'a SystemCharacteristics,
    ) -> SystemCharacteristicsElement<'a> {
        SystemCharacteristicsElement {
            system_ids: chars.system_ids.iter().map(Self::build_system_id).collect(),
            system_name: &chars.system_name,
            system_name_short: &chars.system_name_short,
            description: Markup {
                p: &chars.description,
            },
            security_sensitivity_level: chars.security_sensitivity_level.as_str(),
            system_information: SystemInformationElement {
                information_types: chars
                    .system_information
                    .information_types
                    .iter()
                    .map(Self::build_information_type)
                    .collect(),
            },
            security_impact_level: Self::build_security_impact_level(&chars.security_impact_level),
            status: Status {
                state: chars.status.as_str(),
            },
            authorization_boundary: AuthorizationBoundaryElement {
                description: Markup {
                    p: &chars.authorization_boundary.description,
                },
            },
        }
    }

    fn build_system_id(system_id: &SystemId) -> SystemIdElement<'_> {
        SystemIdElement {
            identifier_type: &system_id.identifier_type,
            value: &system_id.value,
        }
    }

    fn build_information_type(info: &InformationType) -> InformationTypeElement<'_> {
        InformationTypeElement {
            name: &info.name,
            description: Markup {
                p: &info.description,
            },
            confidentiality_impact: Impact {
                base: info.confidentiality_impact.as_str(),
            },
            integrity_impact: Impact {
                base: info.integrity_impact.as_str(),
            },
            availability_impact: Impact {
                base: info.availability_impact.as_str(),
            },
        }
    }

    fn build_security_impact_level(level: &SecurityImpactLevel) -> SecurityImpactLevelElement {
        SecurityImpactLevelElement {
            confidentiality: level.confidentiality.as_str(),
            integrity: level.integrity.as_str(),
            availability: level.availability.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssp_generation::domain::Component;
    use crate::ssp_generation::services::{ComponentMapper, MetadataGenerator};
    use chrono::{TimeZone, Utc};

    fn format_component(key: &str, name: &str) -> String {
        let metadata =
            MetadataGenerator::generate_at(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let plan = ComponentMapper::default().map(&Component::new(key, name), &metadata);
        OscalXmlFormatter::new().format(&plan).unwrap()
    }

    #[test]
    fn test_format_declaration_and_root() {
        let xml = format_component("web", "Web Frontend");

        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n"));
        assert!(xml.contains(
            "<system-security-plan xmlns=\"http://csrc.nist.gov/ns/oscal/1.0\" id=\"TODO\">"
        ));
        assert!(xml.trim_end().ends_with("</system-security-plan>"));
        assert!(xml.ends_with('\n'));
    }

    #[test]
    fn test_format_metadata() {
        let xml = format_component("web", "Web Frontend");

        assert!(xml.contains("<title>FedRAMP System Security Plan (SSP)</title>"));
        assert!(xml.contains("<last-modified>2024-01-01T00:00:00.000+00:00</last-modified>"));
        assert!(xml.contains("<version>0.0.1</version>"));
        assert!(xml.contains("<oscal-version>1.0.0-milestone2</oscal-version>"));
    }

    #[test]
    fn test_format_import_profile() {
        let xml = format_component("web", "Web Frontend");
        assert!(xml.contains("<import-profile href=\"https://raw.githubusercontent.com/usnistgov/OSCAL/master/content/fedramp.gov/xml/FedRAMP_MODERATE-baseline_profile.xml\""));
    }

    #[test]
    fn test_format_system_characteristics() {
        let xml = format_component("web", "Web Frontend");

        assert!(xml.contains("<system-id identifier-type=\"https://fedramp.gov\">F00000000</system-id>"));
        assert!(xml.contains("<system-name>Web Frontend</system-name>"));
        assert!(xml.contains("<system-name-short>web</system-name-short>"));
        assert!(xml.contains(
            "<p>Automatically generated OSCAL SSP from OpenControl guidance for Web Frontend</p>"
        ));
        assert!(xml.contains("<security-sensitivity-level>low</security-sensitivity-level>"));
        assert!(xml.contains("<information-type name=\"Information Type Name\">"));
        assert!(xml.contains("<base>fips-199-moderate</base>"));
        assert!(xml.contains(
            "<security-objective-confidentiality>fips-199-moderate</security-objective-confidentiality>"
        ));
        assert!(xml.contains("state=\"operational\""));
        assert!(xml.contains("<authorization-boundary>"));
    }

    #[test]
    fn test_format_element_order() {
        let xml = format_component("web", "Web Frontend");

        let order = [
            "<metadata>",
            "<import-profile",
            "<system-characteristics>",
            "<system-id",
            "<system-name>",
            "<system-name-short>",
            "<description>",
            "<security-sensitivity-level>",
            "<system-information>",
            "<security-impact-level>",
            "<status",
            "<authorization-boundary>",
        ];
        let positions: Vec<usize> = order.iter().map(|tag| xml.find(tag).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_format_is_indented() {
        let xml = format_component("web", "Web Frontend");

        assert!(xml.contains("\n  <metadata>"));
        assert!(xml.contains("\n    <title>"));
        assert!(xml.lines().count() > 20);
    }

    #[test]
    fn test_format_escapes_component_text() {
        let xml = format_component("rnd", "R&D <Lab>");

        assert!(xml.contains("<system-name>R&amp;D &lt;Lab&gt;</system-name>"));
        assert!(!xml.contains("R&D <Lab>"));
    }
}
