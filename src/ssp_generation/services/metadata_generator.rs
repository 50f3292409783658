use crate::ssp_generation::domain::SspMetadata;
use chrono::{DateTime, SecondsFormat, Utc};

/// Title of every generated plan
pub const SSP_TITLE: &str = "FedRAMP System Security Plan (SSP)";

/// Document version of every generated plan
pub const SSP_VERSION: &str = "0.0.1";

/// OSCAL schema version the generated documents target
pub const OSCAL_VERSION: &str = "1.0.0-milestone2";

/// MetadataGenerator service for building the per-run metadata block
///
/// The timestamp is captured once, so all documents of a run share the
/// same `last-modified` instant.
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata stamped with the current time
    pub fn generate() -> SspMetadata {
        Self::generate_at(Utc::now())
    }

    /// Generates metadata stamped with the given instant (RFC 3339, millisecond precision, numeric offset)
    pub fn generate_at(timestamp: DateTime<Utc>) -> SspMetadata {
        SspMetadata::new(
            SSP_TITLE.to_string(),
            timestamp.to_rfc3339_opts(SecondsFormat::Millis, false),
            SSP_VERSION.to_string(),
            OSCAL_VERSION.to_string(),
        )
    }
}
