/// SspMetadata value object - the `metadata` block shared by every SSP of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SspMetadata {
    title: String,
    last_modified: String,
    version: String,
    oscal_version: String,
}

impl SspMetadata {
    pub fn new(
        title: String,
        last_modified: String,
        version: String,
        oscal_version: String,
    ) -> Self {
        Self {
            title,
            last_modified,
            version,
            oscal_version,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn last_modified(&self) -> &str {
        &self.last_modified
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn oscal_version(&self) -> &str {
        &self.oscal_version
    }
}
