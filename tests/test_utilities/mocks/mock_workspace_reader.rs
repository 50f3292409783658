use oc2oscal::prelude::*;

/// Mock WorkspaceReader returning a fixed component list
pub struct MockWorkspaceReader {
    pub components: Vec<Component>,
    pub should_fail: bool,
}

impl MockWorkspaceReader {
    pub fn new(components: Vec<Component>) -> Self {
        Self {
            components,
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            components: Vec::new(),
            should_fail: true,
        }
    }
}

impl WorkspaceReader for MockWorkspaceReader {
    fn open_workspace(&self, location: &str) -> Result<Workspace> {
        if self.should_fail {
            return Err(ConversionError::WorkspaceOpen {
                location: location.to_string(),
                details: "Mock workspace open failure".to_string(),
            }
            .into());
        }
        Ok(Workspace::new(location, self.components.clone()))
    }
}
