use super::Component;

/// Workspace aggregate - an opened OpenControl workspace and its components
///
/// Components keep the order in which the provider discovered them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    location: String,
    components: Vec<Component>,
}

impl Workspace {
    pub fn new(location: impl Into<String>, components: Vec<Component>) -> Self {
        Self {
            location: location.into(),
            components,
        }
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
