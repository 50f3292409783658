use std::fmt;
use uuid::Uuid;

/// Identifier emitted by [`PlanIdPolicy::Placeholder`]
pub const PLACEHOLDER_PLAN_ID: &str = "TODO";

/// Policy deciding the `id` attribute of each generated plan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanIdPolicy {
    /// Constant placeholder, identical across documents and runs
    #[default]
    Placeholder,
    /// Fresh random UUID (v4) for every document
    Random,
}

impl PlanIdPolicy {
    pub fn generate(&self) -> String {
        match self {
            PlanIdPolicy::Placeholder => PLACEHOLDER_PLAN_ID.to_string(),
            PlanIdPolicy::Random => Uuid::new_v4().to_string(),
        }
    }
}

impl std::str::FromStr for PlanIdPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "placeholder" => Ok(PlanIdPolicy::Placeholder),
            "random" | "uuid" => Ok(PlanIdPolicy::Random),
            _ => Err(format!(
                "Invalid plan id policy: {}. Please specify 'placeholder' or 'random'",
                s
            )),
        }
    }
}

impl fmt::Display for PlanIdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanIdPolicy::Placeholder => write!(f, "placeholder"),
            PlanIdPolicy::Random => write!(f, "random"),
        }
    }
}
