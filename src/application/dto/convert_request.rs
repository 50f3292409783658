use crate::ssp_generation::services::PlanIdPolicy;
use std::path::PathBuf;

/// ConvertRequest - Request DTO for the workspace conversion use case
#[derive(Debug, Clone)]
pub struct ConvertRequest {
    /// Location of the OpenControl workspace (path or file:// URI)
    pub repository_location: String,
    /// Directory that receives one `<key>.xml` per component
    pub output_directory: PathBuf,
    /// How the `id` attribute of each plan is chosen
    pub plan_id_policy: PlanIdPolicy,
}

impl ConvertRequest {
    pub fn new(repository_location: impl Into<String>, output_directory: impl Into<PathBuf>) -> Self {
        Self {
            repository_location: repository_location.into(),
            output_directory: output_directory.into(),
            plan_id_policy: PlanIdPolicy::default(),
        }
    }

    pub fn with_plan_id_policy(mut self, plan_id_policy: PlanIdPolicy) -> Self {
        self.plan_id_policy = plan_id_policy;
        self
    }
}
