use crate::application::dto::{ConvertRequest, ConvertResponse};
use crate::ports::inbound::ConversionPort;
use crate::ports::outbound::{ProgressReporter, SspWriter, WorkspaceReader};
use crate::shared::Result;
use crate::ssp_generation::domain::{Component, SspMetadata};
use crate::ssp_generation::services::{ComponentMapper, MetadataGenerator};
use std::path::{Path, PathBuf};

/// ConvertWorkspaceUseCase - Batch conversion of an OpenControl workspace
///
/// Opens the workspace, prepares the output directory, stamps one metadata
/// block and converts components one at a time in provider order. The first
/// error ends the run; files already written are left in place.
///
/// # Type Parameters
/// * `WR` - WorkspaceReader implementation
/// * `SW` - SspWriter implementation
/// * `PR` - ProgressReporter implementation
pub struct ConvertWorkspaceUseCase<WR, SW, PR> {
    workspace_reader: WR,
    ssp_writer: SW,
    progress_reporter: PR,
}

impl<WR, SW, PR> ConvertWorkspaceUseCase<WR, SW, PR>
where
    WR: WorkspaceReader,
    SW: SspWriter,
    PR: ProgressReporter,
{
    /// Creates a new ConvertWorkspaceUseCase with injected dependencies
    pub fn new(workspace_reader: WR, ssp_writer: SW, progress_reporter: PR) -> Self {
        Self {
            workspace_reader,
            ssp_writer,
            progress_reporter,
        }
    }

    /// Executes the conversion
    ///
    /// # Returns
    /// ConvertResponse listing the written files and the shared metadata
    pub fn execute(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        // Step 1: Open the workspace before touching the file system
        self.progress_reporter.report(&format!(
            "📖 Opening OpenControl workspace: {}",
            request.repository_location
        ));

        let workspace = self
            .workspace_reader
            .open_workspace(&request.repository_location)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} component(s)",
            workspace.component_count()
        ));

        // Step 2: Make sure the output directory exists
        self.ssp_writer
            .prepare_output_directory(&request.output_directory)?;

        // Step 3: One metadata block for the whole run
        let metadata = MetadataGenerator::generate();
        let mapper = ComponentMapper::new(request.plan_id_policy);

        // Step 4: Convert components in provider order, stopping at the first failure
        let total = workspace.component_count();
        let mut written_files = Vec::with_capacity(total);

        for (idx, component) in workspace.components().iter().enumerate() {
            self.progress_reporter
                .report_progress(idx + 1, total, Some(component.key()));

            let output_file = self
                .convert_component(&mapper, component, &metadata, &request.output_directory)
                .inspect_err(|e| {
                    self.progress_reporter.report_error(&format!(
                        "❌ Failed to convert component '{}': {}",
                        component.key(),
                        e
                    ))
                })?;
            written_files.push(output_file);
        }

        self.progress_reporter.report_completion(&format!(
            "✅ Wrote {} system security plan(s) to {}",
            written_files.len(),
            request.output_directory.display()
        ));

        Ok(ConvertResponse::new(written_files, metadata))
    }

    /// Maps one component and hands the plan to the writer
    fn convert_component(
        &self,
        mapper: &ComponentMapper,
        component: &Component,
        metadata: &SspMetadata,
        output_directory: &Path,
    ) -> Result<PathBuf> {
        let output_file = ComponentMapper::output_path(component, output_directory)?;
        let plan = mapper.map(component, metadata);
        self.ssp_writer.write_ssp(&plan, &output_file)?;
        Ok(output_file)
    }
}

impl<WR, SW, PR> ConversionPort for ConvertWorkspaceUseCase<WR, SW, PR>
where
    WR: WorkspaceReader,
    SW: SspWriter,
    PR: ProgressReporter,
{
    fn convert(&self, request: ConvertRequest) -> Result<ConvertResponse> {
        self.execute(request)
    }
}
