/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_ssp_writer;
mod mock_workspace_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_ssp_writer::{MockSspWriter, RecordedPlan};
pub use mock_workspace_reader::MockWorkspaceReader;
