/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the OpenControl workspace, the XML encoder, the file system
/// and the console.
pub mod progress_reporter;
pub mod ssp_formatter;
pub mod ssp_writer;
pub mod workspace_reader;

pub use progress_reporter::ProgressReporter;
pub use ssp_formatter::SspFormatter;
pub use ssp_writer::SspWriter;
pub use workspace_reader::WorkspaceReader;
