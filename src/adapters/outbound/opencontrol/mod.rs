/// OpenControl workspace adapter (local directories and file:// URIs)
mod workspace_reader;

pub use workspace_reader::OpenControlReader;
