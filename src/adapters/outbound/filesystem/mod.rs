/// Filesystem adapters for output directory and document I/O
mod file_writer;

pub use file_writer::FileSystemWriter;
