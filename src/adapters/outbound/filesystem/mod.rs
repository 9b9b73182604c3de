/// Filesystem adapters for file I/O operations
mod csv_bom_reader;
mod file_writer;

pub use csv_bom_reader::CsvBomReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
