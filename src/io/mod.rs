//! CSV input and output
//!
//! Reading decodes Latin-1 byte-level input; writing produces plain UTF-8
//! CSV with a header row and no index column, to a file path or stdout.

mod read;
mod write;

pub use read::read_csv;
pub use write::{frame_to_csv, record_to_csv};
