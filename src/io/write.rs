//! CSV output to a file path or stdout

use crate::error::{Error, Result};
use crate::frame::Frame;
use serde::Serialize;
use std::io::Write;
use std::path::Path;

fn open_output(output: Option<&Path>) -> Result<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = std::fs::File::create(path).map_err(|source| Error::Write {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(file))
        }
        None => Ok(Box::new(std::io::stdout())),
    }
}

/// Serialize a frame as CSV with a header row and no index column.
///
/// `Missing` cells serialize as empty fields.
pub fn frame_to_csv(frame: &Frame, output: Option<&Path>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(open_output(output)?);
    writer.write_record(frame.columns())?;
    for row in frame.rows() {
        writer.write_record(row.iter().map(ToString::to_string))?;
    }
    writer.flush()?;
    Ok(())
}

/// Serialize a single serde record (the one-row metrics table) as CSV.
///
/// The header is derived from the record's field names.
pub fn record_to_csv<T: Serialize>(record: &T, output: Option<&Path>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(open_output(output)?);
    writer.serialize(record)?;
    writer.flush()?;
    Ok(())
}
