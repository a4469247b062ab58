//! CSV loading with Latin-1 decoding

use crate::error::{Error, Result};
use crate::frame::{Frame, Value};
use std::path::Path;

/// Decode bytes as Latin-1 (ISO-8859-1).
///
/// Every byte maps to the Unicode code point of the same value, so the
/// decode is total: high bytes survive as their corresponding characters
/// instead of raising on malformed sequences.
fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| b as char).collect()
}

/// Load a CSV file into a [`Frame`].
///
/// The first row supplies the column headers; every field goes through
/// loose per-cell type inference. Short or long rows are tolerated and
/// normalized to the header width.
pub fn read_csv(path: impl AsRef<Path>) -> Result<Frame> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = decode_latin1(&bytes);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(String::from)
        .collect();

    let mut frame = Frame::new(headers);
    for record in reader.records() {
        let record = record.map_err(|source| Error::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        frame.push_row(record.iter().map(Value::infer).collect());
    }
    Ok(frame)
}
