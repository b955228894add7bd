//! `;`-delimited station file reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use stations_model::{Dataset, StationRecord};

use crate::error::{IngestError, Result};

/// Column separator of the station file.
pub const DELIMITER: u8 = b';';

const UTF8_BOM: char = '\u{feff}';

fn open_error(path: &Path, e: std::io::Error) -> IngestError {
    if e.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        }
    }
}

/// Detect encoding and validate it's supported (UTF-8 only).
///
/// Checks for UTF-16 BOM markers which are not supported.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| open_error(path, e))?;

    let mut buffer = [0u8; 2];
    let bytes_read = file.read(&mut buffer).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    if bytes_read == 2 {
        if buffer == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    // UTF-8 BOM is acceptable (stripped from the first header name)
    Ok(())
}

/// Read the station file at `path`.
pub fn read_stations(path: &Path) -> Result<Dataset> {
    validate_encoding(path)?;
    let file = File::open(path).map_err(|e| open_error(path, e))?;
    let dataset = read_stations_from_reader(file)?;
    tracing::debug!(
        path = %path.display(),
        columns = dataset.header_arity(),
        records = dataset.len(),
        "loaded station file"
    );
    Ok(dataset)
}

/// Read station records from any reader.
///
/// The reader is flexible: rows with more or fewer values than the header
/// are kept, with their real arity recorded in
/// [`StationRecord::field_count`].
pub fn read_stations_from_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(DELIMITER)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header: Vec<String> = csv_reader
        .headers()
        .map_err(|e| IngestError::Csv {
            row: 0,
            message: e.to_string(),
        })?
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if idx == 0 {
                name.trim_start_matches(UTF8_BOM).to_string()
            } else {
                name.to_string()
            }
        })
        .collect();

    if header.iter().all(String::is_empty) {
        return Err(IngestError::MissingHeader);
    }

    let mut records = Vec::new();
    for (idx, result) in csv_reader.records().enumerate() {
        let row = idx + 1;
        let record = result.map_err(|e| IngestError::Csv {
            row,
            message: e.to_string(),
        })?;
        let values: Vec<&str> = record.iter().collect();
        if values.len() != header.len() {
            tracing::debug!(
                row,
                found = values.len(),
                expected = header.len(),
                "row arity differs from header"
            );
        }
        records.push(StationRecord::from_row(row, &header, &values));
    }

    Ok(Dataset::new(header, records))
}
