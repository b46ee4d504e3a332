//! Delimited-text reader producing header-stripped string rows

use crate::error::{Error, Result};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// One raw record: an ordered list of string fields
pub type RawRow = Vec<String>;

/// Read a CSV file into raw rows, discarding the header row
pub fn read_rows<P: AsRef<Path>>(path: P) -> Result<Vec<RawRow>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::SourceUnreadable {
        path: path.to_path_buf(),
        source: e,
    })?;

    let rows = collect_rows(BufReader::new(file), path)?;
    tracing::debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

/// Read CSV from a string (useful for testing)
pub fn read_rows_str(content: &str, source_name: &str) -> Result<Vec<RawRow>> {
    collect_rows(content.as_bytes(), &PathBuf::from(source_name))
}

fn collect_rows<R: Read>(reader: R, path: &Path) -> Result<Vec<RawRow>> {
    // Row widths are checked by the record parsers, so the reader stays flexible
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut rows = Vec::new();
    for result in csv_reader.records() {
        let record = result.map_err(|e| Error::Csv {
            path: path.to_path_buf(),
            source: e,
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(rows)
}
