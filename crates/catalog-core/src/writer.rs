//! Output of merged catalogs as CSV or JSON

use crate::error::{Error, Result};
use crate::merger::CatalogResult;
use serde::Serialize;
use std::fmt;
use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

/// Header row of the CSV output
pub const CSV_HEADER: [&str; 3] = ["SKU", "Description", "Source"];

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown format '{}', supported formats: csv, json",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// JSON shape of one merged line
#[derive(Debug, Serialize)]
struct MergedRecord<'a> {
    sku: &'a str,
    description: &'a str,
    source: &'a str,
    barcodes: Vec<&'a str>,
}

impl<'a> From<&CatalogResult<'a>> for MergedRecord<'a> {
    fn from(result: &CatalogResult<'a>) -> Self {
        let item = result.item;
        Self {
            sku: &item.sku,
            description: &item.description,
            source: result.source_name(),
            barcodes: item.barcode_values().collect(),
        }
    }
}

/// Write the merged catalog to a new file at `path`
///
/// Fails with [`Error::DestinationExists`] if anything is already at `path`;
/// the existing file is left untouched.
pub fn write_merged_catalog<P: AsRef<Path>>(
    results: &[CatalogResult<'_>],
    path: P,
    format: OutputFormat,
) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(create_destination(path)?);

    match format {
        OutputFormat::Csv => write_csv(results, &mut writer)?,
        OutputFormat::Json => write_json(results, &mut writer)?,
    }
    writer.flush()?;

    tracing::info!(
        path = %path.display(),
        rows = results.len(),
        %format,
        "wrote merged catalog"
    );
    Ok(())
}

/// Write `SKU,Description,Source` rows for each result
pub fn write_csv<W: Write>(results: &[CatalogResult<'_>], writer: W) -> Result<()> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for result in results {
        csv_writer.write_record([
            result.item.sku.as_str(),
            result.item.description.as_str(),
            result.source_name(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the results as a pretty-printed JSON array
pub fn write_json<W: Write>(results: &[CatalogResult<'_>], mut writer: W) -> Result<()> {
    let records: Vec<MergedRecord<'_>> = results.iter().map(MergedRecord::from).collect();
    serde_json::to_writer_pretty(&mut writer, &records)?;
    writeln!(writer)?;
    Ok(())
}

fn create_destination(path: &Path) -> Result<File> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| match e.kind() {
            io::ErrorKind::AlreadyExists => Error::DestinationExists {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Barcode, CatalogItem, Company, Supplier};
    use std::fs;

    fn company() -> Company {
        let supplier = Supplier::new("00001", "Base supplier");
        Company {
            name: "A".to_string(),
            suppliers: vec![supplier.clone()],
            catalog: vec![CatalogItem {
                sku: "test-sku".to_string(),
                description: "test product".to_string(),
                barcodes: vec![Barcode::new(supplier, "test-sku", "z2783613083817")],
            }],
        }
    }

    fn results(company: &Company) -> Vec<CatalogResult<'_>> {
        company
            .catalog
            .iter()
            .map(|item| CatalogResult {
                item,
                source: company,
            })
            .collect()
    }

    #[test]
    fn test_write_csv() {
        let company = company();
        let mut out = Vec::new();

        write_csv(&results(&company), &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "SKU,Description,Source\ntest-sku,test product,A\n"
        );
    }

    #[test]
    fn test_write_csv_quotes_delimiters() {
        let mut company = company();
        company.catalog[0].description = "Bread, Raisin".to_string();
        let mut out = Vec::new();

        write_csv(&results(&company), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("test-sku,\"Bread, Raisin\",A\n"));
    }

    #[test]
    fn test_write_csv_empty_results() {
        let mut out = Vec::new();
        write_csv(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "SKU,Description,Source\n");
    }

    #[test]
    fn test_write_json() {
        let company = company();
        let mut out = Vec::new();

        write_json(&results(&company), &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value[0]["sku"], "test-sku");
        assert_eq!(value[0]["source"], "A");
        assert_eq!(value[0]["barcodes"][0], "z2783613083817");
    }

    #[test]
    fn test_write_merged_catalog_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        let company = company();

        write_merged_catalog(&results(&company), &path, OutputFormat::Csv).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "SKU,Description,Source\ntest-sku,test product,A\n"
        );
    }

    #[test]
    fn test_refuses_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        fs::write(&path, "keep me").unwrap();
        let company = company();

        let err = write_merged_catalog(&results(&company), &path, OutputFormat::Csv).unwrap_err();

        assert!(matches!(err, Error::DestinationExists { path: ref p } if p == &path));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep me");
    }

    #[test]
    fn test_output_format_from_str() {
        assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert_eq!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
