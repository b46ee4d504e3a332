//! catalog-core: Core library for merging two companies' product catalogs
//!
//! This library provides functionality to:
//! - Read header-bearing CSV tables into raw rows
//! - Validate supplier, barcode and catalog rows into a `Company`
//! - Merge a child catalog into a parent catalog, dropping child products
//!   that share a barcode with any parent product
//! - Write the merged result as CSV or JSON without overwriting existing files

pub mod company;
pub mod error;
pub mod merger;
pub mod model;
pub mod parser;
pub mod reader;
pub mod writer;

pub use company::{assemble_company, load_company, CompanySources};
pub use error::{Error, Result};
pub use merger::{merge_catalogs, summarize, CatalogResult, MergeSummary};
pub use model::{Barcode, CatalogItem, Company, Stage, Supplier};
pub use parser::{parse_barcodes, parse_catalog, parse_suppliers};
pub use reader::{read_rows, read_rows_str, RawRow};
pub use writer::{write_csv, write_json, write_merged_catalog, OutputFormat, CSV_HEADER};
