//! Core catalog types shared by the parsers and the merger

use serde::{Deserialize, Serialize};
use std::fmt;

/// A supplier of one company
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Supplier {
    /// Supplier identifier, referenced by barcode rows
    pub id: String,
    /// Display name
    pub name: String,
}

impl Supplier {
    /// Create a new supplier
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A scannable code for one sku, sourced from one supplier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Barcode {
    /// The resolved supplier record
    pub supplier: Supplier,
    /// Sku this barcode belongs to
    pub sku: String,
    /// Literal barcode value, used for duplicate detection
    pub barcode: String,
}

impl Barcode {
    /// Create a new barcode
    pub fn new(supplier: Supplier, sku: impl Into<String>, barcode: impl Into<String>) -> Self {
        Self {
            supplier,
            sku: sku.into(),
            barcode: barcode.into(),
        }
    }
}

/// A product in a company's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub sku: String,
    pub description: String,
    /// Every barcode of this sku, never empty
    pub barcodes: Vec<Barcode>,
}

impl CatalogItem {
    /// Iterate over the literal barcode values of this item
    pub fn barcode_values(&self) -> impl Iterator<Item = &str> {
        self.barcodes.iter().map(|b| b.barcode.as_str())
    }
}

/// One merge participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    pub name: String,
    pub suppliers: Vec<Supplier>,
    pub catalog: Vec<CatalogItem>,
}

impl Company {
    /// Number of catalog items
    pub fn item_count(&self) -> usize {
        self.catalog.len()
    }

    /// Total number of barcodes across all catalog items
    pub fn barcode_count(&self) -> usize {
        self.catalog.iter().map(|item| item.barcodes.len()).sum()
    }

    /// Find a catalog item by sku
    pub fn find_item(&self, sku: &str) -> Option<&CatalogItem> {
        self.catalog.iter().find(|item| item.sku == sku)
    }
}

/// The parser stage a row belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Supplier,
    Barcode,
    Catalog,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Supplier => write!(f, "supplier"),
            Stage::Barcode => write!(f, "barcode"),
            Stage::Catalog => write!(f, "catalog"),
        }
    }
}
