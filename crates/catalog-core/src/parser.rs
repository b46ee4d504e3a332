//! Record parsers: suppliers, then barcodes, then catalog items
//!
//! Each parser validates its raw rows in order and stops at the first bad
//! row. Lookup maps are built once per call and dropped on return.

use crate::error::{Error, Result};
use crate::model::{Barcode, CatalogItem, Stage, Supplier};
use crate::reader::RawRow;
use std::collections::HashMap;

/// Parse supplier rows (`id`, `name`) into suppliers, preserving row order
pub fn parse_suppliers(rows: &[RawRow]) -> Result<Vec<Supplier>> {
    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<Supplier> {
            let [id, name] = required_fields(row, Stage::Supplier, index)?;
            Ok(Supplier::new(id, name))
        })
        .collect()
}

/// Parse barcode rows (`supplier id`, `sku`, `barcode`), resolving each
/// supplier id against `suppliers`
///
/// When several suppliers share an id, the last one in `suppliers` is used.
pub fn parse_barcodes(rows: &[RawRow], suppliers: &[Supplier]) -> Result<Vec<Barcode>> {
    let mut supplier_by_id: HashMap<&str, &Supplier> = HashMap::with_capacity(suppliers.len());
    for supplier in suppliers {
        if let Some(previous) = supplier_by_id.insert(supplier.id.as_str(), supplier) {
            tracing::warn!(
                id = %supplier.id,
                replaced = %previous.name,
                kept = %supplier.name,
                "duplicate supplier id, later entry wins"
            );
        }
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<Barcode> {
            let [supplier_id, sku, barcode] = required_fields(row, Stage::Barcode, index)?;
            let supplier = supplier_by_id
                .get(supplier_id)
                .ok_or_else(|| Error::UnresolvedSupplier {
                    id: supplier_id.to_string(),
                })?;
            Ok(Barcode::new((*supplier).clone(), sku, barcode))
        })
        .collect()
}

/// Parse catalog rows (`sku`, `description`), attaching every barcode of
/// the row's sku
pub fn parse_catalog(rows: &[RawRow], barcodes: &[Barcode]) -> Result<Vec<CatalogItem>> {
    let mut barcodes_by_sku: HashMap<&str, Vec<&Barcode>> = HashMap::new();
    for barcode in barcodes {
        barcodes_by_sku
            .entry(barcode.sku.as_str())
            .or_default()
            .push(barcode);
    }

    rows.iter()
        .enumerate()
        .map(|(index, row)| -> Result<CatalogItem> {
            let [sku, description] = required_fields(row, Stage::Catalog, index)?;
            let group = barcodes_by_sku.get(sku).ok_or_else(|| Error::OrphanSku {
                sku: sku.to_string(),
            })?;
            Ok(CatalogItem {
                sku: sku.to_string(),
                description: description.to_string(),
                barcodes: group.iter().map(|b| (*b).clone()).collect(),
            })
        })
        .collect()
}

/// Check that a row has exactly `N` fields, none of them empty
fn required_fields<const N: usize>(
    row: &[String],
    stage: Stage,
    index: usize,
) -> Result<[&str; N]> {
    if row.len() != N || row.iter().any(String::is_empty) {
        return Err(Error::MalformedRow { stage, index });
    }

    let mut fields = [""; N];
    for (slot, value) in fields.iter_mut().zip(row) {
        *slot = value.as_str();
    }
    Ok(fields)
}
