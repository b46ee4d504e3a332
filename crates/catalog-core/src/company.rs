//! Company assembly from the three record sets

use crate::error::Result;
use crate::model::Company;
use crate::parser::{parse_barcodes, parse_catalog, parse_suppliers};
use crate::reader::{read_rows, RawRow};
use std::path::PathBuf;

/// File locations for one company's input tables
#[derive(Debug, Clone)]
pub struct CompanySources {
    pub suppliers: PathBuf,
    pub barcodes: PathBuf,
    pub catalog: PathBuf,
}

/// Build a company from its raw supplier, barcode and catalog rows
pub fn assemble_company(
    name: impl Into<String>,
    supplier_rows: &[RawRow],
    barcode_rows: &[RawRow],
    catalog_rows: &[RawRow],
) -> Result<Company> {
    let suppliers = parse_suppliers(supplier_rows)?;
    let barcodes = parse_barcodes(barcode_rows, &suppliers)?;
    let catalog = parse_catalog(catalog_rows, &barcodes)?;

    Ok(Company {
        name: name.into(),
        suppliers,
        catalog,
    })
}

/// Read a company's three tables from disk and assemble it
pub fn load_company(name: impl Into<String>, sources: &CompanySources) -> Result<Company> {
    let supplier_rows = read_rows(&sources.suppliers)?;
    let barcode_rows = read_rows(&sources.barcodes)?;
    let catalog_rows = read_rows(&sources.catalog)?;

    let company = assemble_company(name, &supplier_rows, &barcode_rows, &catalog_rows)?;
    tracing::info!(
        company = %company.name,
        suppliers = company.suppliers.len(),
        items = company.item_count(),
        barcodes = company.barcode_count(),
        "loaded company"
    );
    Ok(company)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::Stage;
    use crate::reader::read_rows_str;
    use std::fs;

    const SUPPLIERS: &str = "ID,Name\n00001,Twitterbridge\n00002,Thoughtsphere\n";
    const BARCODES: &str = "SupplierID,SKU,Barcode\n\
        00001,647-vyk-317,z2783613083817\n\
        00002,647-vyk-317,z2783613083818\n\
        00001,280-oad-768,n7405223693844\n";
    const CATALOG: &str = "SKU,Description\n\
        647-vyk-317,Walkers Special Old Whiskey\n\
        280-oad-768,Bread - Raisin\n";

    fn table(content: &str) -> Vec<RawRow> {
        read_rows_str(content, "test.csv").unwrap()
    }

    #[test]
    fn test_assemble_company() {
        let company =
            assemble_company("A", &table(SUPPLIERS), &table(BARCODES), &table(CATALOG)).unwrap();

        assert_eq!(company.name, "A");
        assert_eq!(company.suppliers.len(), 2);
        assert_eq!(company.item_count(), 2);

        let whiskey = company.find_item("647-vyk-317").unwrap();
        assert_eq!(whiskey.barcodes.len(), 2);
        assert_eq!(whiskey.barcodes[1].supplier.name, "Thoughtsphere");
    }

    #[test]
    fn test_assemble_propagates_stage_errors() {
        let bad_suppliers = table("ID,Name\n00001\n");
        let err =
            assemble_company("A", &bad_suppliers, &table(BARCODES), &table(CATALOG)).unwrap_err();
        assert!(matches!(
            err,
            Error::MalformedRow { stage: Stage::Supplier, index: 0 }
        ));

        let bad_barcodes = table("SupplierID,SKU,Barcode\n00009,647-vyk-317,z1\n");
        let err =
            assemble_company("A", &table(SUPPLIERS), &bad_barcodes, &table(CATALOG)).unwrap_err();
        assert!(matches!(err, Error::UnresolvedSupplier { ref id } if id == "00009"));

        let bad_catalog = table("SKU,Description\n999-xxx-000,Nothing\n");
        let err =
            assemble_company("A", &table(SUPPLIERS), &table(BARCODES), &bad_catalog).unwrap_err();
        assert!(matches!(err, Error::OrphanSku { ref sku } if sku == "999-xxx-000"));
    }

    #[test]
    fn test_load_company_from_files() {
        let dir = tempfile::tempdir().unwrap();
        let sources = CompanySources {
            suppliers: dir.path().join("suppliersA.csv"),
            barcodes: dir.path().join("barcodesA.csv"),
            catalog: dir.path().join("catalogA.csv"),
        };
        fs::write(&sources.suppliers, SUPPLIERS).unwrap();
        fs::write(&sources.barcodes, BARCODES).unwrap();
        fs::write(&sources.catalog, CATALOG).unwrap();

        let company = load_company("A", &sources).unwrap();

        assert_eq!(company.item_count(), 2);
        assert_eq!(company.barcode_count(), 3);
    }

    #[test]
    fn test_load_company_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let sources = CompanySources {
            suppliers: dir.path().join("suppliersA.csv"),
            barcodes: dir.path().join("barcodesA.csv"),
            catalog: dir.path().join("catalogA.csv"),
        };
        fs::write(&sources.suppliers, SUPPLIERS).unwrap();

        match load_company("A", &sources) {
            Err(Error::SourceUnreadable { path, .. }) => assert_eq!(path, sources.barcodes),
            other => panic!("expected SourceUnreadable, got {:?}", other),
        }
    }
}
