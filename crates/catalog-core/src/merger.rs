//! Merge engine for combining a parent and a child catalog with source tracking

use crate::model::{CatalogItem, Company};
use std::collections::HashSet;

/// A retained catalog item and the company it came from
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatalogResult<'a> {
    pub item: &'a CatalogItem,
    pub source: &'a Company,
}

impl<'a> CatalogResult<'a> {
    fn new(item: &'a CatalogItem, source: &'a Company) -> Self {
        Self { item, source }
    }

    /// Name of the source company
    pub fn source_name(&self) -> &'a str {
        &self.source.name
    }
}

/// Counts describing what a merge kept and dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MergeSummary {
    pub parent_items: usize,
    pub child_kept: usize,
    pub child_dropped: usize,
}

/// Merge the child catalog into the parent catalog
///
/// Every parent item is kept, in order. A child item is appended, in order,
/// only when none of its barcode values appears anywhere in the parent
/// catalog; a single shared barcode drops the whole item. A child sku is
/// emitted at most once, the first surviving row wins.
pub fn merge_catalogs<'a>(parent: &'a Company, child: &'a Company) -> Vec<CatalogResult<'a>> {
    let mut results: Vec<CatalogResult<'a>> = parent
        .catalog
        .iter()
        .map(|item| CatalogResult::new(item, parent))
        .collect();

    let parent_barcodes: HashSet<&str> = parent
        .catalog
        .iter()
        .flat_map(CatalogItem::barcode_values)
        .collect();

    let mut emitted_skus: HashSet<&str> = HashSet::new();
    for item in &child.catalog {
        if let Some(shared) = item.barcode_values().find(|code| parent_barcodes.contains(code)) {
            tracing::debug!(
                sku = %item.sku,
                barcode = shared,
                parent = %parent.name,
                child = %child.name,
                "dropping child item already in parent catalog"
            );
            continue;
        }

        if !emitted_skus.insert(item.sku.as_str()) {
            tracing::debug!(
                sku = %item.sku,
                child = %child.name,
                "dropping repeated child sku"
            );
            continue;
        }

        results.push(CatalogResult::new(item, child));
    }

    results
}

/// Summarize a result list produced by [`merge_catalogs`] for these companies
pub fn summarize(results: &[CatalogResult<'_>], parent: &Company, child: &Company) -> MergeSummary {
    // Parent items always lead the result list, so everything after them is from the child
    let parent_items = parent.catalog.len();
    let child_kept = results.len().saturating_sub(parent_items);

    MergeSummary {
        parent_items,
        child_kept,
        child_dropped: child.catalog.len().saturating_sub(child_kept),
    }
}
