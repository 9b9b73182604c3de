use crate::stock_check::domain::VendorKind;
use std::path::PathBuf;

/// StockCheckRequest - Internal request DTO for the stock check use case
#[derive(Debug, Clone)]
pub struct StockCheckRequest {
    /// BOM file to read references from
    pub bom_path: PathBuf,
    /// Reference exclusion patterns; the defaults apply when empty
    pub exclude_patterns: Vec<String>,
    /// Vendors to query, in column order
    pub vendors: Vec<VendorKind>,
    /// Aggregate the BOM only, without credentials or vendor calls
    pub dry_run: bool,
}

impl StockCheckRequest {
    pub fn new(
        bom_path: PathBuf,
        exclude_patterns: Vec<String>,
        vendors: Vec<VendorKind>,
        dry_run: bool,
    ) -> Self {
        Self {
            bom_path,
            exclude_patterns,
            vendors,
            dry_run,
        }
    }
}
