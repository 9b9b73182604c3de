use crate::stock_check::domain::{BillOfMaterials, StockReport, VendorFinding};

/// StockCheckResponse - Internal response DTO from the stock check use case
///
/// `report` is `None` for a dry run; the BOM is always present.
#[derive(Debug, Clone)]
pub struct StockCheckResponse {
    pub bom: BillOfMaterials,
    pub report: Option<StockReport>,
    /// Every vendor answer, one per part and vendor
    pub findings: Vec<VendorFinding>,
    /// Shortage summary, present when at least one part has no vendor
    pub issue_summary: Option<String>,
    /// Exclusion patterns that matched no reference
    pub unmatched_patterns: Vec<String>,
}

impl StockCheckResponse {
    pub fn has_shortages(&self) -> bool {
        self.report.as_ref().is_some_and(StockReport::has_issues)
    }
}
