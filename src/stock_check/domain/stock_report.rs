use super::{PartIdentifier, PartScore};
use chrono::{DateTime, Utc};

/// One report line: a part and which vendors can cover it
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub mpn: PartIdentifier,
    pub score: PartScore,
    /// Required quantity, when the report was annotated with the BOM
    pub required: Option<u32>,
    /// One entry per vendor label, in label order
    pub coverage: Vec<bool>,
}

impl ReportRow {
    pub fn is_issue(&self) -> bool {
        self.score.is_zero()
    }
}

/// Final, ordered stock report
///
/// Rows are sorted by (score, MPN) ascending so the worst-covered parts come
/// first. `issues` lists the zero-score parts in the same order.
#[derive(Debug, Clone, PartialEq)]
pub struct StockReport {
    vendor_labels: Vec<String>,
    rows: Vec<ReportRow>,
    issues: Vec<PartIdentifier>,
    generated_at: DateTime<Utc>,
}

impl StockReport {
    pub fn new(vendor_labels: Vec<String>, rows: Vec<ReportRow>) -> Self {
        let issues = rows
            .iter()
            .filter(|row| row.is_issue())
            .map(|row| row.mpn.clone())
            .collect();
        Self {
            vendor_labels,
            rows,
            issues,
            generated_at: Utc::now(),
        }
    }

    pub fn vendor_labels(&self) -> &[String] {
        &self.vendor_labels
    }

    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [ReportRow] {
        &mut self.rows
    }

    pub fn issues(&self) -> &[PartIdentifier] {
        &self.issues
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    #[cfg(test)]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}
