use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::stock_check::domain::{ReportRow, StockReport};
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport {
    generated_at: String,
    vendors: Vec<String>,
    parts: Vec<JsonPart>,
    issues: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonPart {
    mpn: String,
    score: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    required: Option<u32>,
    availability: Vec<JsonAvailability>,
}

#[derive(Debug, Serialize)]
struct JsonAvailability {
    vendor: String,
    available: bool,
}

/// JsonFormatter adapter for machine-readable stock reports
///
/// Keeps the report order: parts sorted by score, then MPN.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_part(&self, row: &ReportRow, vendors: &[String]) -> JsonPart {
        JsonPart {
            mpn: row.mpn.to_string(),
            score: row.score.bits(),
            required: row.required,
            availability: vendors
                .iter()
                .zip(&row.coverage)
                .map(|(vendor, available)| JsonAvailability {
                    vendor: vendor.clone(),
                    available: *available,
                })
                .collect(),
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &StockReport) -> Result<String> {
        let json = JsonReport {
            generated_at: report.generated_at().to_rfc3339(),
            vendors: report.vendor_labels().to_vec(),
            parts: report
                .rows()
                .iter()
                .map(|row| self.build_part(row, report.vendor_labels()))
                .collect(),
            issues: report.issues().iter().map(|m| m.to_string()).collect(),
        };

        serde_json::to_string_pretty(&json).map_err(Into::into)
    }
}
