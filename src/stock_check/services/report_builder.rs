use crate::stock_check::domain::{
    BillOfMaterials, PartIdentifier, PartScore, ReportRow, StockReport, VendorFinding,
};
use std::collections::HashMap;

/// ReportBuilder - Turns per-part scores into the ordered stock report
pub struct ReportBuilder;

impl ReportBuilder {
    /// Builds the report sorted by (score, MPN) ascending.
    ///
    /// Column `i` of each row tells whether bit `i` of the score is set, so
    /// `vendor_labels` must list vendors in bit order.
    ///
    /// # Arguments
    /// * `scores` - Final score of every part in the BOM
    /// * `vendor_labels` - Column labels, one per score bit
    ///
    /// # Returns
    /// A report whose rows have no required quantity yet; see
    /// [`Self::annotate_required`].
    pub fn build(
        scores: &HashMap<PartIdentifier, PartScore>,
        vendor_labels: &[String],
    ) -> StockReport {
        let mut entries: Vec<(&PartIdentifier, PartScore)> =
            scores.iter().map(|(mpn, score)| (mpn, *score)).collect();
        entries.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));

        let rows = entries
            .into_iter()
            .map(|(mpn, score)| ReportRow {
                mpn: mpn.clone(),
                score,
                required: None,
                coverage: (0..vendor_labels.len())
                    .map(|bit| u8::try_from(bit).is_ok_and(|bit| score.is_set(bit)))
                    .collect(),
            })
            .collect();

        StockReport::new(vendor_labels.to_vec(), rows)
    }

    /// Fills in the required quantity of every row from the BOM.
    pub fn annotate_required(report: &mut StockReport, bom: &BillOfMaterials) {
        for row in report.rows_mut() {
            row.required = bom.quantity(&row.mpn);
        }
    }

    /// Human-readable shortage summary, one bullet per zero-score part.
    ///
    /// Returns `None` when every part is covered by at least one vendor.
    pub fn describe_issues(report: &StockReport, findings: &[VendorFinding]) -> Option<String> {
        if !report.has_issues() {
            return None;
        }

        let mut by_part: HashMap<&PartIdentifier, Vec<&VendorFinding>> = HashMap::new();
        for finding in findings {
            by_part.entry(&finding.mpn).or_default().push(finding);
        }

        let mut summary = String::from("Issues found with the following parts:\n");
        for row in report.rows().iter().filter(|row| row.is_issue()) {
            let mut details: Vec<String> = Vec::new();
            if let Some(required) = row.required {
                details.push(format!("required {}", required));
            }

            let mut part_findings = by_part.remove(&row.mpn).unwrap_or_default();
            part_findings.sort_by_key(|f| f.vendor_bit);
            for finding in part_findings {
                let label = report
                    .vendor_labels()
                    .get(usize::from(finding.vendor_bit))
                    .map(String::as_str)
                    .unwrap_or("unknown vendor");
                details.push(format!("{}: {}", label, finding.level));
            }

            if details.is_empty() {
                summary.push_str(&format!("* {}\n", row.mpn));
            } else {
                summary.push_str(&format!("* {}: {}\n", row.mpn, details.join("; ")));
            }
        }

        Some(summary)
    }
}
