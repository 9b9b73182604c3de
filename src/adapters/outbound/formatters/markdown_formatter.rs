use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::stock_check::domain::{ReportRow, StockReport};

/// Cell marker for a vendor that can supply the required quantity
const AVAILABLE_MARK: &str = "✅";

/// Cell marker for a vendor that cannot (or did not answer)
const UNAVAILABLE_MARK: &str = "❌";

/// MarkdownFormatter adapter for the human-readable stock report
///
/// Renders one table row per part with a ✅/❌ cell per vendor, followed by
/// an issues section listing parts no vendor can supply.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, report: &StockReport) {
        output.push_str("# BOM Stock Report\n\n");
        output.push_str(&format!(
            "Generated: {}\n\n",
            report.generated_at().format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    fn render_table(&self, output: &mut String, report: &StockReport) {
        output.push_str("| MPN |");
        for label in report.vendor_labels() {
            output.push_str(&format!(" {} |", Self::escape_markdown_table_cell(label)));
        }
        output.push('\n');

        output.push_str("|---|");
        for _ in report.vendor_labels() {
            output.push_str("---|");
        }
        output.push('\n');

        for row in report.rows() {
            self.render_row(output, row);
        }
        output.push('\n');
    }

    fn render_row(&self, output: &mut String, row: &ReportRow) {
        output.push_str(&format!(
            "| {} |",
            Self::escape_markdown_table_cell(row.mpn.as_str())
        ));
        for available in &row.coverage {
            let mark = if *available {
                AVAILABLE_MARK
            } else {
                UNAVAILABLE_MARK
            };
            output.push_str(&format!(" {} |", mark));
        }
        output.push('\n');
    }

    fn render_issues(&self, output: &mut String, report: &StockReport) {
        output.push_str("## Issues\n\n");

        if !report.has_issues() {
            output.push_str("All parts are available from at least one vendor.\n");
            return;
        }

        let count = report.issues().len();
        output.push_str(&format!(
            "**{} {} cannot be sourced in the required quantity from any vendor.**\n\n",
            count,
            if count == 1 { "part" } else { "parts" }
        ));

        for row in report.rows().iter().filter(|row| row.is_issue()) {
            match row.required {
                Some(required) => {
                    output.push_str(&format!("- {} (required: {})\n", row.mpn, required))
                }
                None => output.push_str(&format!("- {}\n", row.mpn)),
            }
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &StockReport) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, report);
        self.render_table(&mut output, report);
        self.render_issues(&mut output, report);

        Ok(output)
    }
}
