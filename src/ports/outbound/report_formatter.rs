use crate::shared::Result;
use crate::stock_check::domain::StockReport;

/// ReportFormatter port for rendering the stock report
pub trait ReportFormatter {
    /// Renders the complete report artifact
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, report: &StockReport) -> Result<String>;
}
