use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::ReportFormatter;

/// Factory for creating report formatters
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bom_stockcheck::application::dto::OutputFormat;
    /// use bom_stockcheck::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Markdown);
    /// ```
    pub fn create(format: OutputFormat) -> Box<dyn ReportFormatter> {
        match format {
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new()),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use bom_stockcheck::application::dto::OutputFormat;
    /// use bom_stockcheck::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Json);
    /// assert_eq!(message, "📝 Generating JSON report...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Markdown => "📝 Generating Markdown report...",
            OutputFormat::Json => "📝 Generating JSON report...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock_check::domain::StockReport;

    #[test]
    fn test_create_formatters_render_their_format() {
        let report = StockReport::new(vec!["Mouser".to_string()], Vec::new());

        let markdown = FormatterFactory::create(OutputFormat::Markdown)
            .format(&report)
            .unwrap();
        assert!(markdown.starts_with("# BOM Stock Report"));

        let json = FormatterFactory::create(OutputFormat::Json)
            .format(&report)
            .unwrap();
        assert!(json.trim_start().starts_with('{'));
    }

    #[test]
    fn test_progress_message_markdown() {
        let message = FormatterFactory::progress_message(OutputFormat::Markdown);
        assert_eq!(message, "📝 Generating Markdown report...");
    }
}
