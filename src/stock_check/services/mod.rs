mod bom_aggregator;
mod reference_filter;
mod report_builder;

pub use bom_aggregator::BomAggregator;
pub use reference_filter::{ReferenceFilter, DEFAULT_EXCLUDE_PATTERNS};
pub use report_builder::ReportBuilder;
