/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with vendors, files, credentials and the console.
pub mod bom_source;
pub mod credential_provider;
pub mod notification_sink;
pub mod output_presenter;
pub mod progress_reporter;
pub mod report_formatter;
pub mod stock_checker;

pub use bom_source::BomSource;
pub use credential_provider::CredentialProvider;
pub use notification_sink::NotificationSink;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use report_formatter::ReportFormatter;
pub use stock_checker::StockChecker;
