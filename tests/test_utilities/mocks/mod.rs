/// Mock implementations for testing
mod mock_bom_source;
mod mock_credentials;
mod mock_notifier;
mod mock_progress_reporter;
mod mock_stock_checker;

pub use mock_bom_source::MockBomSource;
pub use mock_credentials::MockCredentials;
pub use mock_notifier::MockNotifier;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_stock_checker::{MockStockChecker, MockVendorFactory};
