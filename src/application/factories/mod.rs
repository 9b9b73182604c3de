mod formatter_factory;
mod presenter_factory;
mod vendor_factory;

pub use formatter_factory::FormatterFactory;
pub use presenter_factory::{PresenterFactory, PresenterType};
pub use vendor_factory::{HttpVendorFactory, VendorClientFactory};
