use crate::adapters::outbound::network::{FarnellClient, MouserClient, DEFAULT_FARNELL_STORE};
use crate::ports::outbound::StockChecker;
use crate::shared::Result;
use crate::stock_check::domain::VendorKind;
use std::sync::Arc;

/// Creates stock checkers once their credential has been resolved
///
/// The use case depends on this trait so tests can substitute in-memory
/// checkers for the HTTP clients.
pub trait VendorClientFactory {
    fn create(&self, vendor: VendorKind, api_key: String) -> Result<Arc<dyn StockChecker>>;
}

/// Factory for the production HTTP vendor clients
pub struct HttpVendorFactory {
    farnell_store: String,
}

impl HttpVendorFactory {
    pub fn new() -> Self {
        Self {
            farnell_store: DEFAULT_FARNELL_STORE.to_string(),
        }
    }

    pub fn with_farnell_store(mut self, store: impl Into<String>) -> Self {
        self.farnell_store = store.into();
        self
    }
}

impl Default for HttpVendorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl VendorClientFactory for HttpVendorFactory {
    fn create(&self, vendor: VendorKind, api_key: String) -> Result<Arc<dyn StockChecker>> {
        let checker: Arc<dyn StockChecker> = match vendor {
            VendorKind::Mouser => Arc::new(MouserClient::new(api_key)?),
            VendorKind::Farnell => {
                Arc::new(FarnellClient::new(api_key)?.with_store(self.farnell_store.clone()))
            }
        };
        Ok(checker)
    }
}
