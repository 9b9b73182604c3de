use bom_stockcheck::prelude::*;
use bom_stockcheck::shared::error::StockCheckError;

/// Mock CredentialProvider with every key present except the listed vendors
#[derive(Default)]
pub struct MockCredentials {
    missing: Vec<VendorKind>,
}

impl MockCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn without(mut self, vendor: VendorKind) -> Self {
        self.missing.push(vendor);
        self
    }
}

impl CredentialProvider for MockCredentials {
    fn credential(&self, vendor: VendorKind) -> std::result::Result<String, StockCheckError> {
        if self.missing.contains(&vendor) {
            return Err(StockCheckError::CredentialMissing {
                vendor: vendor.label().to_string(),
                hint: format!("Set the {} environment variable", vendor.credential_env_var()),
            });
        }
        Ok(format!("{}-test-key", vendor))
    }
}
