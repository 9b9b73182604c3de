use crate::ports::outbound::CredentialProvider;
use crate::shared::error::StockCheckError;
use crate::stock_check::domain::VendorKind;
use std::collections::HashMap;

/// ResolvedCredentials adapter holding API keys resolved at startup
///
/// The CLI layer reads `--<vendor>-api-key` flags and their environment
/// variables; this adapter only stores the result. Keys are trimmed and a
/// blank key counts as missing.
#[derive(Default)]
pub struct ResolvedCredentials {
    keys: HashMap<VendorKind, String>,
}

impl ResolvedCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_key(mut self, vendor: VendorKind, key: Option<String>) -> Self {
        match key.map(|k| k.trim().to_string()) {
            Some(key) if !key.is_empty() => {
                self.keys.insert(vendor, key);
            }
            _ => {
                self.keys.remove(&vendor);
            }
        }
        self
    }

    fn hint(vendor: VendorKind) -> String {
        format!(
            "Set the {} environment variable or pass --{}-api-key",
            vendor.credential_env_var(),
            vendor.label().to_lowercase()
        )
    }
}

impl std::fmt::Debug for ResolvedCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let vendors: Vec<&VendorKind> = self.keys.keys().collect();
        f.debug_struct("ResolvedCredentials")
            .field("vendors", &vendors)
            .finish()
    }
}

impl CredentialProvider for ResolvedCredentials {
    fn credential(&self, vendor: VendorKind) -> Result<String, StockCheckError> {
        self.keys
            .get(&vendor)
            .cloned()
            .ok_or_else(|| StockCheckError::CredentialMissing {
                vendor: vendor.label().to_string(),
                hint: Self::hint(vendor),
            })
    }
}
