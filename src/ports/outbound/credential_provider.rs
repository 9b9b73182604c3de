use crate::shared::error::StockCheckError;
use crate::stock_check::domain::VendorKind;

/// CredentialProvider port for vendor API keys
///
/// The checker never reads key files or environment variables itself; it
/// only asks this port for an already-resolved secret.
pub trait CredentialProvider {
    /// Returns the API key for `vendor`
    ///
    /// # Arguments
    /// * `vendor` - Vendor whose key is needed
    ///
    /// # Errors
    /// Returns `StockCheckError::CredentialMissing` when no key is available.
    fn credential(&self, vendor: VendorKind) -> Result<String, StockCheckError>;
}
