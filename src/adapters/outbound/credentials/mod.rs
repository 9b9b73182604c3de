/// Credential adapters
mod resolved_credentials;

pub use resolved_credentials::ResolvedCredentials;
