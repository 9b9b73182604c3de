use crate::stock_check::domain::{PartIdentifier, StockLevel};
use crate::stock_check::policies::RateLimitPolicy;
use async_trait::async_trait;

/// StockChecker port for querying one distributor's stock
///
/// Each implementation owns the rate limiter for its vendor and passes
/// every request through it. Lookups never fail: missing parts, ambiguous
/// matches and transport errors are all reported as `StockLevel::Unknown`
/// so one vendor cannot abort the run.
///
/// # Async Support
/// Implementations must be `Send + Sync`; the orchestrator drives all
/// vendors concurrently.
#[async_trait]
pub trait StockChecker: Send + Sync {
    /// Human-readable vendor name, used for report columns and progress
    fn vendor_name(&self) -> &str;

    /// The request limit this client enforces
    fn rate_limit(&self) -> RateLimitPolicy;

    /// Looks up the quantity currently in stock for `part`
    ///
    /// # Arguments
    /// * `part` - Manufacturer part number to search for
    ///
    /// # Returns
    /// `StockLevel::Available(n)` for a single exact match, otherwise
    /// `StockLevel::Unknown` carrying the reason.
    async fn check_stock(&self, part: &PartIdentifier) -> StockLevel;
}
