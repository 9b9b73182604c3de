use async_trait::async_trait;
use bom_stockcheck::prelude::*;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Mock StockChecker answering from an in-memory table
///
/// Unlisted MPNs are reported as not found.
pub struct MockStockChecker {
    name: String,
    stock: HashMap<String, StockLevel>,
    limiter: RateLimiter,
    calls: AtomicUsize,
}

impl MockStockChecker {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            stock: HashMap::new(),
            limiter: RateLimiter::unlimited(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn with_stock(mut self, mpn: &str, level: StockLevel) -> Self {
        self.stock.insert(mpn.to_string(), level);
        self
    }

    pub fn with_policy(mut self, policy: RateLimitPolicy) -> Self {
        self.limiter = RateLimiter::new(policy);
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl StockChecker for MockStockChecker {
    fn vendor_name(&self) -> &str {
        &self.name
    }

    fn rate_limit(&self) -> RateLimitPolicy {
        self.limiter.policy()
    }

    async fn check_stock(&self, part: &PartIdentifier) -> StockLevel {
        self.limiter.acquire().await;
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.stock
            .get(part.as_str())
            .cloned()
            .unwrap_or_else(StockLevel::not_found)
    }
}

/// Mock VendorClientFactory handing out pre-built checkers
#[derive(Default)]
pub struct MockVendorFactory {
    checkers: HashMap<VendorKind, Arc<MockStockChecker>>,
}

impl MockVendorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_checker(mut self, vendor: VendorKind, checker: Arc<MockStockChecker>) -> Self {
        self.checkers.insert(vendor, checker);
        self
    }
}

impl VendorClientFactory for MockVendorFactory {
    fn create(&self, vendor: VendorKind, _api_key: String) -> Result<Arc<dyn StockChecker>> {
        let checker: Arc<dyn StockChecker> = self
            .checkers
            .get(&vendor)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no mock checker for {}", vendor))?;
        Ok(checker)
    }
}
