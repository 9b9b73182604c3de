use super::http::{build_client, fetch_json};
use crate::ports::outbound::StockChecker;
use crate::shared::Result;
use crate::stock_check::domain::{PartIdentifier, StockLevel};
use crate::stock_check::policies::{RateLimitPolicy, RateLimiter};
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Default element14 storefront
pub const DEFAULT_FARNELL_STORE: &str = "uk.farnell.com";

/// Farnell / element14 Product Search API client
///
/// Searches by manufacturer part number in a single storefront and reads
/// the stock level from the inventory response group.
///
/// # Rate limiting
/// element14 allows two calls per second, so calls are spaced 500 ms apart.
pub struct FarnellClient {
    client: reqwest::Client,
    api_key: String,
    store: String,
    base_url: String,
    limiter: RateLimiter,
}

impl FarnellClient {
    const API_BASE: &'static str = "https://api.element14.com";
    const SEARCH_PATH: &'static str = "/catalog/products";
    const TIMEOUT_SECONDS: u64 = 30;
    const MIN_SPACING_MS: u64 = 500;
    const MAX_RESULTS: u32 = 10;

    pub fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(Self::TIMEOUT_SECONDS))?,
            api_key,
            store: DEFAULT_FARNELL_STORE.to_string(),
            base_url: Self::API_BASE.to_string(),
            limiter: RateLimiter::new(Self::policy()),
        })
    }

    pub fn policy() -> RateLimitPolicy {
        RateLimitPolicy::FixedSpacing {
            interval: Duration::from_millis(Self::MIN_SPACING_MS),
        }
    }

    /// Selects the storefront, e.g. `de.farnell.com` or `www.newark.com`
    pub fn with_store(mut self, store: impl Into<String>) -> Self {
        self.store = store.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    fn search_url(&self, part: &PartIdentifier) -> String {
        let term = format!("manuPartNum:{}", part);
        format!(
            "{}{}?term={}&storeInfo.id={}&resultsSettings.offset=0\
             &resultsSettings.numberOfResults={}&resultsSettings.responseGroup=inventory\
             &callInfo.responseDataFormat=JSON&callInfo.apiKey={}",
            self.base_url,
            Self::SEARCH_PATH,
            urlencoding::encode(&term),
            urlencoding::encode(&self.store),
            Self::MAX_RESULTS,
            urlencoding::encode(&self.api_key)
        )
    }

    fn interpret(part: &PartIdentifier, response: FarnellSearchResponse) -> StockLevel {
        let Some(search) = response.search_return else {
            return match response.fault {
                Some(fault) => StockLevel::failed(fault.describe()),
                None => StockLevel::failed("missing search result"),
            };
        };

        let candidates: Vec<u64> = search
            .products
            .iter()
            .filter(|p| {
                p.translated_manufacturer_part_number
                    .trim()
                    .eq_ignore_ascii_case(part.as_str())
            })
            .map(|p| p.stock.as_ref().and_then(|s| s.level).unwrap_or(0))
            .collect();

        StockLevel::from_candidates(&candidates)
    }
}

#[async_trait]
impl StockChecker for FarnellClient {
    fn vendor_name(&self) -> &str {
        "Farnell"
    }

    fn rate_limit(&self) -> RateLimitPolicy {
        self.limiter.policy()
    }

    async fn check_stock(&self, part: &PartIdentifier) -> StockLevel {
        tracing::debug!(mpn = %part, store = %self.store, "querying Farnell");
        let url = self.search_url(part);

        let result: std::result::Result<FarnellSearchResponse, String> =
            fetch_json(&self.limiter, "Farnell", || self.client.get(&url)).await;

        let level = match result {
            Ok(response) => Self::interpret(part, response),
            Err(details) => StockLevel::failed(details),
        };
        tracing::debug!(mpn = %part, %level, "Farnell answered");
        level
    }
}

// element14 API response structures

#[derive(Debug, Deserialize)]
struct FarnellSearchResponse {
    #[serde(rename = "manufacturerPartNumberSearchReturn", default)]
    search_return: Option<FarnellSearchReturn>,
    #[serde(rename = "Fault", default)]
    fault: Option<FarnellFault>,
}

#[derive(Debug, Deserialize)]
struct FarnellSearchReturn {
    #[serde(default)]
    products: Vec<FarnellProduct>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct FarnellProduct {
    #[serde(default)]
    translated_manufacturer_part_number: String,
    #[serde(default)]
    stock: Option<FarnellStock>,
}

#[derive(Debug, Deserialize)]
struct FarnellStock {
    #[serde(default)]
    level: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct FarnellFault {
    #[serde(rename = "faultstring", default)]
    fault_string: Option<String>,
}

impl FarnellFault {
    fn describe(&self) -> String {
        self.fault_string
            .clone()
            .unwrap_or_else(|| "API fault".to_string())
    }
}
