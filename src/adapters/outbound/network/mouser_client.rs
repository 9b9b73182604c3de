use super::http::{build_client, fetch_json};
use crate::ports::outbound::StockChecker;
use crate::shared::Result;
use crate::stock_check::domain::{PartIdentifier, StockLevel};
use crate::stock_check::policies::{RateLimitPolicy, RateLimiter};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Mouser Search API client
///
/// Uses the exact part-number search endpoint and keeps the parts whose
/// manufacturer part number equals the requested MPN.
///
/// # Rate limiting
/// Mouser allows 30 calls per minute. Calls are batched in windows of 30
/// with a 65 second window to leave a safety margin.
pub struct MouserClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    limiter: RateLimiter,
}

impl MouserClient {
    const API_BASE: &'static str = "https://api.mouser.com";
    const SEARCH_PATH: &'static str = "/api/v1/search/partnumber";
    const TIMEOUT_SECONDS: u64 = 30;
    const MAX_CALLS_PER_WINDOW: u32 = 30;
    const WINDOW_SECONDS: u64 = 65;

    /// Creates a client for the production API
    pub fn new(api_key: String) -> Result<Self> {
        Ok(Self {
            client: build_client(Duration::from_secs(Self::TIMEOUT_SECONDS))?,
            api_key,
            base_url: Self::API_BASE.to_string(),
            limiter: RateLimiter::new(Self::policy()),
        })
    }

    /// Mouser's documented call budget
    pub fn policy() -> RateLimitPolicy {
        RateLimitPolicy::FixedWindow {
            max_calls: Self::MAX_CALLS_PER_WINDOW,
            window: Duration::from_secs(Self::WINDOW_SECONDS),
        }
    }

    /// Points the client at another host (used with local mock servers)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_rate_limiter(mut self, limiter: RateLimiter) -> Self {
        self.limiter = limiter;
        self
    }

    fn search_url(&self) -> String {
        format!(
            "{}{}?apiKey={}",
            self.base_url,
            Self::SEARCH_PATH,
            urlencoding::encode(&self.api_key)
        )
    }

    fn interpret(part: &PartIdentifier, response: MouserSearchResponse) -> StockLevel {
        if !response.errors.is_empty() {
            let messages: Vec<String> = response
                .errors
                .iter()
                .map(|e| e.message.clone().unwrap_or_else(|| "unspecified error".to_string()))
                .collect();
            return StockLevel::failed(messages.join(", "));
        }

        let parts = response
            .search_results
            .map(|results| results.parts)
            .unwrap_or_default();
        let candidates: Vec<&MouserPart> = parts
            .iter()
            .filter(|p| {
                p.manufacturer_part_number
                    .trim()
                    .eq_ignore_ascii_case(part.as_str())
            })
            .collect();

        let quantities: std::result::Result<Vec<u64>, &str> = candidates
            .iter()
            .map(|p| {
                let raw = p.availability_in_stock.as_deref();
                parse_stock(raw).ok_or(raw.unwrap_or_default())
            })
            .collect();

        match quantities {
            Ok(quantities) => StockLevel::from_candidates(&quantities),
            Err(raw) => StockLevel::failed(format!("unreadable stock value '{}'", raw)),
        }
    }
}

#[async_trait]
impl StockChecker for MouserClient {
    fn vendor_name(&self) -> &str {
        "Mouser"
    }

    fn rate_limit(&self) -> RateLimitPolicy {
        self.limiter.policy()
    }

    async fn check_stock(&self, part: &PartIdentifier) -> StockLevel {
        tracing::debug!(mpn = %part, "querying Mouser");

        let body = MouserSearchRequest {
            search_by_part_request: MouserPartQuery {
                mouser_part_number: part.to_string(),
                part_search_options: "Exact".to_string(),
            },
        };
        let url = self.search_url();

        let result: std::result::Result<MouserSearchResponse, String> =
            fetch_json(&self.limiter, "Mouser", || self.client.post(&url).json(&body)).await;

        let level = match result {
            Ok(response) => Self::interpret(part, response),
            Err(details) => StockLevel::failed(details),
        };
        tracing::debug!(mpn = %part, %level, "Mouser answered");
        level
    }
}

/// `AvailabilityInStock` is a string; null means nothing in stock.
fn parse_stock(value: Option<&str>) -> Option<u64> {
    match value.map(str::trim) {
        None | Some("") => Some(0),
        Some(text) => text.replace(',', "").parse().ok(),
    }
}

// Mouser API request/response structures

#[derive(Debug, Serialize)]
struct MouserSearchRequest {
    #[serde(rename = "SearchByPartRequest")]
    search_by_part_request: MouserPartQuery,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MouserPartQuery {
    mouser_part_number: String,
    part_search_options: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserSearchResponse {
    #[serde(default)]
    errors: Vec<MouserError>,
    #[serde(default)]
    search_results: Option<MouserSearchResults>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserError {
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserSearchResults {
    #[serde(default)]
    parts: Vec<MouserPart>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MouserPart {
    #[serde(default)]
    manufacturer_part_number: String,
    #[serde(default)]
    availability_in_stock: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stock_check::domain::UnknownReason;
    use httpmock::prelude::*;
    use serde_json::json;

    fn mpn(s: &str) -> PartIdentifier {
        PartIdentifier::new(s).unwrap()
    }

    fn test_client(server: &MockServer) -> MouserClient {
        MouserClient::new("test-key".to_string())
            .unwrap()
            .with_base_url(server.base_url())
            .with_rate_limiter(RateLimiter::unlimited())
    }

    fn response(parts: serde_json::Value) -> serde_json::Value {
        json!({
            "Errors": [],
            "SearchResults": { "NumberOfResult": 1, "Parts": parts }
        })
    }

    #[test]
    fn test_mouser_client_creation() {
        let client = MouserClient::new("key".to_string());
        assert!(client.is_ok());
        assert_eq!(client.unwrap().rate_limit(), MouserClient::policy());
    }

    #[test]
    fn test_request_serialization() {
        let body = MouserSearchRequest {
            search_by_part_request: MouserPartQuery {
                mouser_part_number: "LM358DR".to_string(),
                part_search_options: "Exact".to_string(),
            },
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            json!({
                "SearchByPartRequest": {"mouserPartNumber": "LM358DR", "partSearchOptions": "Exact"}
            })
        );
    }

    #[test]
    fn test_search_url_encodes_key() {
        let client = MouserClient::new("a+b/c".to_string())
            .unwrap()
            .with_base_url("http://localhost:1/");
        assert_eq!(
            client.search_url(),
            "http://localhost:1/api/v1/search/partnumber?apiKey=a%2Bb%2Fc"
        );
    }

    #[test]
    fn test_parse_stock() {
        assert_eq!(parse_stock(Some("1234")), Some(1234));
        assert_eq!(parse_stock(Some("12,345")), Some(12345));
        assert_eq!(parse_stock(None), Some(0));
        assert_eq!(parse_stock(Some("")), Some(0));
        assert_eq!(parse_stock(Some("On Order")), None);
    }

    #[test]
    fn test_interpret_errors_are_failures() {
        let response: MouserSearchResponse = serde_json::from_value(json!({
            "Errors": [{"Code": "Invalid", "Message": "Invalid unique identifier."}],
            "SearchResults": null
        }))
        .unwrap();
        assert_eq!(
            MouserClient::interpret(&mpn("X"), response),
            StockLevel::failed("Invalid unique identifier.")
        );
    }

    #[test]
    fn test_interpret_ignores_other_part_numbers() {
        let response: MouserSearchResponse = serde_json::from_value(response(json!([
            {"ManufacturerPartNumber": "LM358DRG4", "AvailabilityInStock": "50"},
            {"ManufacturerPartNumber": "lm358dr", "AvailabilityInStock": "7"}
        ])))
        .unwrap();
        assert_eq!(
            MouserClient::interpret(&mpn("LM358DR"), response),
            StockLevel::Available(7)
        );
    }

    #[test]
    fn test_interpret_multiple_matches_are_ambiguous() {
        let response: MouserSearchResponse = serde_json::from_value(response(json!([
            {"ManufacturerPartNumber": "LM358DR", "AvailabilityInStock": "50"},
            {"ManufacturerPartNumber": "LM358DR", "AvailabilityInStock": "7"}
        ])))
        .unwrap();
        assert_eq!(
            MouserClient::interpret(&mpn("LM358DR"), response),
            StockLevel::Unknown(UnknownReason::Ambiguous(2))
        );
    }

    #[test]
    fn test_interpret_unreadable_stock_is_failure() {
        let response: MouserSearchResponse = serde_json::from_value(response(json!([
            {"ManufacturerPartNumber": "LM358DR", "AvailabilityInStock": "On Order"}
        ])))
        .unwrap();
        assert_eq!(
            MouserClient::interpret(&mpn("LM358DR"), response),
            StockLevel::failed("unreadable stock value 'On Order'")
        );
    }

    #[test]
    fn test_interpret_null_stock_is_zero() {
        let response: MouserSearchResponse = serde_json::from_value(response(json!([
            {"ManufacturerPartNumber": "LM358DR", "AvailabilityInStock": null}
        ])))
        .unwrap();
        assert_eq!(
            MouserClient::interpret(&mpn("LM358DR"), response),
            StockLevel::Available(0)
        );
    }

    #[tokio::test]
    async fn test_check_stock_available() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/v1/search/partnumber")
                    .query_param("apiKey", "test-key")
                    .json_body_partial(
                        r#"{"SearchByPartRequest": {"mouserPartNumber": "LM358DR"}}"#,
                    );
                then.status(200).json_body(response(json!([
                    {"ManufacturerPartNumber": "LM358DR", "AvailabilityInStock": "1523"}
                ])));
            })
            .await;

        let level = test_client(&server).check_stock(&mpn("LM358DR")).await;

        mock.assert_async().await;
        assert_eq!(level, StockLevel::Available(1523));
    }

    #[tokio::test]
    async fn test_check_stock_not_found() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/search/partnumber");
                then.status(200).json_body(response(json!([])));
            })
            .await;

        let level = test_client(&server).check_stock(&mpn("NOPE-1")).await;
        assert_eq!(level, StockLevel::not_found());
    }

    #[tokio::test]
    async fn test_check_stock_retries_server_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/search/partnumber");
                then.status(503);
            })
            .await;

        let level = test_client(&server).check_stock(&mpn("LM358DR")).await;

        assert_eq!(mock.hits_async().await, 3);
        assert_eq!(level, StockLevel::failed("HTTP 503"));
    }

    #[tokio::test]
    async fn test_check_stock_does_not_retry_client_errors() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/search/partnumber");
                then.status(401);
            })
            .await;

        let level = test_client(&server).check_stock(&mpn("LM358DR")).await;

        assert_eq!(mock.hits_async().await, 1);
        assert_eq!(level, StockLevel::failed("HTTP 401"));
    }

    #[tokio::test]
    async fn test_check_stock_invalid_json_is_unknown() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/v1/search/partnumber");
                then.status(200).body("<html>maintenance</html>");
            })
            .await;

        let level = test_client(&server).check_stock(&mpn("LM358DR")).await;
        assert!(matches!(
            level,
            StockLevel::Unknown(UnknownReason::RequestFailed(_))
        ));
    }
}
