use crate::shared::Result;
use crate::stock_check::policies::RateLimiter;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Attempts per lookup, including the first one
pub(super) const MAX_ATTEMPTS: u32 = 3;

/// Builds the shared async HTTP client for vendor APIs
pub(super) fn build_client(timeout: Duration) -> Result<reqwest::Client> {
    let version = env!("CARGO_PKG_VERSION");
    let user_agent = format!("bom-stockcheck/{}", version);
    let client = reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

fn is_retryable(status: StatusCode) -> bool {
    status.is_server_error() || status == StatusCode::TOO_MANY_REQUESTS
}

/// Sends a request built by `make_request` and decodes the JSON body.
///
/// Every attempt waits on `limiter` first, so retries count against the
/// vendor's budget like any other call. Transport errors, 5xx and 429 are
/// retried with a short linear backoff; other statuses fail immediately.
/// The error is a short description suitable for a report.
pub(super) async fn fetch_json<T, F>(
    limiter: &RateLimiter,
    vendor: &str,
    mut make_request: F,
) -> std::result::Result<T, String>
where
    T: DeserializeOwned,
    F: FnMut() -> reqwest::RequestBuilder,
{
    let mut last_error = String::from("no attempt made");

    for attempt in 1..=MAX_ATTEMPTS {
        limiter.acquire().await;

        match make_request().send().await {
            Ok(response) if response.status().is_success() => {
                return response
                    .json::<T>()
                    .await
                    .map_err(|e| format!("invalid response: {}", e));
            }
            Ok(response) if is_retryable(response.status()) => {
                last_error = format!("HTTP {}", response.status().as_u16());
            }
            Ok(response) => {
                let status = response.status().as_u16();
                tracing::warn!(vendor, status, "vendor API rejected request");
                return Err(format!("HTTP {}", status));
            }
            Err(e) => {
                last_error = if e.is_timeout() {
                    "timeout".to_string()
                } else {
                    e.to_string()
                };
            }
        }

        tracing::warn!(vendor, attempt, error = %last_error, "stock lookup attempt failed");
        if attempt < MAX_ATTEMPTS {
            tokio::time::sleep(Duration::from_millis(100 * u64::from(attempt))).await;
        }
    }

    Err(last_error)
}
