//! HTTP client wrapper - fetches car pages and classifies failures

use std::time::{Duration, Instant};

use crate::messages::FetchResponse;
use crate::models::{Brand, CarPage};

/// Build the listing URL for a brand filter
///
/// The brand query parameter is always present; its value is empty for
/// the unfiltered listing. Brand values are a fixed ASCII set and need no
/// percent-encoding.
pub fn cars_url(base_url: &str, brand: Brand) -> String {
    format!(
        "{}/cars?brand={}",
        base_url.trim_end_matches('/'),
        brand.query_value()
    )
}

/// Execute one car-list fetch and map the outcome to a response message
pub async fn fetch_cars(
    client: &reqwest::Client,
    base_url: &str,
    brand: Brand,
    request_id: u64,
) -> FetchResponse {
    let start = Instant::now();
    let url = cars_url(base_url, brand);

    let result = client.get(&url).send().await;

    match result {
        Ok(resp) => {
            let status = resp.status();
            if !status.is_success() {
                return FetchResponse::Error {
                    id: request_id,
                    message: format!("Backend returned {}", status),
                    time_ms: start.elapsed().as_millis() as u64,
                };
            }
            match resp.json::<CarPage>().await {
                Ok(page) => FetchResponse::Cars {
                    id: request_id,
                    cars: page.cars,
                    time_ms: start.elapsed().as_millis() as u64,
                },
                Err(e) => FetchResponse::Error {
                    id: request_id,
                    message: format!("Malformed response body: {}", e),
                    time_ms: start.elapsed().as_millis() as u64,
                },
            }
        }
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            FetchResponse::Error {
                id: request_id,
                message: msg,
                time_ms: start.elapsed().as_millis() as u64,
            }
        }
    }
}

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}
