//! reqwest-backed [`HotelApi`] implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, ApiResult};
use crate::http_client::HttpUtils;
use crate::mapping;
use crate::traits::HotelApi;
use crate::types::{ClientPayload, NameQuery, Reply};

/// Fixed path prefix shared by all operations.
pub const OPERATIONS_PREFIX: &str = "/api/v1/imoreno/hotel/operations";

/// Default server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// 默认连接超时（秒）
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;
/// 默认请求超时（秒）
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Connection settings for [`HotelClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Scheme and authority, e.g. `http://localhost:8000`.
    pub base_url: String,
    /// Whole-request deadline.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

/// HTTP client for the hotel operations API.
#[derive(Debug, Clone)]
pub struct HotelClient {
    client: Client,
    base_url: String,
}

impl HotelClient {
    /// Build a client; fails only if the TLS backend cannot be initialised.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let client = Client::builder()
            .connect_timeout(
                Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(config.timeout),
            )
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Transport {
                detail: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an operation path such as `/search`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{OPERATIONS_PREFIX}{path}", self.base_url)
    }

    async fn send_json(
        &self,
        method: reqwest::Method,
        path: &str,
        payload: &ClientPayload,
    ) -> ApiResult<(u16, String)> {
        let url = self.endpoint(path);
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Serialization {
            detail: e.to_string(),
        })?;
        log::debug!("Request Body: {body}");

        let builder = self
            .client
            .request(method.clone(), &url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);

        HttpUtils::execute_request(builder, method.as_str(), &url).await
    }

    async fn send_query(
        &self,
        method: reqwest::Method,
        path: &str,
        query: &NameQuery,
    ) -> ApiResult<(u16, String)> {
        let url = self.endpoint(path);
        let builder = self.client.request(method.clone(), &url).query(&query.pairs());

        HttpUtils::execute_request(builder, method.as_str(), &url).await
    }
}

#[async_trait]
impl HotelApi for HotelClient {
    async fn create(&self, payload: &ClientPayload) -> ApiResult<Reply> {
        let (status, body) = self
            .send_json(reqwest::Method::POST, "/add", payload)
            .await?;
        mapping::map_create(status, body)
    }

    async fn search(&self, query: &NameQuery) -> ApiResult<Reply> {
        let (status, body) = self
            .send_query(reqwest::Method::GET, "/search", query)
            .await?;
        mapping::map_search(status, body)
    }

    async fn update(&self, payload: &ClientPayload) -> ApiResult<Reply> {
        let (status, body) = self
            .send_json(reqwest::Method::PUT, "/update", payload)
            .await?;
        mapping::map_update(status, body)
    }

    async fn delete(&self, query: &NameQuery) -> ApiResult<Reply> {
        let (status, body) = self
            .send_query(reqwest::Method::DELETE, "/delete", query)
            .await?;
        mapping::map_delete(status, body)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_normalises_trailing_slash() {
        let client = HotelClient::new(ClientConfig {
            base_url: "http://example.test:8000/".to_string(),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://example.test:8000");
        assert_eq!(
            client.endpoint("/add"),
            "http://example.test:8000/api/v1/imoreno/hotel/operations/add"
        );
    }

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:8000");
        assert_eq!(config.timeout, Duration::from_secs(10));
    }
}
