//! Google Books Client - 调用 Google Books volumes 检索接口
//!
//! 实现 BookCatalogPort trait
//!
//! 外部 API:
//! GET https://www.googleapis.com/books/v1/volumes?q=<title author>&maxResults=1&key=<key>
//! Response: {"items": [{"volumeInfo": {"description": "..."}}]}  (JSON)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::application::ports::{BookCatalogPort, CatalogError};
use crate::domain::BookQuery;

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    #[serde(default)]
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo", default)]
    volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Deserialize)]
struct VolumeInfo {
    #[serde(default)]
    description: Option<String>,
}

/// Google Books 客户端配置
#[derive(Debug, Clone)]
pub struct GoogleBooksClientConfig {
    /// API 基础 URL
    pub base_url: String,
    /// API Key，为空时不附带
    pub api_key: String,
    /// 请求超时时间（秒）
    pub timeout_secs: u64,
}

impl Default for GoogleBooksClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.googleapis.com/books/v1".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
        }
    }
}

impl GoogleBooksClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = key.into();
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Books 客户端
pub struct GoogleBooksClient {
    client: Client,
    config: GoogleBooksClientConfig,
}

impl GoogleBooksClient {
    pub fn new(config: GoogleBooksClientConfig) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| CatalogError::NetworkError(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn volumes_url(&self) -> String {
        format!("{}/volumes", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl BookCatalogPort for GoogleBooksClient {
    async fn find_description(&self, query: &BookQuery) -> Result<Option<String>, CatalogError> {
        let term = query.search_term();

        let mut params = vec![("q", term.as_str()), ("maxResults", "1")];
        if !self.config.api_key.is_empty() {
            params.push(("key", self.config.api_key.as_str()));
        }

        tracing::debug!(url = %self.volumes_url(), q = %term, "Searching book catalog");

        let response = self
            .client
            .get(self.volumes_url())
            .query(&params)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CatalogError::Timeout
                } else {
                    CatalogError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(CatalogError::ServiceError(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let body: VolumesResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::InvalidResponse(e.to_string()))?;

        let description = body
            .items
            .into_iter()
            .next()
            .and_then(|item| item.volume_info)
            .and_then(|info| info.description)
            .filter(|d| !d.is_empty());

        Ok(description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Title};
    use crate::infrastructure::adapters::stub;
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn dune() -> BookQuery {
        BookQuery::new(
            Title::new("Dune").unwrap(),
            Author::new("Frank Herbert").unwrap(),
        )
    }

    async fn client_for(router: Router, key: &str) -> GoogleBooksClient {
        let base_url = stub::spawn(router).await;
        GoogleBooksClient::new(GoogleBooksClientConfig::new(base_url).with_api_key(key)).unwrap()
    }

    fn returning(body: Value) -> Router {
        Router::new().route("/volumes", get(move || async move { Json(body) }))
    }

    #[test]
    fn test_config_builder() {
        let config = GoogleBooksClientConfig::new("http://example.com")
            .with_api_key("k")
            .with_timeout(3);
        assert_eq!(config.base_url, "http://example.com");
        assert_eq!(config.api_key, "k");
        assert_eq!(config.timeout_secs, 3);
    }

    #[tokio::test]
    async fn test_returns_first_description() {
        let client = client_for(
            returning(json!({
                "items": [
                    {"volumeInfo": {"description": "A desert planet saga"}},
                    {"volumeInfo": {"description": "ignored"}}
                ]
            })),
            "",
        )
        .await;

        let desc = client.find_description(&dune()).await.unwrap();
        assert_eq!(desc.as_deref(), Some("A desert planet saga"));
    }

    #[tokio::test]
    async fn test_sends_encoded_query_and_key() {
        let router = Router::new().route(
            "/volumes",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let echo = format!(
                    "{}|{}|{}",
                    params.get("q").cloned().unwrap_or_default(),
                    params.get("maxResults").cloned().unwrap_or_default(),
                    params.get("key").cloned().unwrap_or_default(),
                );
                Json(json!({"items": [{"volumeInfo": {"description": echo}}]}))
            }),
        );
        let client = client_for(router, "secret").await;

        let desc = client.find_description(&dune()).await.unwrap();
        assert_eq!(desc.as_deref(), Some("Dune Frank Herbert|1|secret"));
    }

    #[tokio::test]
    async fn test_omits_key_when_unset() {
        let router = Router::new().route(
            "/volumes",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let has_key = params.contains_key("key").to_string();
                Json(json!({"items": [{"volumeInfo": {"description": has_key}}]}))
            }),
        );
        let client = client_for(router, "").await;

        let desc = client.find_description(&dune()).await.unwrap();
        assert_eq!(desc.as_deref(), Some("false"));
    }

    #[tokio::test]
    async fn test_zero_items_is_none() {
        let client = client_for(returning(json!({"totalItems": 0})), "").await;
        assert_eq!(client.find_description(&dune()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_description_is_none() {
        let client = client_for(
            returning(json!({"items": [{"volumeInfo": {"title": "Dune"}}]})),
            "",
        )
        .await;
        assert_eq!(client.find_description(&dune()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_missing_volume_info_is_none() {
        let client = client_for(returning(json!({"items": [{}]})), "").await;
        assert_eq!(client.find_description(&dune()).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_server_error_is_service_error() {
        let router = Router::new().route(
            "/volumes",
            get(|| async { (StatusCode::FORBIDDEN, "quota exceeded") }),
        );
        let client = client_for(router, "").await;

        let err = client.find_description(&dune()).await.unwrap_err();
        assert!(matches!(err, CatalogError::ServiceError(ref m) if m.contains("403")));
    }

    #[tokio::test]
    async fn test_malformed_body_is_invalid_response() {
        let router = Router::new().route("/volumes", get(|| async { "<html>oops</html>" }));
        let client = client_for(router, "").await;

        let err = client.find_description(&dune()).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_connection_failure_is_network_error() {
        let client =
            GoogleBooksClient::new(GoogleBooksClientConfig::new(stub::closed_url().await)).unwrap();

        let err = client.find_description(&dune()).await.unwrap_err();
        assert!(matches!(err, CatalogError::NetworkError(_)));
    }
}
