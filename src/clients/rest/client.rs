//! REST client implementation for the BigCommerce store API.
//!
//! This module provides the [`RestClient`] type for making REST API requests
//! with path normalization.

use std::collections::BTreeMap;

use crate::clients::rest::RestError;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::BigCommerceConfig;
use crate::rest::RetryPolicy;

/// REST API client for one BigCommerce store.
///
/// Provides convenient methods (`get`, `post`, `put`, `delete`) for making
/// REST API requests. Paths include the API generation prefix, e.g.
/// `v2/blog/posts` or `v3/catalog/products`.
///
/// # Thread Safety
///
/// `RestClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use bigcommerce_api::RestClient;
///
/// let client = RestClient::new(&config)?;
///
/// let response = client.get("v2/blog/posts", None).await?;
///
/// let body = serde_json::json!([{"title": "Hello", "body": "World"}]);
/// let response = client.post("v2/blog/posts", body, None).await?;
/// ```
#[derive(Debug)]
pub struct RestClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Retry policy applied by the collection pager.
    retry_policy: RetryPolicy,
}

// Verify RestClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RestClient>();
};

impl RestClient {
    /// Creates a new REST client for the configured store.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::Http`] if the HTTP client cannot be created.
    pub fn new(config: &BigCommerceConfig) -> Result<Self, RestError> {
        let http_client = HttpClient::new(config)?;

        Ok(Self {
            http_client,
            retry_policy: RetryPolicy::new(config.max_retries(), config.retry_delay()),
        })
    }

    /// Replaces the retry policy inherited from configuration.
    #[must_use]
    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        if policy != self.retry_policy {
            tracing::debug!(
                "Rest client overriding retry policy {:?} with {:?}",
                self.retry_policy,
                policy
            );
        }
        self.retry_policy = policy;
        self
    }

    /// Returns the retry policy used when enumerating collections.
    #[must_use]
    pub const fn retry_policy(&self) -> RetryPolicy {
        self.retry_policy
    }

    /// Returns the store base URI requests are sent to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        self.http_client.base_uri()
    }

    /// Sends a GET request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid (e.g., empty).
    /// Returns [`RestError::Http`] for HTTP-level errors.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut query = BTreeMap::new();
    /// query.insert("page".to_string(), "2".to_string());
    /// let response = client.get("v3/catalog/products", Some(query)).await?;
    /// ```
    pub async fn get(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Get, path, None, query).await
    }

    /// Sends a POST request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn post(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Post, path, Some(body), query)
            .await
    }

    /// Sends a PUT request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn put(
        &self,
        path: &str,
        body: serde_json::Value,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Put, path, Some(body), query)
            .await
    }

    /// Sends a DELETE request to the specified path.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] for HTTP-level errors.
    pub async fn delete(
        &self,
        path: &str,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        self.request(HttpMethod::Delete, path, None, query)
            .await
    }

    /// Sends a request with an explicit method.
    ///
    /// The verb helpers above delegate here; resource accessors call it
    /// directly with the method declared on the resolved path. A JSON body,
    /// when present, is sent with `Content-Type: application/json`.
    ///
    /// # Errors
    ///
    /// Returns [`RestError::InvalidPath`] if the path is invalid.
    /// Returns [`RestError::Http`] if the request fails validation (e.g. a
    /// POST without a body) or cannot be sent.
    pub async fn request(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<serde_json::Value>,
        query: Option<BTreeMap<String, String>>,
    ) -> Result<HttpResponse, RestError> {
        let normalized_path = normalize_path(path)?;

        let mut builder = HttpRequest::builder(method, normalized_path);

        if let Some(body_value) = body {
            builder = builder.body(body_value).body_type(DataType::Json);
        }

        if let Some(query_params) = query {
            builder = builder.query(query_params);
        }

        let request = builder.build().map_err(|e| RestError::Http(e.into()))?;

        self.http_client.request(request).await.map_err(Into::into)
    }
}

/// Normalizes a REST API path relative to the store base URL.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(normalize_path("v2/blog/posts")?, "v2/blog/posts");
/// assert_eq!(normalize_path("/v2/blog/posts/")?, "v2/blog/posts");
/// ```
fn normalize_path(path: &str) -> Result<String, RestError> {
    let path = path.trim().trim_matches('/');

    if path.is_empty() {
        return Err(RestError::InvalidPath {
            path: String::new(),
        });
    }

    if path.split('/').any(|segment| segment == "..") {
        return Err(RestError::InvalidPath {
            path: path.to_string(),
        });
    }

    Ok(path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AccessToken, StoreHash};
    use std::time::Duration;

    fn create_test_config() -> BigCommerceConfig {
        BigCommerceConfig::builder()
            .store_hash(StoreHash::new("abc123").unwrap())
            .access_token(AccessToken::new("token").unwrap())
            .max_retries(2)
            .retry_delay(Duration::from_millis(10))
            .build()
            .unwrap()
    }

    // === Path Normalization Tests ===

    #[test]
    fn test_normalize_path_strips_leading_slash() {
        assert_eq!(normalize_path("/v2/blog/posts").unwrap(), "v2/blog/posts");
    }

    #[test]
    fn test_normalize_path_strips_trailing_slash() {
        assert_eq!(
            normalize_path("v3/catalog/products/").unwrap(),
            "v3/catalog/products"
        );
    }

    #[test]
    fn test_normalize_path_handles_double_slashes() {
        assert_eq!(normalize_path("//v2/blog/posts").unwrap(), "v2/blog/posts");
    }

    #[test]
    fn test_normalize_path_empty_path_returns_error() {
        let result = normalize_path("");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));

        let result = normalize_path("/");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path.is_empty()));
    }

    #[test]
    fn test_normalize_path_rejects_parent_segments() {
        let result = normalize_path("v3/../../other");
        assert!(matches!(result, Err(RestError::InvalidPath { path }) if path == "v3/../../other"));
    }

    // === RestClient Construction Tests ===

    #[test]
    fn test_rest_client_inherits_retry_policy_from_config() {
        let client = RestClient::new(&create_test_config()).unwrap();

        assert_eq!(
            client.retry_policy(),
            RetryPolicy::new(2, Duration::from_millis(10))
        );
        assert_eq!(client.base_uri(), "https://api.bigcommerce.com/stores/abc123");
    }

    #[test]
    fn test_rest_client_with_retry_policy_overrides_config() {
        let client = RestClient::new(&create_test_config())
            .unwrap()
            .with_retry_policy(RetryPolicy::new(0, Duration::ZERO));

        assert_eq!(client.retry_policy().max_retries, 0);
        assert_eq!(client.retry_policy().delay, Duration::ZERO);
    }

    #[test]
    fn test_rest_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RestClient>();
    }
}
