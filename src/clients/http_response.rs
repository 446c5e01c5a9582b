//! HTTP response types for the BigCommerce client.
//!
//! This module provides the [`HttpResponse`] type and the parsed
//! [`RateLimitInfo`] carried by every store API response.

use std::collections::HashMap;

/// Rate limit information parsed from the `X-Rate-Limit-*` headers.
///
/// The client does not throttle itself; these values are exposed so callers
/// can pace their own requests.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::clients::RateLimitInfo;
/// use std::collections::HashMap;
///
/// let mut headers = HashMap::new();
/// headers.insert("x-rate-limit-requests-left".to_string(), vec!["35".to_string()]);
/// headers.insert("x-rate-limit-requests-quota".to_string(), vec!["150".to_string()]);
///
/// let info = RateLimitInfo::from_headers(&headers).unwrap();
/// assert_eq!(info.requests_left, 35);
/// assert_eq!(info.requests_quota, Some(150));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RateLimitInfo {
    /// Requests remaining in the current window.
    pub requests_left: u32,
    /// Total requests allowed per window.
    pub requests_quota: Option<u32>,
    /// Window length in milliseconds.
    pub time_window_ms: Option<u64>,
    /// Milliseconds until the window resets.
    pub time_reset_ms: Option<u64>,
}

impl RateLimitInfo {
    /// Parses rate limit headers. Returns `None` when `X-Rate-Limit-Requests-Left`
    /// is absent or malformed.
    #[must_use]
    pub fn from_headers(headers: &HashMap<String, Vec<String>>) -> Option<Self> {
        fn first<T: std::str::FromStr>(
            headers: &HashMap<String, Vec<String>>,
            name: &str,
        ) -> Option<T> {
            headers
                .get(name)
                .and_then(|values| values.first())
                .and_then(|value| value.trim().parse().ok())
        }

        Some(Self {
            requests_left: first(headers, "x-rate-limit-requests-left")?,
            requests_quota: first(headers, "x-rate-limit-requests-quota"),
            time_window_ms: first(headers, "x-rate-limit-time-window-ms"),
            time_reset_ms: first(headers, "x-rate-limit-time-reset-ms"),
        })
    }
}

/// An HTTP response from the store API.
///
/// The body is kept as the raw text that was read off the wire; decoding is
/// left to the REST layer so decode failures can report what was received.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, lowercased (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
    /// Rate limit information, if the API reported it.
    pub rate_limit: Option<RateLimitInfo>,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`, parsing the rate limit headers.
    #[must_use]
    pub fn new(code: u16, headers: HashMap<String, Vec<String>>, body: impl Into<String>) -> Self {
        let rate_limit = RateLimitInfo::from_headers(&headers);
        Self {
            code,
            headers,
            body: body.into(),
            rate_limit,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` for `204 No Content`.
    #[must_use]
    pub const fn is_no_content(&self) -> bool {
        self.code == 204
    }

    /// Returns the first value of a header, matched case-insensitively.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns the `X-Request-Id` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.header("x-request-id")
    }

    /// Parses the body as JSON. An empty body parses as `null`.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`serde_json::Error`] if the body is not JSON.
    pub fn json(&self) -> Result<serde_json::Value, serde_json::Error> {
        if self.body.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&self.body)
    }
}
