//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated BigCommerce store hash.
///
/// The store hash is the short identifier that appears in every API path
/// (`/stores/{store_hash}/v3/...`). It is normalized to lowercase.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::StoreHash;
///
/// let hash = StoreHash::new("ABC123").unwrap();
/// assert_eq!(hash.as_ref(), "abc123");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StoreHash(String);

impl StoreHash {
    /// Creates a new validated store hash.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidStoreHash`] if the hash is empty or
    /// contains anything other than ASCII letters and digits.
    pub fn new(hash: impl Into<String>) -> Result<Self, ConfigError> {
        let hash = hash.into().trim().to_lowercase();

        if hash.is_empty() || !hash.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ConfigError::InvalidStoreHash { hash });
        }

        Ok(Self(hash))
    }
}

impl AsRef<str> for StoreHash {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Serialize for StoreHash {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for StoreHash {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API access token.
///
/// Sent as the `X-Auth-Token` header. The `Debug` implementation masks the
/// value so tokens do not leak into logs.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::AccessToken;
///
/// let token = AccessToken::new("my-token").unwrap();
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Creates a new validated access token.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyAccessToken`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self, ConfigError> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(ConfigError::EmptyAccessToken);
        }
        Ok(Self(token))
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

/// A validated API client id, sent as `X-Auth-Client` when configured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API host URL.
///
/// Defaults to `https://api.bigcommerce.com`. Overriding it is mostly useful
/// for pointing the client at a proxy or a local mock server. A trailing
/// slash is stripped.
///
/// # Example
///
/// ```rust
/// use bigcommerce_api::ApiHost;
///
/// let host = ApiHost::new("http://localhost:3000/").unwrap();
/// assert_eq!(host.as_ref(), "http://localhost:3000");
/// assert_eq!(host.scheme(), "http");
/// assert_eq!(host.host_name(), "localhost");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiHost {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl ApiHost {
    /// The production API host.
    pub const DEFAULT: &'static str = "https://api.bigcommerce.com";

    /// Creates a new validated API host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidApiHost`] if the URL has no scheme or host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidApiHost { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        let host_start = scheme_end + 3;
        let remainder = url.get(host_start..).unwrap_or_default();
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end <= host_start {
            return Err(ConfigError::InvalidApiHost { url: url.clone() });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl Default for ApiHost {
    fn default() -> Self {
        Self {
            url: Self::DEFAULT.to_string(),
            scheme_end: 5,
            host_start: 8,
            host_end: Self::DEFAULT.len(),
        }
    }
}

impl AsRef<str> for ApiHost {
    fn as_ref(&self) -> &str {
        &self.url
    }
}
