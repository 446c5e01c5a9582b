//! Configuration types for the BigCommerce client.
//!
//! # Overview
//!
//! - [`BigCommerceConfig`]: all settings needed to talk to one store
//! - [`BigCommerceConfigBuilder`]: a builder for [`BigCommerceConfig`]
//! - [`StoreHash`], [`AccessToken`], [`ClientId`], [`ApiHost`]: validated newtypes
//! - [`ApiVersion`]: the REST API generation (`v2` or `v3`)
//!
//! # Example
//!
//! ```rust
//! use bigcommerce_api::{AccessToken, BigCommerceConfig, StoreHash};
//! use std::time::Duration;
//!
//! let config = BigCommerceConfig::builder()
//!     .store_hash(StoreHash::new("abc123").unwrap())
//!     .access_token(AccessToken::new("token").unwrap())
//!     .max_retries(5)
//!     .retry_delay(Duration::from_millis(500))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.max_retries(), 5);
//! ```

mod newtypes;
mod version;

pub use newtypes::{AccessToken, ApiHost, ClientId, StoreHash};
pub use version::ApiVersion;

use crate::error::ConfigError;
use std::time::Duration;

/// Default number of consecutive page-fetch failures tolerated by the pager.
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default pause between page-fetch retries.
pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

/// Configuration for a BigCommerce store connection.
///
/// `BigCommerceConfig` is `Clone`, `Send`, and `Sync`; one value can back any
/// number of clients.
#[derive(Clone, Debug)]
pub struct BigCommerceConfig {
    store_hash: StoreHash,
    access_token: AccessToken,
    client_id: Option<ClientId>,
    api_host: ApiHost,
    max_retries: u32,
    retry_delay: Duration,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfig {
    /// Creates a new builder for constructing a `BigCommerceConfig`.
    #[must_use]
    pub fn builder() -> BigCommerceConfigBuilder {
        BigCommerceConfigBuilder::new()
    }

    /// Returns the store hash.
    #[must_use]
    pub const fn store_hash(&self) -> &StoreHash {
        &self.store_hash
    }

    /// Returns the access token.
    #[must_use]
    pub const fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    /// Returns the client id, if configured.
    #[must_use]
    pub const fn client_id(&self) -> Option<&ClientId> {
        self.client_id.as_ref()
    }

    /// Returns the API host.
    #[must_use]
    pub const fn api_host(&self) -> &ApiHost {
        &self.api_host
    }

    /// Returns the retry budget used when enumerating paged collections.
    #[must_use]
    pub const fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Returns the fixed delay between page-fetch retries.
    #[must_use]
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the store base URL, e.g. `https://api.bigcommerce.com/stores/abc123`.
    #[must_use]
    pub fn store_url(&self) -> String {
        format!(
            "{}/stores/{}",
            self.api_host.as_ref(),
            self.store_hash.as_ref()
        )
    }
}

// Verify BigCommerceConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<BigCommerceConfig>();
};

/// Builder for constructing [`BigCommerceConfig`] instances.
///
/// Required fields are `store_hash` and `access_token`.
///
/// # Defaults
///
/// - `api_host`: `https://api.bigcommerce.com`
/// - `max_retries`: 3
/// - `retry_delay`: 1 second
/// - `client_id`: `None`
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct BigCommerceConfigBuilder {
    store_hash: Option<StoreHash>,
    access_token: Option<AccessToken>,
    client_id: Option<ClientId>,
    api_host: Option<ApiHost>,
    max_retries: Option<u32>,
    retry_delay: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl BigCommerceConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the store hash (required).
    #[must_use]
    pub fn store_hash(mut self, hash: StoreHash) -> Self {
        self.store_hash = Some(hash);
        self
    }

    /// Sets the access token (required).
    #[must_use]
    pub fn access_token(mut self, token: AccessToken) -> Self {
        self.access_token = Some(token);
        self
    }

    /// Sets the client id sent as `X-Auth-Client`.
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Overrides the API host.
    #[must_use]
    pub fn api_host(mut self, host: ApiHost) -> Self {
        self.api_host = Some(host);
        self
    }

    /// Sets how many consecutive failures the pager tolerates per enumeration.
    #[must_use]
    pub const fn max_retries(mut self, retries: u32) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Sets the delay between page-fetch retries.
    #[must_use]
    pub const fn retry_delay(mut self, delay: Duration) -> Self {
        self.retry_delay = Some(delay);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`BigCommerceConfig`], validating that required fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `store_hash` or
    /// `access_token` are not set.
    pub fn build(self) -> Result<BigCommerceConfig, ConfigError> {
        let store_hash = self.store_hash.ok_or(ConfigError::MissingRequiredField {
            field: "store_hash",
        })?;
        let access_token = self
            .access_token
            .ok_or(ConfigError::MissingRequiredField {
                field: "access_token",
            })?;

        Ok(BigCommerceConfig {
            store_hash,
            access_token,
            client_id: self.client_id,
            api_host: self.api_host.unwrap_or_default(),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
            retry_delay: self.retry_delay.unwrap_or(DEFAULT_RETRY_DELAY),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}
